//! フィルタロジック
//!
//! 食品一覧を検索条件で絞り込む共通モジュール。食品一覧と詳細検索の
//! 両方がこの関数を使う。
//!
//! - 条件はすべて AND で結合する
//! - 入力順を保持する（並べ替えない）
//! - 未知のカテゴリ・プロパティ・栄養素はエラーにせず「一致なし」とする
//! - 名前検索はアクセントを正規化しない（"epinards" は "Épinards" に一致しない）

use crate::food::Food;

/// カテゴリ・プロパティ条件で「すべて」を表す値
pub const ALL: &str = "tous";

/// 栄養素の下限条件（下限値を含む）
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientThreshold {
    pub nutrient: String,
    pub min: f64,
}

impl NutrientThreshold {
    pub fn new(nutrient: impl Into<String>, min: f64) -> Self {
        Self {
            nutrient: nutrient.into(),
            min,
        }
    }
}

/// 検索条件
///
/// 各フィールドは未指定なら「制約なし」。クエリごとに組み立てて使い捨てる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    text: String,
    category: Option<String>,
    property: Option<String>,
    nutrient: Option<NutrientThreshold>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_nutrient(mut self, threshold: NutrientThreshold) -> Self {
        self.nutrient = Some(threshold);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn nutrient(&self) -> Option<&NutrientThreshold> {
        self.nutrient.as_ref()
    }

    /// 有効な条件の数（空文字列と "tous" は数えない）
    pub fn active_count(&self) -> usize {
        let text = usize::from(!self.text.is_empty());
        let category = usize::from(is_constrained(self.category.as_deref()));
        let property = usize::from(is_constrained(self.property.as_deref()));
        let nutrient = usize::from(self.nutrient.is_some());
        text + category + property + nutrient
    }

    /// 制約が1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn is_constrained(value: Option<&str>) -> bool {
    value.is_some_and(|v| v != ALL)
}

/// 検索条件で食品を絞り込む
///
/// - 条件が空なら全件返却
/// - 入力の相対順を保持し、入力は変更しない
pub fn filter_foods<'a>(foods: &'a [Food], criteria: &FilterCriteria) -> Vec<&'a Food> {
    if criteria.is_empty() {
        return foods.iter().collect();
    }

    let query = criteria.text.to_lowercase();
    foods
        .iter()
        .filter(|f| contains_query(f, &query))
        .filter(|f| matches_category(f, criteria.category()))
        .filter(|f| matches_property(f, criteria.property()))
        .filter(|f| matches_nutrient(f, criteria.nutrient()))
        .collect()
}

/// 名前の部分一致（大文字小文字を区別しない）
pub fn matches_text(food: &Food, text: &str) -> bool {
    contains_query(food, &text.to_lowercase())
}

/// 小文字化済みのクエリで名前を照合
fn contains_query(food: &Food, query: &str) -> bool {
    query.is_empty() || food.name.to_lowercase().contains(query)
}

/// カテゴリの完全一致（未指定・"tous" は常に一致）
pub fn matches_category(food: &Food, category: Option<&str>) -> bool {
    match category {
        None | Some(ALL) => true,
        Some(id) => food.category.as_str() == id,
    }
}

/// プロパティタグの所持判定（未指定・"tous" は常に一致）
pub fn matches_property(food: &Food, property: Option<&str>) -> bool {
    match property {
        None | Some(ALL) => true,
        Some(tag) => food.has_property(tag),
    }
}

/// 栄養素の下限判定（欠損キーは 0 として扱う）
pub fn matches_nutrient(food: &Food, threshold: Option<&NutrientThreshold>) -> bool {
    match threshold {
        None => true,
        Some(t) => food.nutrient(&t.nutrient) >= t.min,
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
