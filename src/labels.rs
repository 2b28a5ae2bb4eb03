//! 表示用ラベル
//!
//! カテゴリ・季節・プロパティタグの表示名と、詳細検索で使う栄養素プリセット。
//! 表示層の静的テーブルであり、フィルタエンジンからは参照しない。

use crate::food::{nutrient, Category, Season};
use regex::Regex;
use std::sync::LazyLock;

/// バッジの色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Fats,
    Omega3,
    Vitamin,
    Protein,
    Mineral,
}

/// 既知のプロパティタグ
#[derive(Debug, Clone, Copy)]
pub struct PropertyLabel {
    pub id: &'static str,
    pub name: &'static str,
    pub style: BadgeStyle,
}

pub const PROPERTIES: &[PropertyLabel] = &[
    PropertyLabel {
        id: "anti-inflammatoire",
        name: "Anti-inflammatoire",
        style: BadgeStyle::Fats,
    },
    PropertyLabel {
        id: "riche-omega3",
        name: "Riche en Ω-3",
        style: BadgeStyle::Omega3,
    },
    PropertyLabel {
        id: "antioxydant",
        name: "Antioxydant",
        style: BadgeStyle::Vitamin,
    },
    PropertyLabel {
        id: "riche-vitamine-d",
        name: "Vitamine D",
        style: BadgeStyle::Vitamin,
    },
    PropertyLabel {
        id: "neuroprotecteur",
        name: "Neuroprotecteur",
        style: BadgeStyle::Protein,
    },
    PropertyLabel {
        id: "cardioprotecteur",
        name: "Cardioprotecteur",
        style: BadgeStyle::Protein,
    },
    PropertyLabel {
        id: "riche-fer",
        name: "Riche en fer",
        style: BadgeStyle::Mineral,
    },
];

/// 詳細検索の栄養素プリセット
#[derive(Debug, Clone, Copy)]
pub struct NutrientPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub threshold: f64,
    pub unit: &'static str,
}

pub const NUTRIENT_PRESETS: &[NutrientPreset] = &[
    NutrientPreset {
        id: nutrient::PROTEINES,
        name: "Protéines",
        threshold: 15.0,
        unit: "g",
    },
    NutrientPreset {
        id: nutrient::OMEGA_3,
        name: "Oméga-3",
        threshold: 1.0,
        unit: "g",
    },
    NutrientPreset {
        id: nutrient::VITAMINE_C,
        name: "Vitamine C",
        threshold: 20.0,
        unit: "mg",
    },
    NutrientPreset {
        id: nutrient::MAGNESIUM,
        name: "Magnésium",
        threshold: 50.0,
        unit: "mg",
    },
];

/// プロパティの表示名（未知のタグはそのまま）
pub fn property_name(id: &str) -> &str {
    property_label(id).map(|p| p.name).unwrap_or(id)
}

/// プロパティのバッジ色（未知のタグはミネラル扱い）
pub fn property_style(id: &str) -> BadgeStyle {
    property_label(id)
        .map(|p| p.style)
        .unwrap_or(BadgeStyle::Mineral)
}

fn property_label(id: &str) -> Option<&'static PropertyLabel> {
    PROPERTIES.iter().find(|p| p.id == id)
}

pub fn nutrient_preset(id: &str) -> Option<&'static NutrientPreset> {
    NUTRIENT_PRESETS.iter().find(|p| p.id == id)
}

/// カテゴリ表示名（一覧タブ用、複数形）
pub fn category_name(category: Category) -> &'static str {
    match category {
        Category::Fruits => "Fruits",
        Category::Legumes => "Légumes",
        Category::Poissons => "Poissons",
        Category::Viandes => "Viandes",
        Category::Oleagineux => "Oléagineux",
        Category::Cereales => "Céréales",
        Category::Huiles => "Huiles",
    }
}

/// カテゴリ表示名（カード・詳細用、単数形）
pub fn category_singular(category: Category) -> &'static str {
    match category {
        Category::Fruits => "Fruit",
        Category::Legumes => "Légume",
        Category::Poissons => "Poisson",
        Category::Viandes => "Viande",
        Category::Oleagineux => "Oléagineux",
        Category::Cereales => "Céréale",
        Category::Huiles => "Huile",
    }
}

pub fn season_name(season: Season) -> &'static str {
    match season {
        Season::Printemps => "Printemps",
        Season::Ete => "Été",
        Season::Automne => "Automne",
        Season::Hiver => "Hiver",
    }
}

/// 微量栄養素の単位（ビタミンDのみ µg）
pub fn micronutrient_unit(id: &str) -> &'static str {
    if id.contains(nutrient::VITAMINE_D) {
        "µg"
    } else {
        "mg"
    }
}

static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w").expect("word start pattern is valid")
});

/// 栄養素キーを見出し形式に変換（"vitamine_b6" → "Vitamine B6"）
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

#[cfg(test)]
#[path = "labels_test.rs"]
mod tests;
