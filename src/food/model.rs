use super::{Category, Season};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// カタログの1エントリ（食品）
///
/// シリアライズ時のフィールド名はバックエンドのカラム名（仏語）に合わせている。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie")]
    pub category: Category,
    #[serde(rename = "saisonnalite", default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(rename = "proprietes", default)]
    pub properties: Vec<String>,
    /// 主要栄養素・脂質内訳（g/100g）
    #[serde(rename = "nutriments", default)]
    pub nutrients: BTreeMap<String, f64>,
    /// ビタミン（mg/100g、ビタミンDのみ µg）
    #[serde(rename = "vitamines", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vitamins: BTreeMap<String, f64>,
    /// ミネラル（mg/100g）
    #[serde(rename = "mineraux", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub minerals: BTreeMap<String, f64>,
    #[serde(
        rename = "polyphenols_bioactifs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub bioactives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Food {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            season: None,
            properties: Vec::new(),
            nutrients: BTreeMap::new(),
            vitamins: BTreeMap::new(),
            minerals: BTreeMap::new(),
            bioactives: Vec::new(),
            description: None,
            image_url: None,
        }
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// プロパティタグを追加（重複は無視）
    pub fn with_property(mut self, tag: impl Into<String>) -> Self {
        self.add_property(tag);
        self
    }

    pub fn with_nutrient(mut self, id: impl Into<String>, amount: f64) -> Self {
        self.nutrients.insert(id.into(), amount);
        self
    }

    pub fn with_vitamin(mut self, id: impl Into<String>, amount: f64) -> Self {
        self.vitamins.insert(id.into(), amount);
        self
    }

    pub fn with_mineral(mut self, id: impl Into<String>, amount: f64) -> Self {
        self.minerals.insert(id.into(), amount);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// プロパティタグを追加し、追加されたかどうかを返す
    pub fn add_property(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_property(&tag) {
            return false;
        }
        self.properties.push(tag);
        true
    }

    pub fn has_property(&self, tag: &str) -> bool {
        self.properties.iter().any(|p| p == tag)
    }

    /// 栄養素量を取得
    ///
    /// 栄養素 → ビタミン → ミネラルの順に探し、どこにもなければ 0 を返す。
    pub fn nutrient(&self, id: &str) -> f64 {
        self.nutrients
            .get(id)
            .or_else(|| self.vitamins.get(id))
            .or_else(|| self.minerals.get(id))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
