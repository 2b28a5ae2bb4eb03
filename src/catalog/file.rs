//! カタログファイルの読み込み
//!
//! ファイルはバックエンドのテーブル構造に合わせ、食品の基本行 (`aliments`) と
//! プロパティ行 (`aliment_proprietes`) を別々に持つ。読み込み時に食品ごとに
//! プロパティ行を結合する。

use super::CatalogSource;
use crate::error::{NutriError, Result};
use crate::food::Food;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// カタログファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFormat {
    /// 拡張子から形式を判定
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "toml" => Ok(CatalogFormat::Toml),
            _ => Err(NutriError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// プロパティ行（食品とプロパティタグの関連）
#[derive(Debug, Clone, Deserialize)]
struct PropertyRow {
    aliment_id: String,
    propriete: String,
}

/// カタログファイルのルート構造
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    aliments: Vec<Food>,
    #[serde(default)]
    aliment_proprietes: Vec<PropertyRow>,
}

/// ファイルから読み込むカタログ
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Vec<Food>> {
        let format = CatalogFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path).map_err(|e| {
            NutriError::Catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        parse_catalog(&content, format)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 文字列を解析し、プロパティ行を結合した食品一覧を返す
pub(crate) fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<Food>> {
    let document: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
    };
    join_properties(document.aliments, document.aliment_proprietes)
}

/// 食品ごとにプロパティ行を結合
///
/// - インラインのプロパティの後ろにファイル順で追加し、重複は除く
/// - 存在しない食品を指す行は警告を出して無視する
/// - 食品IDの重複はエラー
fn join_properties(mut foods: Vec<Food>, rows: Vec<PropertyRow>) -> Result<Vec<Food>> {
    let mut seen = HashSet::new();
    for food in &foods {
        if !seen.insert(food.id.clone()) {
            return Err(NutriError::Catalog(format!(
                "Duplicate food id '{}'",
                food.id
            )));
        }
    }

    for row in rows {
        match foods.iter_mut().find(|f| f.id == row.aliment_id) {
            Some(food) => {
                food.add_property(row.propriete);
            }
            None => log::warn!(
                "ignoring property '{}' for unknown food id '{}'",
                row.propriete,
                row.aliment_id
            ),
        }
    }

    Ok(foods)
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
