//! 食品カタログの取得
//!
//! フィルタエンジンが必要とする結合済み `Food` 一覧を提供する。
//! 取得元は組み込みデータかカタログファイルのどちらか。

mod builtin;
mod file;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;

use crate::error::{NutriError, Result};
use crate::food::Food;
use std::path::PathBuf;

/// カタログ取得元
pub trait CatalogSource {
    /// 結合済みの食品一覧を取得
    fn load(&self) -> Result<Vec<Food>>;

    /// ログ・表示用の取得元名
    fn describe(&self) -> String;
}

/// 取得元を決定する（パス指定があればファイル、なければ組み込み）
pub fn resolve_source(path: Option<PathBuf>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    }
}

/// 取得元から読み込み、件数をログに残す
pub fn load_catalog(source: &dyn CatalogSource) -> Result<Vec<Food>> {
    let foods = source.load()?;
    log::debug!("loaded {} food(s) from {}", foods.len(), source.describe());
    Ok(foods)
}

/// 識別子で食品を検索
pub fn find_food<'a>(foods: &'a [Food], id: &str) -> Result<&'a Food> {
    foods
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| NutriError::FoodNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_source_without_path_is_builtin() {
        let source = resolve_source(None);
        assert_eq!(source.describe(), "built-in catalog");
    }

    #[test]
    fn test_resolve_source_with_path_is_file() {
        let source = resolve_source(Some(PathBuf::from("/tmp/aliments.json")));
        assert!(source.describe().contains("aliments.json"));
    }

    #[test]
    fn test_find_food() {
        let foods = load_catalog(&BuiltinCatalog).unwrap();
        assert_eq!(find_food(&foods, "2").unwrap().name, "Saumon");
    }

    #[test]
    fn test_find_food_not_found() {
        let foods = load_catalog(&BuiltinCatalog).unwrap();
        let err = find_food(&foods, "999").unwrap_err();
        assert!(matches!(err, NutriError::FoodNotFound(id) if id == "999"));
    }
}
