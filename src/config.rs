//! アプリケーション設定
//!
//! 優先順位: コマンドライン引数 > 環境変数 > config.toml > 既定値

use crate::env::{EnvVar, CATALOG_VAR, HOME_VAR, LOG_VAR};
use crate::error::{NutriError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DIR: &str = ".nutridex";

/// config.toml の内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    catalog: Option<PathBuf>,
    log_level: Option<String>,
}

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// profiles.json と config.toml を置くディレクトリ
    pub data_dir: PathBuf,
    /// カタログファイル（None なら組み込みカタログ）
    pub catalog: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// 既定のデータディレクトリから読み込み、環境変数を反映する
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(default_data_dir()?)?;
        config.apply_env();
        Ok(config)
    }

    /// 指定ディレクトリの config.toml を読み込む（存在しなければ既定値）
    pub fn load_from(data_dir: PathBuf) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let file = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str::<ConfigFile>(&content).map_err(|e| {
                NutriError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigFile::default(),
            Err(e) => return Err(NutriError::Io(e)),
        };

        let catalog = file.catalog.map(|p| resolve_relative(&data_dir, p));
        Ok(Self {
            data_dir,
            catalog,
            log_level: file.log_level,
        })
    }

    /// 環境変数で上書き
    pub fn apply_env(&mut self) {
        if let Some(catalog) = EnvVar::get(CATALOG_VAR) {
            self.catalog = Some(PathBuf::from(catalog));
        }
        if let Some(level) = EnvVar::get(LOG_VAR) {
            self.log_level = Some(level);
        }
    }

    /// コマンドライン引数で上書き
    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        if catalog.is_some() {
            self.catalog = catalog;
        }
        self
    }
}

/// NUTRIDEX_HOME、なければ ~/.nutridex
fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = EnvVar::get(HOME_VAR) {
        return Ok(PathBuf::from(dir));
    }
    let home = EnvVar::get("HOME")
        .ok_or_else(|| NutriError::Config("HOME environment variable not set".to_string()))?;
    Ok(PathBuf::from(home).join(DEFAULT_DIR))
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
