use thiserror::Error;

/// nutridex 統一エラー型
///
/// フィルタエンジン自体はエラーを返さない。ここに並ぶのはカタログ読み込み・
/// プロファイル永続化・設定読み込みといった周辺処理のエラーのみ。
#[derive(Debug, Error)]
pub enum NutriError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unsupported catalog format: {0}. Expected .json, .yaml, .yml or .toml")]
    UnsupportedFormat(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
