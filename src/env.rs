/// データディレクトリを上書きする環境変数
pub const HOME_VAR: &str = "NUTRIDEX_HOME";
/// カタログファイルを指定する環境変数
pub const CATALOG_VAR: &str = "NUTRIDEX_CATALOG";
/// ログレベルを指定する環境変数
pub const LOG_VAR: &str = "NUTRIDEX_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列・空白のみはNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
