//! ログ初期化
//!
//! 診断ログは stderr に出力し、標準出力の表やJSONと混ざらないようにする。
//! レベルの優先順位: `-v` の回数 > NUTRIDEX_LOG / config.toml > warn

use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "warn";

/// `-v` の回数からログレベルを決定
pub fn level_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// レベル文字列の正規化（未知のレベルは None）
pub fn normalize_level(level: &str) -> Option<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        "off" => Some("off"),
        _ => None,
    }
}

/// 実際に使うレベルを決定
pub fn resolve_level(verbose: u8, configured: Option<&str>) -> &'static str {
    level_from_verbosity(verbose)
        .or_else(|| configured.and_then(normalize_level))
        .unwrap_or(DEFAULT_LEVEL)
}

/// ロガーを起動する
///
/// 返り値のハンドルはプロセス終了まで保持すること。
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    Logger::try_with_str(level)
        .map_err(|e| format!("invalid log level `{level}`: {e}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| format!("failed to start logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), None);
        assert_eq!(level_from_verbosity(1), Some("info"));
        assert_eq!(level_from_verbosity(2), Some("debug"));
        assert_eq!(level_from_verbosity(5), Some("trace"));
    }

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" WARNING "), Some("warn"));
        assert_eq!(normalize_level("Debug"), Some("debug"));
        assert_eq!(normalize_level("loud"), None);
    }

    #[test]
    fn test_resolve_level_priority() {
        assert_eq!(resolve_level(2, Some("error")), "debug");
        assert_eq!(resolve_level(0, Some("error")), "error");
        assert_eq!(resolve_level(0, Some("bogus")), "warn");
        assert_eq!(resolve_level(0, None), "warn");
    }
}
