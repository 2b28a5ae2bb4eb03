use serde::{Deserialize, Serialize};

/// 旬の季節（固定語彙）
///
/// 夏はデータ上 `été` と表記されるが、入力では `ete` も受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "printemps")]
    Printemps,
    #[serde(rename = "été", alias = "ete")]
    Ete,
    #[serde(rename = "automne")]
    Automne,
    #[serde(rename = "hiver")]
    Hiver,
}

impl Season {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Printemps => "printemps",
            Season::Ete => "été",
            Season::Automne => "automne",
            Season::Hiver => "hiver",
        }
    }

    /// 全季節を取得
    pub fn all() -> &'static [Season] {
        &[Season::Printemps, Season::Ete, Season::Automne, Season::Hiver]
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_serializes_with_accent() {
        assert_eq!(serde_json::to_string(&Season::Ete).unwrap(), "\"été\"");
    }

    #[test]
    fn test_season_accepts_unaccented_alias() {
        let parsed: Season = serde_json::from_str("\"ete\"").unwrap();
        assert_eq!(parsed, Season::Ete);
        let parsed: Season = serde_json::from_str("\"été\"").unwrap();
        assert_eq!(parsed, Season::Ete);
    }

    #[test]
    fn test_season_all() {
        assert_eq!(Season::all().len(), 4);
        assert_eq!(Season::Hiver.to_string(), "hiver");
    }
}
