use serde::{Deserialize, Serialize};

/// 食品カテゴリ（固定語彙）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Legumes,
    Poissons,
    Viandes,
    Oleagineux,
    Cereales,
    Huiles,
}

impl Category {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Legumes => "legumes",
            Category::Poissons => "poissons",
            Category::Viandes => "viandes",
            Category::Oleagineux => "oleagineux",
            Category::Cereales => "cereales",
            Category::Huiles => "huiles",
        }
    }

    /// 識別子から取得（未知の識別子は None）
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == id)
    }

    /// 全カテゴリを取得（表示順）
    pub fn all() -> &'static [Category] {
        &[
            Category::Fruits,
            Category::Legumes,
            Category::Poissons,
            Category::Viandes,
            Category::Oleagineux,
            Category::Cereales,
            Category::Huiles,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
