use crate::labels::{self, BadgeStyle};
use owo_colors::OwoColorize;

/// 一覧が空のときのメッセージ
///
/// カタログ自体が空なのか、条件に一致しなかったのかを区別する。
pub fn empty_message(total_count: usize) -> &'static str {
    if total_count == 0 {
        "Catalog is empty"
    } else {
        "No foods found"
    }
}

/// 空の一覧を表示
pub fn print_empty(total_count: usize) {
    println!("{} {}", "•".yellow(), empty_message(total_count));
}

pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

pub fn info(message: &str) -> String {
    format!("{} {}", "i".blue(), message)
}

/// プロパティタグをバッジ色付きの表示名に変換
pub fn badge(tag: &str) -> String {
    let name = labels::property_name(tag);
    match labels::property_style(tag) {
        BadgeStyle::Fats => name.yellow().to_string(),
        BadgeStyle::Omega3 => name.cyan().to_string(),
        BadgeStyle::Vitamin => name.green().to_string(),
        BadgeStyle::Protein => name.magenta().to_string(),
        BadgeStyle::Mineral => name.blue().to_string(),
    }
}

/// 件数サマリ（"3 of 6 food(s)"）
pub fn count_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{} food(s)", total)
    } else {
        format!("{} of {} food(s)", shown, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_distinguishes_empty_catalog() {
        assert_eq!(empty_message(0), "Catalog is empty");
        assert_eq!(empty_message(6), "No foods found");
    }

    #[test]
    fn test_badge_contains_display_name() {
        assert!(badge("riche-omega3").contains("Riche en Ω-3"));
        assert!(badge("sans-gluten").contains("sans-gluten"));
    }

    #[test]
    fn test_count_summary() {
        assert_eq!(count_summary(6, 6), "6 food(s)");
        assert_eq!(count_summary(2, 6), "2 of 6 food(s)");
    }

    #[test]
    fn test_success_contains_message() {
        assert!(success("Profile created").contains("Profile created"));
        assert!(info("Profile").contains("Profile"));
    }
}
