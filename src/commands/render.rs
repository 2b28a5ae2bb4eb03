//! 食品一覧の出力
//!
//! foods / search コマンド共通のテーブル・JSON・名前のみ出力。

use crate::food::Food;
use crate::labels;
use crate::output;
use comfy_table::{presets::UTF8_FULL, Table};

/// 一覧の出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
    Simple,
}

impl ListFormat {
    pub fn from_flags(json: bool, simple: bool) -> Self {
        if json {
            ListFormat::Json
        } else if simple {
            ListFormat::Simple
        } else {
            ListFormat::Table
        }
    }
}

/// これ以上の値は指数表記にする
const MAX_INTEGER_AMOUNT: f64 = 1e15;

/// 絞り込み結果を出力
///
/// `nutrient` を指定するとその栄養素の量を列に追加する。
pub fn print_foods(
    foods: &[&Food],
    total_count: usize,
    format: ListFormat,
    nutrient: Option<&str>,
) -> Result<(), String> {
    match format {
        ListFormat::Json => print_json(foods),
        ListFormat::Simple => {
            print_simple(foods, total_count);
            Ok(())
        }
        ListFormat::Table => {
            print_table(foods, total_count, nutrient);
            Ok(())
        }
    }
}

fn print_json(foods: &[&Food]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(foods)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize foods: {}", e))
}

fn print_simple(foods: &[&Food], total_count: usize) {
    if foods.is_empty() {
        output::print_empty(total_count);
        return;
    }
    for food in foods {
        println!("{}", food.name);
    }
}

fn print_table(foods: &[&Food], total_count: usize, nutrient: Option<&str>) {
    if foods.is_empty() {
        output::print_empty(total_count);
        return;
    }

    let mut header = vec!["ID", "Name", "Category", "Season", "Properties"];
    if let Some(id) = nutrient {
        header.push(id);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);

    for food in foods {
        let season = food
            .season
            .map(labels::season_name)
            .unwrap_or("-")
            .to_string();
        let mut row = vec![
            food.id.clone(),
            food.name.clone(),
            labels::category_singular(food.category).to_string(),
            season,
            format_properties(food),
        ];
        if let Some(id) = nutrient {
            row.push(format_amount(food.nutrient(id)));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!("{}", output::count_summary(foods.len(), total_count));
}

fn format_properties(food: &Food) -> String {
    if food.properties.is_empty() {
        return "-".to_string();
    }
    food.properties
        .iter()
        .map(|p| output::badge(p))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 数量を表示用に整形（整数なら小数点なし）
pub fn format_amount(value: f64) -> String {
    let abs = value.abs();
    if abs >= MAX_INTEGER_AMOUNT {
        format!("{:e}", value)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else if abs < 0.1 {
        format_small_amount(value)
    } else {
        format!("{:.1}", value)
    }
}

/// 0.1 未満の値は小数3桁まで（末尾の 0 は省く）
fn format_small_amount(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "0" || trimmed == "-0" {
        format!("{:.1e}", value)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Category;

    #[test]
    fn test_list_format_from_flags() {
        assert_eq!(ListFormat::from_flags(false, false), ListFormat::Table);
        assert_eq!(ListFormat::from_flags(true, false), ListFormat::Json);
        assert_eq!(ListFormat::from_flags(false, true), ListFormat::Simple);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(20.0), "20");
        assert_eq!(format_amount(2.3), "2.3");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_amount_keeps_small_values_visible() {
        assert_eq!(format_amount(0.04), "0.04");
        assert_eq!(format_amount(0.01), "0.01");
        assert_eq!(format_amount(0.005), "0.005");
        assert_eq!(format_amount(0.0001), "1.0e-4");
    }

    #[test]
    fn test_format_amount_large_values_do_not_saturate() {
        assert_eq!(format_amount(1e20), "1e20");
        assert_eq!(format_amount(123456.0), "123456");
    }

    #[test]
    fn test_format_properties_empty() {
        let food = Food::new("1", "Riz", Category::Cereales);
        assert_eq!(format_properties(&food), "-");
    }

    #[test]
    fn test_format_properties_uses_display_names() {
        let food = Food::new("1", "Saumon", Category::Poissons)
            .with_property("riche-omega3")
            .with_property("riche-vitamine-d");
        let formatted = format_properties(&food);
        assert!(formatted.contains("Riche en Ω-3"));
        assert!(formatted.contains("Vitamine D"));
    }
}
