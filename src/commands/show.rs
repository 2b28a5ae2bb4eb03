//! nutridex show コマンド
//!
//! 食品の詳細（主要栄養素・脂質・微量栄養素・生理活性成分）を表示する。

use super::render::format_amount;
use crate::catalog::find_food;
use crate::config::AppConfig;
use crate::food::analysis::{self, LipidSplit, MacroSplit, OmegaSplit};
use crate::food::{nutrient, Food};
use crate::labels;
use crate::output;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Food identifier
    pub id: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// JSON/YAML 出力用の構造体
#[derive(Debug, Serialize)]
struct FoodDetail<'a> {
    #[serde(flatten)]
    food: &'a Food,
    macro_split: MacroSplit,
    #[serde(skip_serializing_if = "Option::is_none")]
    lipid_split: Option<LipidSplit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    omega_split: Option<OmegaSplit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    omega_6_3_ratio: Option<f64>,
}

impl<'a> FoodDetail<'a> {
    fn new(food: &'a Food) -> Self {
        Self {
            food,
            macro_split: analysis::macro_split(food),
            lipid_split: analysis::lipid_split(food),
            omega_split: analysis::omega_split(food),
            omega_6_3_ratio: analysis::omega_ratio(food),
        }
    }
}

pub fn run(args: Args, config: &AppConfig) -> Result<(), String> {
    let foods = super::load_foods(config)?;
    let food = find_food(&foods, &args.id).map_err(|e| e.to_string())?;
    let detail = FoodDetail::new(food);

    match args.format {
        OutputFormat::Table => print_table(&detail),
        OutputFormat::Json => print_json(&detail)?,
        OutputFormat::Yaml => print_yaml(&detail)?,
    }

    Ok(())
}

fn print_table(detail: &FoodDetail) {
    let food = detail.food;

    println!("{}", food.name.bold());
    println!("{}", "=".repeat(food.name.chars().count()));
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["ID", food.id.as_str()]);
    table.add_row(vec!["Category", labels::category_singular(food.category)]);
    table.add_row(vec![
        "Season",
        food.season.map(labels::season_name).unwrap_or("-"),
    ]);
    let properties = food
        .properties
        .iter()
        .map(|p| output::badge(p))
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec!["Properties", non_empty(&properties)]);
    table.add_row(vec![
        "Description",
        food.description.as_deref().unwrap_or("-"),
    ]);
    println!("{table}");
    println!();

    // 主要栄養素
    println!("Macronutrients (per 100g)");
    println!("-------------------------");
    let split = detail.macro_split;
    let mut macros = Table::new();
    macros.load_preset(UTF8_FULL);
    macros.set_header(vec!["Nutrient", "Amount", "Share"]);
    for (label, id, share) in [
        ("Protéines", nutrient::PROTEINES, Some(split.proteins)),
        ("Glucides", nutrient::GLUCIDES, Some(split.carbs)),
        ("Lipides", nutrient::LIPIDES_TOTAUX, Some(split.fats)),
        ("Fibres", nutrient::FIBRES, None),
    ] {
        macros.add_row(vec![
            label.to_string(),
            format!("{}g", format_amount(food.nutrient(id))),
            share.map(format_percent).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{macros}");
    println!();

    // 脂質
    println!("Lipids");
    println!("------");
    match detail.lipid_split {
        Some(lipids) => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Fatty acids", "Amount", "Share of lipids"]);
            for (label, id, share) in [
                ("Saturés", nutrient::ACIDES_GRAS_SATURES, lipids.saturated),
                ("Mono-insaturés", nutrient::MONO_INSATURES, lipids.mono),
                ("Poly-insaturés", nutrient::POLY_INSATURES, lipids.poly),
            ] {
                table.add_row(vec![
                    label.to_string(),
                    format!("{}g", format_amount(food.nutrient(id))),
                    format_percent(share),
                ]);
            }
            println!("{table}");
        }
        None => println!("No lipid data"),
    }
    if let Some(omegas) = detail.omega_split {
        println!("{}", format_omega_split(food, omegas));
    }
    println!("{}", format_omega_ratio(detail.omega_6_3_ratio));
    println!();

    // 微量栄養素
    print_micronutrients("Vitamins", &food.vitamins);
    print_micronutrients("Minerals", &food.minerals);

    if !food.bioactives.is_empty() {
        println!("Bioactive compounds: {}", food.bioactives.join(", "));
    }
}

fn print_micronutrients(title: &str, values: &BTreeMap<String, f64>) {
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
    if values.is_empty() {
        println!("none");
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Amount"]);
    for (key, value) in values {
        table.add_row(vec![
            labels::humanize_key(key),
            format!("{} {}", format_amount(*value), labels::micronutrient_unit(key)),
        ]);
    }
    println!("{table}");
    println!();
}

fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// オメガ3・オメガ6 の量と合計に対する割合
fn format_omega_split(food: &Food, omegas: OmegaSplit) -> String {
    format!(
        "Ω-3: {}g ({})  Ω-6: {}g ({})",
        format_amount(food.nutrient(nutrient::OMEGA_3)),
        format_percent(omegas.omega_3),
        format_amount(food.nutrient(nutrient::OMEGA_6)),
        format_percent(omegas.omega_6)
    )
}

/// オメガ6:3比の表示（理想範囲は緑、超過は黄）
fn format_omega_ratio(ratio: Option<f64>) -> String {
    match ratio {
        None => "Ratio Ω-6:Ω-3: n/a".to_string(),
        Some(r) => {
            let text = format!("{:.1}:1", r);
            let colored = if analysis::is_ideal_ratio(r) {
                text.green().to_string()
            } else {
                text.yellow().to_string()
            };
            format!(
                "Ratio Ω-6:Ω-3: {} (ideal is {}:1 or lower)",
                colored,
                analysis::IDEAL_OMEGA_RATIO
            )
        }
    }
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn print_json(detail: &FoodDetail) -> Result<(), String> {
    serde_json::to_string_pretty(detail)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

fn print_yaml(detail: &FoodDetail) -> Result<(), String> {
    serde_yaml::to_string(detail)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, CatalogSource};

    #[test]
    fn test_detail_json_contains_food_and_analysis() {
        let foods = BuiltinCatalog.load().unwrap();
        let detail = FoodDetail::new(&foods[0]);
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["nom"], "Avocat");
        assert!(json["macro_split"]["fats"].as_f64().unwrap() > 50.0);
        assert!(json["omega_6_3_ratio"].as_f64().is_some());
        assert!(json["omega_split"]["omega_6"].as_f64().unwrap() > 90.0);
    }

    #[test]
    fn test_detail_json_skips_missing_ratio() {
        let foods = BuiltinCatalog.load().unwrap();
        let blueberry = find_food(&foods, "5").unwrap();
        let json = serde_json::to_value(FoodDetail::new(blueberry)).unwrap();
        assert!(json.get("omega_6_3_ratio").is_none());
        assert!(json.get("lipid_split").is_none());
        assert!(json.get("omega_split").is_none());
    }

    #[test]
    fn test_detail_yaml_serializes() {
        let foods = BuiltinCatalog.load().unwrap();
        let yaml = serde_yaml::to_string(&FoodDetail::new(&foods[1])).unwrap();
        assert!(yaml.contains("nom: Saumon"));
    }

    #[test]
    fn test_format_omega_ratio() {
        assert!(format_omega_ratio(None).contains("n/a"));
        assert!(format_omega_ratio(Some(17.0)).contains("17.0:1"));
    }

    #[test]
    fn test_format_omega_split() {
        let foods = BuiltinCatalog.load().unwrap();
        let avocado = &foods[0];
        let omegas = analysis::omega_split(avocado).unwrap();
        assert_eq!(
            format_omega_split(avocado, omegas),
            "Ω-3: 0.1g (6%)  Ω-6: 1.7g (94%)"
        );
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(57.69), "58%");
    }
}
