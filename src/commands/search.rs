//! nutridex search コマンド
//!
//! 名前に加え、プロパティまたは栄養素の下限値で絞り込む詳細検索。

use super::render::{print_foods, ListFormat};
use crate::config::AppConfig;
use crate::filter::{filter_foods, FilterCriteria, NutrientThreshold};
use crate::labels;
use clap::Parser;

const AFTER_HELP: &str = "\
SEARCH MODES:
  --property P   Foods carrying property tag P
  --nutrient N   Foods with at least the preset amount of N per 100g
                 (proteines >= 15g, omega_3 >= 1g, vitamine_c >= 20mg,
                 magnesium >= 50mg); override with --min
  A missing nutrient value counts as 0.

OUTPUT FORMATS:
  (default)  Table (with the nutrient amount column in nutrient mode)
  --json     JSON array of matching foods
  --simple   One food name per line";

#[derive(Debug, Parser)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Filter by name (case-insensitive substring)
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Property mode: filter by property tag
    #[arg(long, short = 'p', conflicts_with = "nutrient")]
    pub property: Option<String>,

    /// Nutrient mode: filter by nutrient identifier (e.g. omega_3)
    #[arg(long, short = 'n')]
    pub nutrient: Option<String>,

    /// Minimum amount per 100g (defaults to the nutrient preset)
    #[arg(long, requires = "nutrient", allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only food names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args, config: &AppConfig) -> Result<(), String> {
    let criteria = build_criteria(&args)?;
    let foods = super::load_foods(config)?;
    log::debug!("search criteria: {:?}", criteria);

    let filtered = filter_foods(&foods, &criteria);
    print_foods(
        &filtered,
        foods.len(),
        ListFormat::from_flags(args.json, args.simple),
        criteria.nutrient().map(|t| t.nutrient.as_str()),
    )
}

fn build_criteria(args: &Args) -> Result<FilterCriteria, String> {
    let mut criteria = FilterCriteria::new().with_text(args.search.as_str());
    if let Some(property) = &args.property {
        criteria = criteria.with_property(property.as_str());
    }
    if let Some(nutrient) = &args.nutrient {
        criteria = criteria.with_nutrient(resolve_threshold(nutrient, args.min)?);
    }
    Ok(criteria)
}

/// 下限値の決定（--min 優先、なければプリセット）
fn resolve_threshold(nutrient: &str, min: Option<f64>) -> Result<NutrientThreshold, String> {
    let min = match min {
        Some(min) => min,
        None => labels::nutrient_preset(nutrient)
            .map(|p| p.threshold)
            .ok_or_else(|| {
                format!(
                    "No preset threshold for nutrient '{}'. Pass --min to set one.",
                    nutrient
                )
            })?,
    };
    Ok(NutrientThreshold::new(nutrient, min))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
