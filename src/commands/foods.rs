//! nutridex foods コマンド
//!
//! 食品一覧を名前・プロパティ・カテゴリで絞り込んで表示する。

use super::render::{print_foods, ListFormat};
use crate::config::AppConfig;
use crate::filter::{filter_foods, FilterCriteria, ALL};
use crate::food::Category;
use clap::Parser;

const AFTER_HELP: &str = "\
FILTERS:
  All filters are combined (AND). Use 'tous' for --property or --category
  to disable that filter. Unknown values simply match nothing.
  Name search is case-insensitive but accent-sensitive.

OUTPUT FORMATS:
  (default)  Table with category, season and properties
  --json     JSON array of matching foods
  --simple   One food name per line";

#[derive(Debug, Parser)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Filter by name (case-insensitive substring)
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Filter by property tag (e.g. anti-inflammatoire, riche-omega3)
    #[arg(long, short = 'p')]
    pub property: Option<String>,

    /// Filter by category (e.g. fruits, poissons)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only food names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args, config: &AppConfig) -> Result<(), String> {
    let foods = super::load_foods(config)?;
    let criteria = build_criteria(&args);
    log::debug!("foods criteria: {:?}", criteria);
    warn_unknown_category(criteria.category());

    let filtered = filter_foods(&foods, &criteria);
    print_foods(
        &filtered,
        foods.len(),
        ListFormat::from_flags(args.json, args.simple),
        None,
    )
}

fn build_criteria(args: &Args) -> FilterCriteria {
    let mut criteria = FilterCriteria::new().with_text(args.search.as_str());
    if let Some(property) = &args.property {
        criteria = criteria.with_property(property.as_str());
    }
    if let Some(category) = &args.category {
        criteria = criteria.with_category(category.as_str());
    }
    criteria
}

/// 未知のカテゴリはエラーにせず、一致なしになることをログに残す
fn warn_unknown_category(category: Option<&str>) {
    if let Some(id) = category {
        if id != ALL && Category::from_id(id).is_none() {
            log::info!("unknown category '{}': no food will match", id);
        }
    }
}

#[cfg(test)]
#[path = "foods_test.rs"]
mod tests;
