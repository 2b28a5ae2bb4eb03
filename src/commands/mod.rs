use crate::catalog::{self, resolve_source};
use crate::cli::Command;
use crate::config::AppConfig;
use crate::food::Food;

pub fn dispatch(command: Command, config: &AppConfig) -> Result<(), String> {
    match command {
        Command::Foods(args) => foods::run(args, config),
        Command::Search(args) => search::run(args, config),
        Command::Show(args) => show::run(args, config),
        Command::Vocab(args) => vocab::run(args),
        Command::Profile(args) => profile::run(args, config),
    }
}

/// 設定に従ってカタログを読み込む
fn load_foods(config: &AppConfig) -> Result<Vec<Food>, String> {
    let source = resolve_source(config.catalog.clone());
    catalog::load_catalog(source.as_ref()).map_err(|e| e.to_string())
}

pub mod foods;
pub mod profile;
mod render;
pub mod search;
pub mod show;
pub mod vocab;
