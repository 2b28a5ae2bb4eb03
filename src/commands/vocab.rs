//! nutridex vocab コマンド
//!
//! フィルタに指定できる識別子の一覧を表示する。

use crate::food::{Category, Season};
use crate::labels::{self, NUTRIENT_PRESETS, PROPERTIES};
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

/// 語彙の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VocabKind {
    Categories,
    Seasons,
    Properties,
    Nutrients,
}

impl VocabKind {
    fn all() -> &'static [VocabKind] {
        &[
            VocabKind::Categories,
            VocabKind::Seasons,
            VocabKind::Properties,
            VocabKind::Nutrients,
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            VocabKind::Categories => "Categories",
            VocabKind::Seasons => "Seasons",
            VocabKind::Properties => "Properties",
            VocabKind::Nutrients => "Nutrient presets",
        }
    }
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Show only one vocabulary (all are shown otherwise)
    #[arg(value_enum)]
    pub kind: Option<VocabKind>,
}

pub fn run(args: Args) -> Result<(), String> {
    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => VocabKind::all().to_vec(),
    };

    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", kind.title());
        println!("{table}", table = build_table(*kind));
    }
    Ok(())
}

fn build_table(kind: VocabKind) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Name"]);

    for (id, name) in rows(kind) {
        table.add_row(vec![id, name]);
    }
    table
}

/// (識別子, 表示名) の一覧
fn rows(kind: VocabKind) -> Vec<(String, String)> {
    match kind {
        VocabKind::Categories => Category::all()
            .iter()
            .map(|c| (c.as_str().to_string(), labels::category_name(*c).to_string()))
            .collect(),
        VocabKind::Seasons => Season::all()
            .iter()
            .map(|s| (s.as_str().to_string(), labels::season_name(*s).to_string()))
            .collect(),
        VocabKind::Properties => PROPERTIES
            .iter()
            .map(|p| (p.id.to_string(), p.name.to_string()))
            .collect(),
        VocabKind::Nutrients => NUTRIENT_PRESETS
            .iter()
            .map(|n| {
                (
                    n.id.to_string(),
                    format!("{} (≥ {}{})", n.name, n.threshold, n.unit),
                )
            })
            .collect(),
    }
}
