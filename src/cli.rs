use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{foods, profile, search, show, vocab};

#[derive(Debug, Parser)]
#[command(name = "nutridex", version)]
#[command(about = "Nutri Pokédex: food nutrition catalog and goal profiles", long_about = None)]
pub struct Cli {
    /// Catalog file (.json, .yaml, .yml, .toml); the built-in catalog is used otherwise
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse foods by name, property and category
    Foods(foods::Args),

    /// Advanced search by property or nutrient threshold
    Search(search::Args),

    /// Show nutrition details of a food
    Show(show::Args),

    /// List known categories, seasons, properties and nutrient presets
    Vocab(vocab::Args),

    /// Manage nutrition goal profiles
    Profile(profile::Args),
}
