//! nutridex profile コマンド
//!
//! 栄養目標プロファイルの一覧・作成・表示・削除。

use super::render::format_amount;
use crate::config::AppConfig;
use crate::output;
use crate::profile::{
    goal_status, recommended_for, GoalBand, GoalOverrides, GoalStatus, NewProfile, Profile,
    ProfileRegistry, RemoveResult, Sex,
};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List profiles
    #[command(long_about = "Display all nutrition profiles with their personalised goals.")]
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Create a profile
    #[command(
        long_about = "Create a nutrition profile. Goals default to the recommended values for the given sex."
    )]
    Add {
        /// Display name
        name: String,

        /// Sex used to compute recommended values
        #[arg(long, value_enum, default_value = "femme")]
        sex: Sex,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Omega-3 goal (mg/day)
        #[arg(long)]
        omega3: Option<f64>,

        /// Vitamin D goal (µg/day)
        #[arg(long)]
        vitamin_d: Option<f64>,

        /// Magnesium goal (mg/day)
        #[arg(long)]
        magnesium: Option<f64>,

        /// Iron goal (mg/day)
        #[arg(long)]
        iron: Option<f64>,
    },

    /// Show profile details
    #[command(long_about = "Display a profile's goals next to the recommended values.")]
    Show {
        /// Profile identifier
        id: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Delete a profile
    #[command(long_about = "Delete a profile. Asks for confirmation unless --yes is given.")]
    Remove {
        /// Profile identifier
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

pub fn run(args: Args, config: &AppConfig) -> Result<(), String> {
    let mut registry = ProfileRegistry::in_dir(&config.data_dir);

    match args.command {
        Command::List { json } => run_list(&mut registry, json),
        Command::Add {
            name,
            sex,
            weight,
            omega3,
            vitamin_d,
            magnesium,
            iron,
        } => {
            let input = NewProfile {
                name,
                sex,
                weight_kg: weight,
                overrides: GoalOverrides {
                    omega_3: omega3,
                    vitamine_d: vitamin_d,
                    magnesium,
                    fer: iron,
                },
            };
            run_add(&mut registry, input)
        }
        Command::Show { id, json } => run_show(&mut registry, &id, json),
        Command::Remove { id, yes } => {
            let stdin = io::stdin();
            run_remove(&mut registry, &id, yes, &mut stdin.lock())
        }
    }
}

fn run_list(registry: &mut ProfileRegistry, json: bool) -> Result<(), String> {
    let profiles = registry.list().map_err(|e| e.to_string())?;

    if json {
        return print_json(&profiles);
    }

    if profiles.is_empty() {
        println!("No profiles. Create one with 'nutridex profile add'.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Sex", "Weight", "Ω-3", "Vit. D", "Mg", "Fe"]);
    for p in &profiles {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.sex.to_string(),
            format!("{} kg", format_amount(p.poids_kg)),
            format!("{} mg", format_amount(p.goals.omega_3)),
            format!("{} µg", format_amount(p.goals.vitamine_d)),
            format!("{} mg", format_amount(p.goals.magnesium)),
            format!("{} mg", format_amount(p.goals.fer)),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn run_add(registry: &mut ProfileRegistry, input: NewProfile) -> Result<(), String> {
    let recommended = recommended_for(input.sex);
    let profile = registry.add(input).map_err(|e| e.to_string())?;

    println!(
        "{}",
        output::success(&format!(
            "Profile '{}' created (id: {})",
            profile.name, profile.id
        ))
    );
    if profile.goals != recommended {
        println!("  Personalised goals differ from the recommended values.");
    }
    Ok(())
}

fn run_show(registry: &mut ProfileRegistry, id: &str, json: bool) -> Result<(), String> {
    let profile = registry.get(id).map_err(|e| e.to_string())?;

    if json {
        return serde_json::to_string_pretty(&profile)
            .map(|s| println!("{s}"))
            .map_err(|e| format!("Failed to serialize profile: {}", e));
    }

    println!(
        "{}",
        output::info(&format!(
            "{} ({}, {} kg)",
            profile.name.bold(),
            profile.sex,
            format_amount(profile.poids_kg)
        ))
    );
    if let Some(created_at) = profile.created_at {
        println!("  Created: {}", created_at.format("%Y-%m-%d %H:%M UTC"));
    }

    println!("{}", goals_table(&profile));
    Ok(())
}

/// 目標値と推奨値を並べた表
fn goals_table(profile: &Profile) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Nutrient", "Goal", "Recommended", "Difference", "Status"]);

    let recommended = profile.recommended.entries();
    for ((id, goal, unit), (_, reco, _)) in profile.goals.entries().into_iter().zip(recommended) {
        table.add_row(vec![
            id.to_string(),
            format!("{} {}", format_amount(goal), unit),
            format!("{} {}", format_amount(reco), unit),
            format_difference(goal - reco),
            format_status(goal_status(goal, reco)),
        ]);
    }
    table
}

fn format_difference(diff: f64) -> String {
    if diff > 0.0 {
        format!("+{}", format_amount(diff))
    } else if diff < 0.0 {
        format!("-{}", format_amount(-diff))
    } else {
        "=".to_string()
    }
}

/// 推奨値比を帯ごとの色で表示
fn format_status(status: GoalStatus) -> String {
    let text = format!("{:.0}%", status.percent);
    match status.band {
        GoalBand::Low => text.red().to_string(),
        GoalBand::Below => text.yellow().to_string(),
        GoalBand::Good => text.green().to_string(),
        GoalBand::High => text.blue().to_string(),
    }
}

fn run_remove(
    registry: &mut ProfileRegistry,
    id: &str,
    yes: bool,
    input: &mut impl BufRead,
) -> Result<(), String> {
    let profile = registry.get(id).map_err(|e| e.to_string())?;

    if !yes && !confirm_remove(&profile.name, input)? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    match registry.remove(id).map_err(|e| e.to_string())? {
        RemoveResult::Removed => {
            println!(
                "{}",
                output::success(&format!("Profile '{}' deleted.", profile.name))
            );
            Ok(())
        }
        RemoveResult::NotFound => Err(format!("Profile not found: {}", id)),
    }
}

/// ユーザーに削除確認を求める
fn confirm_remove(name: &str, input: &mut impl BufRead) -> Result<bool, String> {
    print!("Are you sure you want to delete profile '{}'? [y/N]: ", name);
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(|e| e.to_string())?;

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn print_json(profiles: &[Profile]) -> Result<(), String> {
    serde_json::to_string_pretty(profiles)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize profiles: {}", e))
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
