// ABOUTME: Command-line front end for generating and inspecting weekly workout plans
// ABOUTME: Seeds the in-memory store from JSON, selects the AI source from env, prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout plan CLI.
//!
//! Usage:
//! ```bash
//! # Generate the next week for a user (week 1 when none exists)
//! cargo run --bin fitplan-cli -- --seed demos/seed.json --user <uuid> generate
//!
//! # Generate a specific week
//! cargo run --bin fitplan-cli -- --seed demos/seed.json --user <uuid> generate --week 2
//!
//! # Current plan with recovery adjustments
//! cargo run --bin fitplan-cli -- --seed demos/seed.json --user <uuid> latest
//!
//! # Recovery assessment and adherence
//! cargo run --bin fitplan-cli -- --seed demos/seed.json --user <uuid> recovery
//! cargo run --bin fitplan-cli -- --seed demos/seed.json --user <uuid> adherence --week 1
//! ```
//!
//! Each run loads the seed file into memory and nothing is kept afterwards,
//! so a plan generated by one run is not visible to the next. Pass
//! `--write-back` with `generate` to store the updated data in the seed file:
//!
//! ```bash
//! cargo run --bin fitplan-cli -- --seed demos/seed.json --user <uuid> generate --write-back
//! ```
//!
//! Set `GROQ_API_KEY` to enable AI generation; without it the template
//! generator is used.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitplan::config::PlanGenerationConfig;
use fitplan::database::InMemoryDatabase;
use fitplan::logging::LoggingConfig;
use fitplan::services::{PlanRepositories, WorkoutPlanService};
use fitplan_intelligence::recommend_for_energy;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitplan weekly workout plan generator",
    long_about = "Generate and inspect week-by-week personal training plans from a JSON seed file"
)]
struct CliArgs {
    /// JSON seed file with profiles, logs, and prior plans
    #[arg(long)]
    seed: PathBuf,

    /// User to act on
    #[arg(long)]
    user: Uuid,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and store a plan
    Generate {
        /// Week to generate; defaults to the week after the latest plan
        #[arg(long)]
        week: Option<u32>,

        /// Save the store, including the new plan, back to the seed file
        #[arg(long)]
        write_back: bool,
    },
    /// Show the current plan with recovery adjustments
    Latest,
    /// Show the recovery assessment and a workout recommendation
    Recovery,
    /// Show completion adherence for one week
    Adherence {
        /// Plan week
        #[arg(long)]
        week: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let generation = PlanGenerationConfig::from_env().context("Invalid AI configuration")?;
    let db = InMemoryDatabase::from_seed_file(&args.seed)
        .await
        .with_context(|| format!("Failed to load seed file {}", args.seed.display()))?;
    let db = Arc::new(db);
    let service = WorkoutPlanService::new(
        PlanRepositories::shared(db.clone()),
        generation.build_primary_source(),
    );

    match args.command {
        Command::Generate { week, write_back } => {
            let stored = match week {
                Some(week) => service.generate_plan(args.user, week).await?,
                None => service.generate_next_plan(args.user).await?,
            };
            info!(plan_id = %stored.id, week = stored.plan.week_number, "Plan generated");
            if write_back {
                db.write_seed_file(&args.seed)
                    .await
                    .with_context(|| format!("Failed to update seed file {}", args.seed.display()))?;
            }
            print_json(&stored)?;
        }
        Command::Latest => print_json(&service.latest_plan(args.user).await?)?,
        Command::Recovery => {
            let assessment = service.recovery_status(args.user).await?;
            let recommendation = assessment.current_energy.map(recommend_for_energy);
            print_json(&json!({
                "assessment": assessment,
                "recommendation": recommendation,
            }))?;
        }
        Command::Adherence { week } => {
            let adherence = service.weekly_adherence(args.user, week).await?;
            print_json(&json!({
                "user_id": args.user,
                "week_number": week,
                "adherence_percent": adherence,
            }))?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
