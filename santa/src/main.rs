//! Secret-gift draw CLI.
//!
//! Loads a participant roster with exclusion constraints from `santa.toml`,
//! draws a valid assignment, and writes per-giver notifications plus
//! organizer reports.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use santa::check::{PrecheckOutcome, check_config};
use santa::core::types::MatchError;
use santa::draw::run_draw;
use santa::io::init::{InitOptions, init_config};
use santa::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "santa",
    version,
    about = "Constrained secret-gift draw with per-giver notifications"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a commented sample `santa.toml`.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
        /// Where to write the sample config.
        #[arg(long, default_value = "santa.toml")]
        config: PathBuf,
    },
    /// Validate the config and run the feasibility pre-check without drawing.
    Check {
        #[arg(long, default_value = "santa.toml")]
        config: PathBuf,
    },
    /// Draw the exchange and write notification and report artifacts.
    Draw {
        #[arg(long, default_value = "santa.toml")]
        config: PathBuf,
        /// Output directory for notifications and reports.
        #[arg(long, default_value = "out")]
        out: PathBuf,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Init { force, config } => {
            init_config(&config, &InitOptions { force })?;
            println!("wrote {}", config.display());
            Ok(exit_codes::OK)
        }
        Command::Check { config } => cmd_check(&config),
        Command::Draw { config, out } => cmd_draw(&config, &out),
    }
}

fn cmd_check(config: &PathBuf) -> Result<i32> {
    let outcome = check_config(config)?;
    println!("participants: {}", outcome.participants);
    if let Some((key, count)) = &outcome.tightest_giver {
        println!("tightest giver: {key} ({count} valid receivers)");
    }
    match outcome.precheck {
        PrecheckOutcome::Skipped => {
            println!("pre-check: skipped");
            Ok(exit_codes::OK)
        }
        PrecheckOutcome::Passed => {
            println!("pre-check: passed (not a solvability proof)");
            Ok(exit_codes::OK)
        }
        PrecheckOutcome::Infeasible { givers } => {
            eprintln!(
                "pre-check: infeasible, givers [{}] share too few valid receivers",
                givers.join(", ")
            );
            Ok(exit_codes::INFEASIBLE)
        }
    }
}

fn cmd_draw(config: &PathBuf, out: &PathBuf) -> Result<i32> {
    let summary = run_draw(config, out)?;
    println!(
        "{}: drew {} participants, {} notifications under {}",
        summary.event,
        summary.participants,
        summary.notifications.len(),
        out.display()
    );
    println!("organizer summary: {}", summary.summary_path.display());
    println!("audit file: {}", summary.audit_path.display());
    Ok(exit_codes::OK)
}

/// Map matching failures buried in the error chain to stable exit codes.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MatchError>() {
        Some(MatchError::Infeasible { .. }) => exit_codes::INFEASIBLE,
        Some(MatchError::Exhausted) => exit_codes::EXHAUSTED,
        Some(MatchError::InsufficientParticipants { .. }) | None => exit_codes::INVALID,
    }
}
