//! vicontext - replay key-binding guard checks against recorded views
//!
//! This is the main entry point for the command line tool.

#![deny(warnings)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use vicontext::config::Config;
use vicontext::evaluator;
use vicontext::logging;
use vicontext::scenario::Scenario;

/// vicontext - vi key-binding context evaluator
#[derive(Parser, Debug)]
#[command(name = "vicontext")]
#[command(about = "Evaluate vi key-binding contexts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay the queries of a scenario file
    Eval {
        /// Scenario JSON file
        scenario: PathBuf,
        /// Config file (defaults to ~/.config/vicontext/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List supported predicates
    Predicates,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { scenario, config } => run_scenario(&scenario, config),
        Commands::Predicates => {
            for name in evaluator::predicate_names() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            print_completions(shell);
            Ok(())
        }
    }
}

/// Evaluate every query in a scenario and print the results
fn run_scenario(path: &Path, config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(p) => Config::load_from(&p)
            .with_context(|| format!("Failed to load config {}", p.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let scenario = Scenario::load(path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;

    for outcome in scenario.replay(&config) {
        let query = &outcome.query;
        println!(
            "{} {} {} -> {}",
            query.key,
            query.operator.as_str(),
            query.operand,
            outcome.result
        );
    }

    Ok(())
}

/// Print shell completions
fn print_completions(shell: clap_complete::Shell) {
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "vicontext",
        &mut std::io::stdout(),
    );
}
