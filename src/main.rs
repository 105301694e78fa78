//! Algorithm visualizer layout engine - Entry Point

use algoviz::config::ResolvedConfig;
use algoviz::model::StructureKind;
use algoviz::view_state::compressor::MAX_ITEMS;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// Algorithm visualizer - lay out stacks and queues inside a fixed pixel budget
#[derive(Parser, Debug)]
#[command(name = "algoviz")]
#[command(version)]
#[command(about = "Compute compressed vertical layouts for stack and queue visualizations")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// What to compute
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print offsets and the floor line for N items
    Layout {
        /// Number of items to place
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_ITEMS as u64))]
        count: usize,

        /// Vertical budget in pixels (defaults to the budget derived from the screen height)
        #[arg(long, conflicts_with = "screen_height")]
        budget: Option<f64>,

        /// Screen height to derive spacing and budget from
        #[arg(long)]
        screen_height: Option<f64>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Apply actions to a structure and print the frame after each
    Simulate {
        /// Structure to simulate (stack or queue)
        #[arg(short, long)]
        structure: StructureKind,

        /// Screen height to derive spacing and budget from
        #[arg(long)]
        screen_height: Option<f64>,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Seed for `random` actions
        #[arg(long)]
        seed: Option<u64>,

        /// Actions: push:V, pop, enqueue:V, dequeue, peek, reset, random[:N]
        #[arg(required = true)]
        actions: Vec<String>,
    },

    /// Print the derived layout config and how many items fit
    Capacity {
        /// Screen height to derive spacing and budget from
        #[arg(long)]
        screen_height: Option<f64>,

        /// Emit JSON instead of key/value lines
        #[arg(long)]
        json: bool,
    },

    /// List available structures
    List,
}

impl Command {
    /// Screen height given on the command line, if any.
    pub fn screen_height(&self) -> Option<f64> {
        match self {
            Self::Layout { screen_height, .. }
            | Self::Simulate { screen_height, .. }
            | Self::Capacity { screen_height, .. } => *screen_height,
            Self::List => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = algoviz::config::load_config_with_precedence(args.config.clone())?;
        let merged = algoviz::config::merge_config(config_file);
        let with_env = algoviz::config::apply_env_overrides(merged);
        algoviz::config::apply_cli_overrides(with_env, args.command.screen_height())
    };

    algoviz::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let output = run(&args.command, &config)?;
    print!("{output}");

    Ok(())
}

fn run(command: &Command, config: &ResolvedConfig) -> Result<String, algoviz::model::AppError> {
    use algoviz::integration;

    match command {
        Command::Layout {
            count,
            budget,
            json,
            ..
        } => integration::layout_report(*count, *budget, config, *json),
        Command::Simulate {
            structure,
            json,
            seed,
            actions,
            ..
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            integration::simulate(*structure, actions, config, &mut rng, *json)
        }
        Command::Capacity { json, .. } => integration::capacity_report(config, *json),
        Command::List => Ok(integration::list_structures()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["algoviz", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["algoviz", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_is_required() {
        let result = Args::try_parse_from(["algoviz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_layout_parses_count_and_budget() {
        let args = Args::parse_from(["algoviz", "layout", "--count", "50", "--budget", "304"]);
        assert_eq!(
            args.command,
            Command::Layout {
                count: 50,
                budget: Some(304.0),
                screen_height: None,
                json: false,
            }
        );
    }

    #[test]
    fn test_layout_rejects_negative_count() {
        let result = Args::try_parse_from(["algoviz", "layout", "--count", "-3"]);
        assert!(result.is_err(), "negative counts must be rejected at parse time");
    }

    #[test]
    fn test_layout_rejects_count_above_maximum() {
        let too_many = (MAX_ITEMS + 1).to_string();
        let result = Args::try_parse_from(["algoviz", "layout", "--count", too_many.as_str()]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );

        let result =
            Args::try_parse_from(["algoviz", "layout", "--count", "18446744073709551615"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_budget_conflicts_with_screen_height() {
        let result = Args::try_parse_from([
            "algoviz",
            "layout",
            "--count",
            "3",
            "--budget",
            "320",
            "--screen-height",
            "900",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_simulate_parses_structure_and_actions() {
        let args = Args::parse_from([
            "algoviz", "simulate", "-s", "Queue", "--seed", "3", "enqueue:a", "dequeue",
        ]);
        match args.command {
            Command::Simulate {
                structure,
                seed,
                actions,
                ..
            } => {
                assert_eq!(structure, StructureKind::Queue);
                assert_eq!(seed, Some(3));
                assert_eq!(actions, vec!["enqueue:a", "dequeue"]);
            }
            other => panic!("expected Simulate, got {other:?}"),
        }
    }

    #[test]
    fn test_simulate_rejects_unknown_structure() {
        let result = Args::try_parse_from(["algoviz", "simulate", "-s", "heap", "peek"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_simulate_requires_actions() {
        let result = Args::try_parse_from(["algoviz", "simulate", "-s", "stack"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_flag_is_global() {
        let args = Args::parse_from(["algoviz", "list", "--config", "/tmp/a.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/a.toml")));
        assert_eq!(args.command, Command::List);
    }

    #[test]
    fn test_screen_height_flows_from_subcommand() {
        let args = Args::parse_from(["algoviz", "capacity", "--screen-height", "640"]);
        assert_eq!(args.command.screen_height(), Some(640.0));
    }

    #[test]
    fn test_run_list_names_both_structures() {
        let text = run(&Command::List, &ResolvedConfig::default()).unwrap();
        assert!(text.contains("stack") && text.contains("queue"));
    }
}
