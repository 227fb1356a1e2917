mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use search_router::{Config, Router};
use tracing::Level;

#[derive(Parser)]
#[command(name = "search-router")]
#[command(version, about = "Resolve search front-end paths to views", long_about = None)]
struct Cli {
    /// Router config file (defaults apply when missing)
    #[arg(short, long, global = true, default_value = "router.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more paths
    Resolve {
        /// Paths to resolve, e.g. /explore/ds123
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay a navigation session (use `back` / `forward` between paths)
    Navigate {
        /// First entry is the initial location and must be a path
        #[arg(required = true)]
        steps: Vec<String>,
    },

    /// List rules in evaluation order
    Routes,

    /// Show the theme rendered views are wrapped in
    Theme,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli.config)?;
    let router = Router::from_config(&config)
        .with_context(|| format!("Invalid routes in {:?}", cli.config))?;

    match cli.command {
        Commands::Resolve { paths, json } => {
            commands::resolve::execute(&router, &paths, json)?;
        }
        Commands::Navigate { steps } => {
            commands::navigate::execute(Arc::new(router), &config, &steps)?;
        }
        Commands::Routes => {
            commands::routes::execute(&router);
        }
        Commands::Theme => {
            commands::theme::execute(&config.theme);
        }
    }

    Ok(())
}
