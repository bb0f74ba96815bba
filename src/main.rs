// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::sync::Arc;
use tracing::warn;

use root_ranking::config::{CONFIG_FILE, Config};
use root_ranking::date_keys::{
    Clock, FixedClock, SystemClock, current_date_key, parse_date_key, previous_date_key,
};
use root_ranking::export::export_leaderboard_csv;
use root_ranking::leaderboard::{Leaderboard, load_leaderboard};
use root_ranking::movement::AnnotateOptions;
use root_ranking::source::source_for_base;
use root_ranking::web::{self, AppState};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot base URL or directory (overrides config.toml and SNAPSHOT_BASE)
    #[arg(long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the current and previous date keys
    DateKeys {
        /// Use this date (YYYYMMDD) instead of today
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the leaderboard
    Show {
        /// Date to rank (YYYYMMDD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Include previous amounts and amount changes
        #[arg(long)]
        with_amounts: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Export the leaderboard to CSV
    Export {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        with_amounts: bool,
    },
    /// Start the web server
    Serve {
        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default().with_env_overrides(|key| env::var(key).ok()),
            Some(e),
        ),
    };
    if let Some(base) = cli.base {
        config.snapshot_base = base;
    }
    init_logging(&config.log_level);
    if let Some(e) = config_error {
        warn!("Ignoring {}: {:#}", CONFIG_FILE, e);
    }

    match cli.command {
        Some(Commands::DateKeys { date }) => {
            let clock = clock_for(date.as_deref())?;
            println!("current:  {}", current_date_key(clock.as_ref()));
            println!("previous: {}", previous_date_key(clock.as_ref()));
        }
        Some(Commands::Show {
            date,
            with_amounts,
            json,
        }) => {
            let leaderboard = leaderboard_for(&config, date.as_deref(), with_amounts).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&leaderboard)?);
            } else {
                print_table(&leaderboard);
            }
        }
        Some(Commands::Export { date, with_amounts }) => {
            let leaderboard = leaderboard_for(&config, date.as_deref(), with_amounts).await?;
            let path = export_leaderboard_csv(&leaderboard, &config.output_dir)?;
            println!("✅ Leaderboard exported to {}", path.display());
        }
        Some(Commands::Serve { port }) => {
            let port = port.unwrap_or(config.port);
            let source = source_for_base(&config.snapshot_base, config.request_timeout())?;
            let state = AppState::new(source, Arc::new(SystemClock), config);
            web::start_server(state, port).await?;
        }
        None => {
            let leaderboard = leaderboard_for(&config, None, false).await?;
            print_table(&leaderboard);
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    let level = level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .init();
}

fn clock_for(date: Option<&str>) -> Result<Arc<dyn Clock>> {
    match date {
        Some(key) => Ok(Arc::new(FixedClock(parse_date_key(key)?))),
        None => Ok(Arc::new(SystemClock)),
    }
}

async fn leaderboard_for(
    config: &Config,
    date: Option<&str>,
    with_amounts: bool,
) -> Result<Leaderboard> {
    let clock = clock_for(date)?;
    let date_key = current_date_key(clock.as_ref());
    let source = source_for_base(&config.snapshot_base, config.request_timeout())?;
    let options = AnnotateOptions {
        include_amounts: with_amounts,
    };

    load_leaderboard(source.as_ref(), &date_key, options)
        .await
        .with_context(|| format!("No data for {} from {}", date_key, config.snapshot_base))
}

fn print_table(leaderboard: &Leaderboard) {
    for notice in leaderboard.notices() {
        eprintln!("⚠️  {}", notice);
    }

    println!("{}", leaderboard.heading());
    println!("{:>5}  {:>6}  {:<13}  {:>24}", "Rank", "Move", "Address", "Amount");

    for row in leaderboard.rows() {
        let mut line = format!(
            "{:>5}  {:>6}  {:<13}  {:>24}",
            row.rank, row.movement, row.address, row.amount
        );
        if let (Some(previous), Some(change)) = (&row.previous_amount, &row.amount_change) {
            line.push_str(&format!("  (was {}, change {})", previous, change));
        }
        println!("{}", line);
    }
}
