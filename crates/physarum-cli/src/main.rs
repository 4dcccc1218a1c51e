//! Physarum CLI - drive the slime-mold event router from input files.
//!
//! The learned topology lives only in memory, so every invocation is a
//! one-shot run: seed from a wormhole file, replay an event batch for N
//! cycles, then answer the requested query.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "physarum")]
#[command(author, version, about = "Physarum - slime-mold event routing optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Router configuration file (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (enables cycle-level debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a topology and run optimization cycles over an event batch
    Simulate {
        /// Wormhole declarations (JSON array)
        wormholes: String,

        /// Observed events (JSON array), replayed each cycle
        #[arg(short, long)]
        events: Option<String>,

        /// Number of optimization cycles to run
        #[arg(short = 'n', long, default_value = "10")]
        cycles: u64,
    },

    /// Show the best route for a single event
    Route {
        /// Wormhole declarations (JSON array)
        wormholes: String,

        /// Source type of the event to route
        #[arg(long)]
        source_type: String,

        /// Event type of the event to route
        #[arg(long)]
        event_type: String,

        /// Warmup events (JSON array), replayed each cycle before routing
        #[arg(short, long)]
        events: Option<String>,

        /// Warmup cycles before the query
        #[arg(short = 'n', long, default_value = "1")]
        cycles: u64,
    },

    /// Show topology statistics after a run
    Stats {
        /// Wormhole declarations (JSON array)
        wormholes: String,

        /// Observed events (JSON array), replayed each cycle
        #[arg(short, long)]
        events: Option<String>,

        /// Number of optimization cycles to run
        #[arg(short = 'n', long, default_value = "10")]
        cycles: u64,
    },

    /// Export the route table as JSON
    Export {
        /// Wormhole declarations (JSON array)
        wormholes: String,

        /// Output file path
        output: String,

        /// Observed events (JSON array), replayed each cycle
        #[arg(short, long)]
        events: Option<String>,

        /// Number of optimization cycles to run
        #[arg(short = 'n', long, default_value = "10")]
        cycles: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    }

    let router_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Simulate {
            wormholes,
            events,
            cycles,
        } => commands::simulate::run(router_config, &wormholes, events.as_deref(), cycles),
        Commands::Route {
            wormholes,
            source_type,
            event_type,
            events,
            cycles,
        } => commands::route::run(
            router_config,
            &wormholes,
            &source_type,
            &event_type,
            events.as_deref(),
            cycles,
        ),
        Commands::Stats {
            wormholes,
            events,
            cycles,
        } => commands::stats::run(router_config, &wormholes, events.as_deref(), cycles),
        Commands::Export {
            wormholes,
            output,
            events,
            cycles,
        } => commands::export::run(router_config, &wormholes, &output, events.as_deref(), cycles),
    }
}
