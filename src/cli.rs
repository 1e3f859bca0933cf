// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::queue::OrderFilter;

/// Command-line arguments for `shopflow`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shopflow",
    version,
    about = "Track work orders through the shop's department pipeline.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML). A missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "Shopflow.toml")]
    pub config: PathBuf,

    /// Order store (JSON). Overrides `[store].path` from the config.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHOPFLOW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manager roll-up of all orders.
    List {
        /// Case-insensitive match on customer, mfg id or rep.
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,

        /// Print status counts instead of the orders.
        #[arg(long)]
        summary: bool,
    },

    /// Create an order with every department pending.
    Create {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        rep: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        due_date: String,
        #[arg(long)]
        mfg_id: String,
    },

    /// Apply `start`, `complete` or `flag` to one department of one order.
    Mutate {
        order_id: String,
        department: String,
        action: String,

        /// Note stored with a flag.
        #[arg(long)]
        note: Option<String>,
    },

    /// Worker queue for one department.
    Tasks {
        department: String,

        /// Case-insensitive match on mfg id or customer.
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Print the configured department pipeline.
    Pipeline,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// `--filter` values.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Late,
    Done,
}

impl From<FilterArg> for OrderFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => OrderFilter::All,
            FilterArg::Active => OrderFilter::Active,
            FilterArg::Late => OrderFilter::Late,
            FilterArg::Done => OrderFilter::Done,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
