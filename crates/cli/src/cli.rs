//! Command-line argument parsing

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};

/// Browse the starship catalog with manufacturer details
#[derive(Parser, Debug)]
#[command(name = "shipyard")]
#[command(about = "Starship catalog with manufacturer enrichment")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML or JSON). Standard locations are probed when omitted.
    #[arg(long, global = true, value_name = "PATH", env = "SHIPYARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List starships, optionally filtered by manufacturer
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only starships whose manufacturer matches exactly, ignoring case
    #[arg(short, long, value_name = "NAME")]
    pub manufacturer: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Starships per page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..).try_map(usize::try_from))]
    pub limit: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
