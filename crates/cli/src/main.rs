//! Shipyard - starship catalog command-line interface
//!
//! Main entry point. Output goes to stdout, logs to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod context;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ListArgs};
use crate::context::AppContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli.config)?;

    match cli.command {
        Command::List(args) => list(&ctx, &args).await,
    }
}

async fn list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let starships = ctx.catalog.get_by_manufacturer(args.manufacturer.as_deref()).await?;
    let view = shipyard_core::PageView::paginate(starships, args.page, args.limit)?;

    let rendered = if args.json {
        output::render_json(&view, args.manufacturer.as_deref())?
    } else {
        output::render_table(&view)
    };
    println!("{rendered}");
    Ok(())
}
