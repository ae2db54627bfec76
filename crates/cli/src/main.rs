//! Terminal front end for the todo tracker.
//!
//! Each invocation loads the collection once, applies a single command, and
//! relies on the store to persist after the mutation.

mod cli;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::output::Output;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "todo=debug,todo_core=debug"
    } else {
        "todo=info,todo_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let out = Output::new(cli.output);

    if let Err(e) = commands::handle(cli, &out) {
        out.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
