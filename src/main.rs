use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jira_issue_link::{app, cli::Args, ui};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = app::run(args) {
        ui::print_error(&err);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
