//! `argmark` - render command-line usage guides to markdown

use clap::Parser;

use argmark::cli::args::Cli;
use argmark::cli::commands;
use argmark::error::ExitCode;
use argmark::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
