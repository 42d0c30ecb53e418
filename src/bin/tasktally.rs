//! Interactive task tracker entry point.

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;
use tasktally::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let Err(err) = cli::run(&args) else {
        return ExitCode::SUCCESS;
    };
    log::error!("tasktally stopped: {err:#}");
    if let Err(write_err) = writeln!(io::stderr(), "\n{}: {err:#}", "Error".red().bold()) {
        log::error!("could not report failure: {write_err}");
    }
    ExitCode::FAILURE
}
