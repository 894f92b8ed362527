use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use neatfile::cli::{Arguments, ExitStatus, normalize_args};

fn main() -> ExitCode {
    let args = match Arguments::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitStatus::Failure.into();
        }
    };

    init_logging(args.verbose);

    match neatfile::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Failure.into()
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
