//! Run orchestration: configuration merge, precondition checks, output
//! creation and sequential processing.
//!
//! Precondition failures are all reported before anything is created. A file
//! that fails while being read is reported and skipped; the run still ends
//! with `ExitStatus::Failure`. Output write failures abort the run.

use std::{env, io::Write, path::Path};

use anyhow::{Context, Result};

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{ConfigLoadResult, load_config},
    error::Error,
    filter::FilterPolicy,
    language::Registry,
    pipeline::{check_inputs, ensure_output_not_input, open_output, process_file},
};

/// Main entry point for the neatfile CLI.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    run_in(args, &cwd)
}

/// Run with `.neatfilerc.json` discovery starting at `cwd`.
pub(crate) fn run_in(args: Arguments, cwd: &Path) -> Result<ExitStatus> {
    if args.help {
        report::print_help();
        return Ok(ExitStatus::Success);
    }
    if args.version {
        report::print_version().context("Failed to print version")?;
        return Ok(ExitStatus::Success);
    }
    if args.list_languages {
        report::print_languages(Registry::builtin()).context("Failed to print languages")?;
        return Ok(ExitStatus::Success);
    }
    if args.files.is_empty() {
        report::print_usage_error("no input files");
        return Ok(ExitStatus::Failure);
    }

    let ConfigLoadResult { config, source } = load_config(cwd)?;
    if source.is_none() {
        log::debug!("no {} found, using defaults", crate::config::CONFIG_FILE_NAME);
    }
    let policy = FilterPolicy::new(args.keep_empty || config.keep_empty);
    let show_stats = args.stats || config.stats;

    let errors = check_inputs(&args.files);
    if !errors.is_empty() {
        for err in &errors {
            report::print_error(err);
        }
        return Ok(ExitStatus::Failure);
    }

    if let Some(output) = args.output.as_deref()
        && let Err(err) = ensure_output_not_input(output, &args.files)
    {
        report::print_error(&err);
        return Ok(ExitStatus::Failure);
    }

    let mut writer = match open_output(args.output.as_deref()) {
        Ok(writer) => writer,
        Err(err) => {
            report::print_error(&err);
            return Ok(ExitStatus::Failure);
        }
    };

    let registry = Registry::builtin();
    let mut processed = Vec::with_capacity(args.files.len());
    let mut failed = 0;

    for path in &args.files {
        match process_file(path, registry, policy, &mut writer) {
            Ok(stats) => processed.push(stats),
            Err(err) if err.is_per_file() => {
                report::print_error(&err);
                failed += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
    writer.flush().map_err(Error::Write)?;

    if show_stats {
        report::print_stats(&processed, failed);
    }

    Ok(if failed > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
