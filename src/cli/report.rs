//! Human-readable output on stderr, plus the language listing on stdout.
//!
//! Every `print_*` function has a `*_to` twin taking a writer, for tests.

use std::io::{self, Write};

use clap::CommandFactory;
use colored::Colorize;

use super::args::Arguments;
use crate::{error::Error, language::Registry, pipeline::FileStats};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_help() {
    print_help_to(&mut io::stderr().lock());
}

pub fn print_help_to<W: Write>(writer: &mut W) {
    let _ = write!(writer, "{}", Arguments::command().render_help());
}

pub fn print_version() -> io::Result<()> {
    print_version_to(&mut io::stdout().lock())
}

pub fn print_version_to<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", Arguments::command().render_version())
}

/// Print a usage error followed by the usage line.
pub fn print_usage_error(message: &str) {
    print_usage_error_to(message, &mut io::stderr().lock());
}

pub fn print_usage_error_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), message);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", Arguments::command().render_usage());
    let _ = writeln!(writer);
    let _ = writeln!(writer, "For more information, try '{}'.", "-h".cyan());
}

pub fn print_error(err: &Error) {
    print_error_to(err, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
}

/// Print the extension table.
pub fn print_languages(registry: &Registry) -> io::Result<()> {
    print_languages_to(registry, &mut io::stdout().lock())
}

pub fn print_languages_to<W: Write>(registry: &Registry, writer: &mut W) -> io::Result<()> {
    for language in registry.languages() {
        let rules = language
            .rules()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            writer,
            "{:<18} {:<16} {}",
            language.name(),
            rules,
            language.extensions().join(" ")
        )?;
    }
    Ok(())
}

/// Print one line per processed file and a closing summary.
pub fn print_stats(stats: &[FileStats], failed: usize) {
    print_stats_to(stats, failed, &mut io::stderr().lock());
}

pub fn print_stats_to<W: Write>(stats: &[FileStats], failed: usize, writer: &mut W) {
    for file in stats {
        let _ = writeln!(
            writer,
            "{} {} ({}): {} read, {} and {} removed, {} written",
            SUCCESS_MARK.green(),
            file.path.display(),
            file.language.unwrap_or("unknown"),
            plural(file.lines_read, "line"),
            plural(file.comments_removed, "comment line"),
            plural(file.blanks_removed, "blank line"),
            plural(file.lines_written, "line"),
        );
    }

    let comments: usize = stats.iter().map(|s| s.comments_removed).sum();
    let blanks: usize = stats.iter().map(|s| s.blanks_removed).sum();
    let summary = format!(
        "Processed {}: {} and {} removed",
        plural(stats.len(), "file"),
        plural(comments, "comment line"),
        plural(blanks, "blank line"),
    );
    let _ = writeln!(writer, "{}", summary.bold());

    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} could not be read", plural(failed, "file")).red()
        );
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
