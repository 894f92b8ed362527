//! CLI argument definitions using clap.
//!
//! Help goes to stderr and usage errors exit with status 1, so clap's built-in
//! help and version flags are replaced by plain boolean flags handled in `run`.

use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, builder::BoolishValueParser};

/// Long flags also accepted with a single leading dash (`-keep-empty`).
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["keep-empty"];

#[derive(Debug, Default, Parser)]
#[command(
    name = "neatfile",
    version,
    about = "Strip comments and blank lines from source files",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Arguments {
    /// Files to process, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep empty lines in output
    #[arg(short, long, env = "NEATFILE_KEEP_EMPTY", value_parser = BoolishValueParser::new())]
    pub keep_empty: bool,

    /// Print per-file statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// List supported file extensions and exit
    #[arg(short, long)]
    pub list_languages: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    pub verbose: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// Rewrite single-dash long flags into their `--` form.
///
/// Everything after a bare `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            if arg.to_str().is_some_and(is_single_dash_long) {
                let mut long = OsString::from("-");
                long.push(&arg);
                return long;
            }
            arg
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|name| SINGLE_DASH_LONG_FLAGS.contains(&name))
}
