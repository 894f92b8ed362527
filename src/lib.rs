//! neatfile - strip comments and blank lines from source files
//!
//! neatfile picks a comment syntax from each file's extension, drops lines that
//! are whole-line comments (or, optionally, blank), and streams the rest to a
//! file or stdout.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Optional `.neatfilerc.json` defaults
//! - `error`: Error type shared by the library
//! - `filter`: Line classification under a keep-empty policy
//! - `language`: Extension to comment-rule registry
//! - `pipeline`: Precondition checks and per-file streaming

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod language;
pub mod pipeline;
