//! Command-line interface layer.

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, normalize_args};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK};
pub use run::run_cli;
