use std::process::ExitCode;

/// Exit status of a neatfile run.
///
/// - `Success` (0): all files processed, or help/version/listing printed
/// - `Failure` (1): usage error, failed precondition, unwritable output or a
///   file that could not be read
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
