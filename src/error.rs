use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for neatfile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the library can report.
///
/// Precondition variants (`NotFound`, `IsDirectory`, `PermissionDenied`,
/// `Open`) are produced before any output is created. `Read` is scoped to a
/// single input file, while `Write` concerns the shared output stream.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: no such file", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: is a directory", path.display())]
    IsDirectory { path: PathBuf },

    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: cannot open file: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot create output file {}: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("output file {} is also an input file", path.display())]
    OutputIsInput { path: PathBuf },

    #[error("error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),

    #[error("invalid comment pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to parse config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Whether the error only affects the file being processed.
    ///
    /// The CLI reports such errors and moves on to the next input.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. }
                | Error::IsDirectory { .. }
                | Error::PermissionDenied { .. }
                | Error::Open { .. }
                | Error::Read { .. }
        )
    }

    /// Map an `io::Error` from opening `path` to the matching precondition variant.
    pub fn from_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Open { path, source },
        }
    }
}
