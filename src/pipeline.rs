//! File pipeline: precondition checks, output destination and per-file streaming.
//!
//! Files are processed one at a time, in order, into a single writer. Only the
//! matching step sees a trimmed, lossily decoded copy of each line; surviving
//! lines are written back byte-for-byte, each followed by a single `\n`.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    filter::{FilterPolicy, LineKind, classify},
    language::{CommentRule, LanguageRule, Registry},
};

/// Counters for one processed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStats {
    pub path: PathBuf,
    /// Name of the matched syntax family, `None` for unknown extensions.
    pub language: Option<&'static str>,
    pub lines_read: usize,
    pub comments_removed: usize,
    pub blanks_removed: usize,
    pub lines_written: usize,
}

impl FileStats {
    fn record(&mut self, kind: LineKind, dropped: bool) {
        self.lines_read += 1;
        match (kind, dropped) {
            (LineKind::Code, _) | (_, false) => self.lines_written += 1,
            (LineKind::Comment, true) => self.comments_removed += 1,
            (LineKind::Blank, true) => self.blanks_removed += 1,
        }
    }
}

/// Verify that `path` names a readable regular file.
pub fn check_input(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::from_open(path, e))?;
    if metadata.is_dir() {
        return Err(Error::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|e| Error::from_open(path, e))?;
    Ok(())
}

/// Check every input, collecting all failures instead of stopping at the first.
pub fn check_inputs<P: AsRef<Path>>(paths: &[P]) -> Vec<Error> {
    paths
        .iter()
        .filter_map(|path| check_input(path.as_ref()).err())
        .collect()
}

/// Refuse an output path that resolves to one of the inputs.
///
/// Creating the output truncates it, which would destroy the input before it is read.
pub fn ensure_output_not_input<P: AsRef<Path>>(output: &Path, inputs: &[P]) -> Result<()> {
    let Ok(output_canonical) = output.canonicalize() else {
        // Output does not exist yet, so it cannot be an input.
        return Ok(());
    };
    let clash = inputs.iter().any(|input| {
        input
            .as_ref()
            .canonicalize()
            .is_ok_and(|canonical| canonical == output_canonical)
    });
    if clash {
        return Err(Error::OutputIsInput {
            path: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Open the output destination: the named file, or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?),
        None => Box::new(io::stdout().lock()),
    };
    Ok(BufWriter::new(sink))
}

/// Stream `reader` into `writer`, dropping lines that `rules` and `policy` reject.
///
/// `path` only labels read errors.
pub fn strip_lines<R: BufRead, W: Write>(
    path: &Path,
    mut reader: R,
    writer: &mut W,
    rules: &[CommentRule],
    policy: FilterPolicy,
) -> Result<FileStats> {
    let mut stats = FileStats {
        path: path.to_path_buf(),
        ..FileStats::default()
    };
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        let line = strip_line_ending(&buf);
        let kind = classify(&String::from_utf8_lossy(line), rules);
        let dropped = kind.is_dropped(policy);
        stats.record(kind, dropped);

        if !dropped {
            writer.write_all(line).map_err(Error::Write)?;
            writer.write_all(b"\n").map_err(Error::Write)?;
        }
    }

    Ok(stats)
}

/// Process one file with the rules its extension selects.
pub fn process_file<W: Write>(
    path: &Path,
    registry: &Registry,
    policy: FilterPolicy,
    writer: &mut W,
) -> Result<FileStats> {
    let file = File::open(path).map_err(|e| Error::from_open(path, e))?;

    let language = registry.language_for(path);
    match language {
        Some(language) => log::debug!(
            "{}: using {} comment rules",
            path.display(),
            language.name()
        ),
        None => log::debug!(
            "{}: unknown extension, only blank lines apply",
            path.display()
        ),
    }

    let rules = language.map(LanguageRule::rules).unwrap_or(&[]);
    let mut stats = strip_lines(path, BufReader::new(file), writer, rules, policy)?;
    stats.language = language.map(LanguageRule::name);

    log::debug!(
        "{}: {} lines read, {} comments and {} blank lines removed",
        path.display(),
        stats.lines_read,
        stats.comments_removed,
        stats.blanks_removed
    );
    Ok(stats)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
