use std::io::Read;
use std::path::{Path, PathBuf};

pub mod extract;
pub mod reader;

use reader::open_maybe_gz;

/// Full contents of one TALP report, kept together with the path it came from
/// so that extraction failures can name the file.
#[derive(Debug, Clone)]
pub struct ReportText {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot read report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report {}: label \"{label}\" not found", path.display())]
    MissingLabel { path: PathBuf, label: &'static str },
    #[error("report {}: label \"{label}\" has malformed value \"{value}\" ({reason})", path.display())]
    MalformedValue {
        path: PathBuf,
        label: &'static str,
        value: String,
        reason: String,
    },
}

pub fn read_report(path: &Path) -> Result<ReportText, ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = open_maybe_gz(path).map_err(io_err)?;
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(io_err)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "read report");

    Ok(ReportText {
        path: path.to_path_buf(),
        contents,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
