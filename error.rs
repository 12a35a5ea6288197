use std::io;
use std::path::PathBuf;

/// Failures met while scanning a document.
///
/// None of these abort the program: the driver logs them and hands back
/// whatever histogram it has.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("unable to open {}: {source}", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },
    #[error("read failed at line {line}: {source}")]
    SourceRead { line: usize, source: io::Error },
}

impl ScanError {
    /// Classify a failure to open `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => ScanError::SourceNotFound { path },
            _ => ScanError::SourceUnreadable { path, source },
        }
    }
}
