use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::DEFAULT_INPUT;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("File '{}' not found. Make sure {} exists.", .0.display(), DEFAULT_INPUT)]
    NotFound(PathBuf),
    #[error("Error: {0}")]
    Other(String),
}

impl AnalyzeError {
    /// Classify a failure to read the input file.
    pub fn from_read(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AnalyzeError::NotFound(path),
            _ => AnalyzeError::Other(err.to_string()),
        }
    }
}

impl From<io::Error> for AnalyzeError {
    fn from(err: io::Error) -> Self {
        AnalyzeError::Other(err.to_string())
    }
}
