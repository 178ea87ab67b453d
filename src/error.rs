use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a seed generation run. Only the input/output variants
/// abort the run; `Record` failures are logged and the batch continues.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read medication data from {path}: {detail}")]
    InputRead { path: PathBuf, detail: String },

    #[error("Failed to write seed SQL to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process medication '{name}': {detail}")]
    Record { name: String, detail: String },
}

impl SeedError {
    pub fn input_read(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        SeedError::InputRead {
            path: path.into(),
            detail: detail.to_string(),
        }
    }

    pub fn record(name: impl Into<String>, detail: impl ToString) -> Self {
        SeedError::Record {
            name: name.into(),
            detail: detail.to_string(),
        }
    }
}
