use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetagError {
    #[error("line {line}: expected 3 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid time value '{value}'")]
    BadTime { line: usize, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
