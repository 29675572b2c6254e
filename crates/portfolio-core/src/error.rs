use thiserror::Error;

/// Malformed declarative input read from markup attributes.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("phrase list is empty")]
    EmptyPhraseList,
    #[error("invalid counter target {0:?}")]
    InvalidTarget(String),
    #[error("invalid progress value {0:?}")]
    InvalidProgress(String),
    #[error("progress {0} outside 0..=100")]
    ProgressOutOfRange(f64),
    #[error("empty filter category")]
    EmptyCategory,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    Pending,
}
