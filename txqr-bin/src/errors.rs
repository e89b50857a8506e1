use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TxqrCLIError {
    #[error("failed to read frames from {0}: {1}")]
    FailedToReadFrames(String, String),
    #[error("no frames found in {0}")]
    NoFramesFound(String),
}
