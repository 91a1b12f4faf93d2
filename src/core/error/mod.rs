use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("allocation failed for {what}")]
    AllocFailed { what: &'static str },

    #[error("queue is empty")]
    Empty,

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QueueError>;
