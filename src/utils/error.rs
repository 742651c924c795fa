use thiserror::Error;

// The providers themselves cannot fail; writing the value out can.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
