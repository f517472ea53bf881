use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinError {
    #[error("Invalid trajectory: {0}")]
    InvalidTrajectory(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Degenerate direction: {0}")]
    DegenerateDirection(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, KinError>;
