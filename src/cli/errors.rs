use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Max size must be greater than 0")]
    ZeroMaxSize,
}
