use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown command: {name} (available: {available})")]
    UnknownCommand { name: String, available: String },
}
