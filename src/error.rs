/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Render the error at the CLI boundary: log it, then print the
    /// user-facing line. Recoverable errors never escalate past here.
    pub fn report(&self) {
        tracing::error!(error = %self, "request failed");
        println!("Error: {self}");
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
