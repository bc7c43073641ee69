use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for TtsServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => TtsServiceError::Invalid(msg),
            AppError::Io(e) => TtsServiceError::Io(e),
            _ => TtsServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Dependency(msg) => AppError::ExternalService(msg),
            TtsServiceError::Io(e) => AppError::Io(e),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
