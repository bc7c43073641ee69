use super::error::TtsServiceError;
use super::request::{sanitize_filename, ConversionRequest};
use crate::infrastructure::repositories::TtsRepository;
use std::path::PathBuf;
use std::sync::Arc;

/// Turns one validated request into one MP3 file on disk.
pub struct ConversionService {
    tts_repo: Arc<dyn TtsRepository>,
}

impl ConversionService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }

    /// Convert text to speech and persist it, returning the final path.
    ///
    /// This operation:
    /// - derives the output filename from the sanitized text
    /// - calls the synthesis capability once (no retries)
    /// - creates the output directory if it does not exist yet
    /// - overwrites any existing file of the same name
    pub async fn convert(&self, request: &ConversionRequest) -> Result<PathBuf, TtsServiceError> {
        // 1. Derive the filename; text that sanitizes away has nothing to say
        let stem = sanitize_filename(&request.text);
        if stem.is_empty() {
            return Err(TtsServiceError::Invalid("No text provided".to_string()));
        }

        tracing::info!(
            language = %request.language,
            text_length = request.text.len(),
            output_dir = ?request.output_dir,
            "Conversion request"
        );

        // 2. Synthesize through the injected capability
        let audio_data = self
            .tts_repo
            .synthesize(&request.text, request.language)
            .await
            .map_err(TtsServiceError::Dependency)?;

        // 3. Persist, creating intermediate directories on demand
        let path = match &request.output_dir {
            Some(dir) => {
                tokio::fs::create_dir_all(dir).await?;
                dir.join(format!("{stem}.mp3"))
            }
            None => PathBuf::from(format!("{stem}.mp3")),
        };
        tokio::fs::write(&path, &audio_data).await?;

        tracing::info!(
            path = %path.display(),
            audio_size_bytes = audio_data.len(),
            "Audio file written"
        );

        Ok(path)
    }
}
