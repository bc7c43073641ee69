use crate::domain::tts::Language;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying synthesis provider so the parsing and filename
/// logic can be exercised against a deterministic fake.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single audio stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready to be written out (MP3 format)
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unreachable
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, String>;
}
