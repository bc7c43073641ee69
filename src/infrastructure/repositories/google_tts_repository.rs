use super::tts_repository::TtsRepository;
use crate::domain::tts::Language;
use async_trait::async_trait;
use regex::Regex;

/// The translate endpoint rejects queries longer than 200 characters
const MAX_BATCH_SIZE: usize = 200;

/// Google Translate TTS implementation of the TTS repository.
/// Speaks the unauthenticated `translate_tts` endpoint and merges the MP3
/// bytes of consecutive batches into one stream.
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    endpoint: String,
    sentence_boundary: Regex,
}

impl GoogleTtsRepository {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            sentence_boundary: Regex::new(r"[.!?。！？]+\s*").expect("valid regex"),
        }
    }

    /// Split text into batches the endpoint accepts, keeping sentences
    /// together where possible. A single run with no usable boundary is
    /// hard-split on character positions.
    fn split_into_batches(&self, text: &str) -> Vec<String> {
        let mut batches = Vec::new();
        let mut current = String::new();

        for piece in self.sentence_pieces(text) {
            let piece_len = piece.chars().count();

            if piece_len > MAX_BATCH_SIZE {
                if !current.trim().is_empty() {
                    batches.push(current.trim().to_string());
                }
                current.clear();

                let chars: Vec<char> = piece.chars().collect();
                for chunk in chars.chunks(MAX_BATCH_SIZE) {
                    let chunk = chunk.iter().collect::<String>().trim().to_string();
                    if !chunk.is_empty() {
                        batches.push(chunk);
                    }
                }
                continue;
            }

            if !current.is_empty() && current.chars().count() + piece_len > MAX_BATCH_SIZE {
                batches.push(current.trim().to_string());
                current.clear();
            }
            current.push_str(piece);
        }

        if !current.trim().is_empty() {
            batches.push(current.trim().to_string());
        }

        batches
    }

    /// Sentence-sized pieces of `text`, each ending on a boundary match
    /// except possibly the last.
    fn sentence_pieces<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut last_end = 0;

        for mat in self.sentence_boundary.find_iter(text) {
            pieces.push(&text[last_end..mat.end()]);
            last_end = mat.end();
        }
        if last_end < text.len() {
            pieces.push(&text[last_end..]);
        }

        pieces
    }

    /// Fetch the audio for a single batch
    async fn fetch_batch(
        &self,
        text: &str,
        language: Language,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&total={}&idx={}&textlen={}&q={}",
            self.endpoint,
            language.as_str(),
            total,
            idx,
            text.chars().count(),
            urlencoding::encode(text)
        );

        tracing::info!(
            language = %language,
            batch_index = idx,
            text_length = text.len(),
            "Calling translate TTS endpoint"
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(
                error = %e,
                language = %language,
                batch_index = idx,
                "Translate TTS request failed"
            );
            format!("TTS request failed: {e}")
        })?;

        if !response.status().is_success() {
            tracing::error!(
                status = %response.status(),
                language = %language,
                batch_index = idx,
                "Translate TTS endpoint rejected the request"
            );
            return Err(format!("TTS endpoint returned {}", response.status()));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read TTS response body: {e}"))?;

        tracing::debug!(
            audio_size = audio_bytes.len(),
            batch_index = idx,
            "Audio batch received"
        );

        Ok(audio_bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = self.split_into_batches(text);
        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            "Text split into batches"
        );

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self
                .fetch_batch(batch, language, index, batches.len())
                .await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "google-translate",
            language = %language,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> GoogleTtsRepository {
        GoogleTtsRepository::new(reqwest::Client::new(), "http://localhost".to_string())
    }

    #[test]
    fn test_split_into_batches_small_text() {
        let text = "This is a short text.";
        let batches = repository().split_into_batches(text);
        assert_eq!(batches, vec![text.to_string()]);
    }

    #[test]
    fn test_split_into_batches_respects_max_size() {
        let text = "This is a sentence. ".repeat(40);
        let batches = repository().split_into_batches(&text);

        assert!(batches.len() > 1, "long text should produce several batches");
        for batch in &batches {
            assert!(
                batch.chars().count() <= MAX_BATCH_SIZE,
                "batch of {} chars exceeds limit",
                batch.chars().count()
            );
        }
    }

    #[test]
    fn test_split_into_batches_without_punctuation_hard_splits() {
        let text = "a".repeat(MAX_BATCH_SIZE + 50);
        let batches = repository().split_into_batches(&text);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), MAX_BATCH_SIZE);
        assert_eq!(batches[1].len(), 50);
    }

    #[test]
    fn test_split_into_batches_preserves_words() {
        let text = "Sentence number one. ".repeat(60);
        let batches = repository().split_into_batches(&text);

        let original_words = text.split_whitespace().count();
        let batched_words: usize = batches.iter().map(|b| b.split_whitespace().count()).sum();
        assert_eq!(original_words, batched_words);
    }

    #[test]
    fn test_split_into_batches_handles_cjk_boundaries() {
        let text = "這是一句話。".repeat(80);
        let batches = repository().split_into_batches(&text);

        assert!(batches.len() > 1);
        for batch in &batches {
            assert!(batch.chars().count() <= MAX_BATCH_SIZE);
        }
    }

    #[test]
    fn test_split_into_batches_exactly_max_size_is_one_batch() {
        let text = "a".repeat(MAX_BATCH_SIZE);
        let batches = repository().split_into_batches(&text);
        assert_eq!(batches, vec![text]);
    }
}
