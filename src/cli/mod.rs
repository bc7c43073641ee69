pub mod repl;

use crate::domain::tts::{ConversionRequest, ConversionService, Language};
use crate::error::{AppError, AppResult};
use clap::Parser;
use std::path::PathBuf;

/// Word2MP3: Convert text to MP3 audio files
///
/// Usage:
///   word2mp3 "hello"           - Convert text to hello.mp3 in current directory
///   word2mp3 "hello" -o /path  - Convert text to hello.mp3 in specified directory
///   word2mp3                   - Start interactive REPL mode
#[derive(Debug, Parser)]
#[command(name = "word2mp3", version, about = "Convert text to MP3 audio files")]
pub struct Cli {
    /// Text to convert. Starts interactive mode when omitted.
    pub text: Option<String>,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Language setting
    #[arg(short, long, default_value = "en")]
    pub lang: Language,
}

/// Run one direct conversion. Downstream failures are rendered here and
/// never crash the process.
pub async fn run_direct(
    service: &ConversionService,
    text: String,
    output: Option<PathBuf>,
    lang: Language,
) {
    let request = ConversionRequest {
        text,
        language: lang,
        output_dir: output,
    };

    convert_and_report(service, &request).await;
}

/// Convert one request and render the outcome at the boundary.
pub(crate) async fn convert_and_report(service: &ConversionService, request: &ConversionRequest) {
    let result: AppResult<_> = service.convert(request).await.map_err(AppError::from);

    match result {
        Ok(path) => println!("✓ Saved: {}", path.display()),
        Err(e) => e.report(),
    }
}
