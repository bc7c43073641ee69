use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word2mp3::cli::{self, Cli};
use word2mp3::domain::tts::ConversionService;
use word2mp3::infrastructure::config::{Config, LogFormat};
use word2mp3::infrastructure::repositories::GoogleTtsRepository;

/// The endpoint serves browsers; requests without a browser user agent get
/// rejected.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/118.0";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::debug!(
        endpoint = %config.tts_endpoint,
        timeout_secs = config.request_timeout_secs,
        "Starting word2mp3"
    );

    // Create the HTTP client shared by all synthesis calls
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;

    let tts_repo = Arc::new(GoogleTtsRepository::new(client, config.tts_endpoint.clone()));
    let service = ConversionService::new(tts_repo);

    match args.text {
        Some(text) => cli::run_direct(&service, text, args.output, args.lang).await,
        None => cli::repl::run(&service).await?,
    }

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "word2mp3=warn".into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "word2mp3=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
