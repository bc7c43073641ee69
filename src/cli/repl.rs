use crate::domain::tts::{parse_line, ConversionService, SUPPORTED_LANGUAGES};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive loop: read one line, convert, repeat until an exit command,
/// end of input, or an interrupt. Per-request failures are printed and the
/// loop keeps going.
pub async fn run(service: &ConversionService) -> std::io::Result<()> {
    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!(">>> ");
        std::io::stdout().flush()?;

        // The interrupt is only observed here, between requests; a
        // conversion already in flight runs to completion.
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nGoodbye!");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // stdin closed
            println!("Goodbye!");
            return Ok(());
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_command(input) {
            println!("Goodbye!");
            return Ok(());
        }

        handle_line(service, input).await;
    }
}

async fn handle_line(service: &ConversionService, input: &str) {
    let parsed = match parse_line(input) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };

    if let Some(code) = &parsed.ignored_language {
        println!("Warning: Unsupported language code '{code}', using English");
    }

    super::convert_and_report(service, &parsed.request).await;
}

fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit()") || input.eq_ignore_ascii_case("exit()")
}

fn print_banner() {
    let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.as_str()).collect();

    println!("=== Word2MP3 Interactive Mode ===");
    println!("Enter text to convert, type 'quit()' or 'exit()' to leave");
    println!("Supported languages: {}", codes.join(", "));
    println!("Format: <text> [language_code] [output_directory]");
    println!("Example: hello world en /tmp/output");
    println!("Note: Use quotes for text with spaces if you need to specify language/output");
    println!("{}", "-".repeat(50));
}
