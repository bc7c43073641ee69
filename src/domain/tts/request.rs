use super::language::Language;
use std::path::PathBuf;

/// A single validated conversion: one synthesis call, one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub text: String,
    pub language: Language,
    pub output_dir: Option<PathBuf>,
}

/// Outcome of parsing one interactive line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub request: ConversionRequest,
    /// Language token that was not a supported code and got dropped in
    /// favour of the default. Only the quoted form produces this: there the
    /// token position is unambiguous, so the request survives with a warning
    /// instead of aborting.
    pub ignored_language: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No text provided")]
    EmptyText,
}

/// Parse one raw interactive line into a conversion request.
///
/// Two input conventions are supported:
///
/// - quoted: `"some text" [language_code] [output_directory]`
/// - unquoted: the trailing one or two tokens are treated as language code
///   and output directory when they match; otherwise the whole line is text.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('"') {
        if let Some(quote_end) = rest.find('"') {
            return parse_quoted(&rest[..quote_end], &rest[quote_end + 1..]);
        }
    }

    parse_unquoted(line)
}

/// Quoted form: the text is fixed by the quotes, so the remaining tokens are
/// positional (language, then output directory). Extra tokens are ignored.
fn parse_quoted(text: &str, remainder: &str) -> Result<ParsedLine, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyText);
    }

    let mut tokens = remainder.split_whitespace();
    let mut language = Language::default();
    let mut ignored_language = None;

    if let Some(code) = tokens.next() {
        match Language::from_code(code) {
            Some(supported) => language = supported,
            None => ignored_language = Some(code.to_string()),
        }
    }
    let output_dir = tokens.next().map(PathBuf::from);

    Ok(ParsedLine {
        request: ConversionRequest {
            text: text.to_string(),
            language,
            output_dir,
        },
        ignored_language,
    })
}

/// Unquoted form: trailing tokens only count as language/output when the
/// language token is a supported code; anything else keeps the whole line
/// as text.
fn parse_unquoted(line: &str) -> Result<ParsedLine, ParseError> {
    if line.is_empty() {
        return Err(ParseError::EmptyText);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();

    let (text, language, output_dir) = if parts.len() >= 3 {
        match Language::from_code(parts[parts.len() - 2]) {
            Some(language) => (
                parts[..parts.len() - 2].join(" "),
                language,
                Some(PathBuf::from(parts[parts.len() - 1])),
            ),
            None => match_trailing_language(&parts, line),
        }
    } else {
        match_trailing_language(&parts, line)
    };

    Ok(ParsedLine {
        request: ConversionRequest {
            text,
            language,
            output_dir,
        },
        ignored_language: None,
    })
}

fn match_trailing_language(parts: &[&str], line: &str) -> (String, Language, Option<PathBuf>) {
    if parts.len() >= 2 {
        if let Some(language) = Language::from_code(parts[parts.len() - 1]) {
            return (parts[..parts.len() - 1].join(" "), language, None);
        }
    }
    (line.to_string(), Language::default(), None)
}

/// Reduce text to a filesystem-safe filename stem: keep alphanumerics,
/// spaces, hyphens and underscores, strip trailing whitespace, then turn
/// the remaining spaces into underscores. Idempotent.
pub fn sanitize_filename(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().replace(' ', "_")
}
