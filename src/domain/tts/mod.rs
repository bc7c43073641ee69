pub mod error;
pub mod language;
pub mod request;
pub mod service;

pub use error::TtsServiceError;
pub use language::{Language, SUPPORTED_LANGUAGES};
pub use request::{parse_line, sanitize_filename, ConversionRequest, ParseError, ParsedLine};
pub use service::ConversionService;
