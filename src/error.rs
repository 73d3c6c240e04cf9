use crate::validate::ValidationErrors;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no cmap table")]
    /// An embedded font can't map characters to glyphs
    MissingCmap,

    #[error(transparent)]
    /// A record or configuration file was not valid JSON for its type
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// A record failed validation before reaching a generator
    Validation(#[from] ValidationErrors),

    #[error("a document is already being generated")]
    /// A session was asked to generate while another generation was in flight
    Busy,
}
