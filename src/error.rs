// src/error.rs
use thiserror::Error;

/// Errors raised while turning a ticket payload into a scannable code image.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("failed to serialize scannable payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("failed to encode QR code image: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised while drawing the ticket document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to decode code image for embedding: {0}")]
    ImageDecode(String),

    #[error("internal PDF error: {0}")]
    InternalPdfError(String),

    #[error("PDF library error: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// The error type for the whole ticket generation pipeline.
///
/// Every stage logs its own failure and hands the error back unchanged, so
/// an embedding caller (a CLI, a request handler) decides how to react.
#[derive(Error, Debug)]
pub enum TicketError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("invalid purchase date '{value}': not an ISO-8601 timestamp")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("ticket input is not valid JSON: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("scannable code encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TicketError {
    /// A short, stable tag for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            TicketError::MissingField(_) => "missing_field",
            TicketError::InvalidField { .. } => "invalid_field",
            TicketError::InvalidDate { .. } => "invalid_date",
            TicketError::MalformedInput(_) => "malformed_input",
            TicketError::Encoding(_) => "encoding",
            TicketError::Render(_) => "render",
            TicketError::Io(_) => "io",
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TicketError::InvalidField { field, reason: reason.into() }
    }
}
