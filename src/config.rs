use std::path::PathBuf;

pub const DEFAULT_BRAND_LABEL: &str = "BIG BULL EVENTS";
pub const DEFAULT_CURRENCY_PREFIX: &str = "LKR";

/// How the QR image travels from the encoder to the document renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeHandoff {
    /// Write `temp_qr_<id>.png` into the scoped directory, embed it from disk,
    /// then delete it. (Default)
    #[default]
    TempFile,
    /// Embed the encoded PNG bytes directly; nothing but the final document
    /// is written.
    InMemory,
}

/// Settings for a `TicketPipeline`.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Directory holding the transient code image and the final document.
    pub scope_dir: PathBuf,
    /// Title drawn in the top band.
    pub brand_label: String,
    /// Prefix printed before the price.
    pub currency_prefix: String,
    pub code_handoff: CodeHandoff,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            scope_dir: PathBuf::from("."),
            brand_label: DEFAULT_BRAND_LABEL.to_string(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
            code_handoff: CodeHandoff::default(),
        }
    }
}
