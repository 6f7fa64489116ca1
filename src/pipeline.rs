//! Ticket generation pipeline.
//!
//! A run is strictly sequential: validate the record, encode the scannable
//! payload, stage the code image, render and persist the document, remove the
//! staged image, report the document path.
//!
//! # Example
//!
//! ```ignore
//! use ticketpdf::TicketPipelineBuilder;
//!
//! let pipeline = TicketPipelineBuilder::new()
//!     .with_scope_dir("out")
//!     .build()?;
//!
//! let path = pipeline.generate_from_json(r#"{"id": "T1", ...}"#)?;
//! ```

use crate::code::encode_payload;
use crate::config::{CodeHandoff, RendererConfig};
use crate::error::TicketError;
use crate::payload::ScannablePayload;
use crate::render::{TicketContent, render_ticket};
use crate::scope::{ScopeDir, remove_if_exists};
use crate::ticket::{TicketRecord, validate_id};
use std::fs;
use std::path::{Path, PathBuf};

/// A builder for creating a `TicketPipeline`.
#[derive(Debug, Default)]
pub struct TicketPipelineBuilder {
    config: RendererConfig,
}

impl TicketPipelineBuilder {
    pub fn new() -> Self { Default::default() }

    /// Starts from an existing configuration.
    pub fn with_config(mut self, config: RendererConfig) -> Self { self.config = config; self }

    /// Directory receiving both the transient code image and the final document.
    pub fn with_scope_dir<P: AsRef<Path>>(mut self, path: P) -> Self { self.config.scope_dir = path.as_ref().to_path_buf(); self }

    pub fn with_brand_label(mut self, label: impl Into<String>) -> Self { self.config.brand_label = label.into(); self }

    pub fn with_currency_prefix(mut self, prefix: impl Into<String>) -> Self { self.config.currency_prefix = prefix.into(); self }

    /// Selects whether the code image goes through a temporary file or stays in memory.
    pub fn with_code_handoff(mut self, handoff: CodeHandoff) -> Self { self.config.code_handoff = handoff; self }

    /// Creates the scoped directory if needed and resolves it to an absolute path.
    pub fn build(self) -> Result<TicketPipeline, TicketError> {
        let scope = ScopeDir::open(&self.config.scope_dir)
            .inspect_err(|e| log::error!("Cannot prepare scope directory: {}", e))?;
        log::debug!(
            "Ticket pipeline ready (scope: {}, handoff: {:?})",
            scope.root().display(),
            self.config.code_handoff
        );
        Ok(TicketPipeline { scope, config: self.config })
    }
}

/// Turns ticket records into printable PDF documents.
#[derive(Debug)]
pub struct TicketPipeline {
    scope: ScopeDir,
    config: RendererConfig,
}

impl TicketPipeline {
    pub fn scope(&self) -> &ScopeDir {
        &self.scope
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Parses a serialized ticket and generates its document.
    pub fn generate_from_json(&self, input: &str) -> Result<PathBuf, TicketError> {
        let ticket = TicketRecord::from_json(input)
            .inspect_err(|e| log::error!("Rejected ticket input: {}", e))?;
        self.generate(&ticket)
    }

    /// Generates the document for `ticket` and returns its absolute path.
    ///
    /// An existing document for the same id is overwritten.
    pub fn generate(&self, ticket: &TicketRecord) -> Result<PathBuf, TicketError> {
        log::info!("Generating ticket for ID: {}", ticket.id);
        validate_id(&ticket.id).inspect_err(|e| log::error!("Rejected ticket id: {}", e))?;

        self.run(ticket)
            .inspect_err(|e| log::error!("Ticket generation failed for {} ({}): {}", ticket.id, e.kind(), e))
    }

    fn run(&self, ticket: &TicketRecord) -> Result<PathBuf, TicketError> {
        let payload = ScannablePayload::from_ticket(ticket);
        let code = encode_payload(&payload).inspect_err(|e| log::error!("QR generation error: {}", e))?;
        let content = TicketContent::from_ticket(ticket, &self.config);
        let document_path = self.scope.document_path(&ticket.id);

        match self.config.code_handoff {
            CodeHandoff::TempFile => {
                // The staged file is removed on drop if anything below fails.
                let staged = self.scope.stage_code_image(&ticket.id, code.png_bytes())?;
                let png = staged.read()?;
                self.write_document(&content, &png, &document_path)?;
                if let Err(e) = staged.cleanup() {
                    log::warn!("Could not remove temporary QR code file: {}", e);
                }
            }
            CodeHandoff::InMemory => {
                self.write_document(&content, code.png_bytes(), &document_path)?;
            }
        }

        Ok(document_path)
    }

    fn write_document(&self, content: &TicketContent, code_png: &[u8], path: &Path) -> Result<(), TicketError> {
        let bytes = render_ticket(content, code_png).inspect_err(|e| log::error!("PDF generation error: {}", e))?;

        if let Err(e) = fs::write(path, &bytes) {
            log::error!("Failed to write {}: {}", path.display(), e);
            if let Err(cleanup) = remove_if_exists(path) {
                log::debug!("Could not remove partial document {}: {}", path.display(), cleanup);
            }
            return Err(e.into());
        }

        log::info!("PDF saved to: {}", path.display());
        Ok(())
    }
}
