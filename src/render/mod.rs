// src/render/mod.rs
//! Draws the fixed ticket layout into a single-page PDF.

mod drawing;
pub mod encoding;
pub mod layout;

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::ticket::TicketRecord;
use drawing::PageCanvas;
use layout::{
    BACKGROUND, BAND, BODY_TEXT, DETAILS_FONT, EVENT_BASELINE, EVENT_FONT, PageGeometry,
    TEXT_LEFT, TITLE_BASELINE, TITLE_FONT, TITLE_TEXT,
};
use printpdf::image::RawImage;
use printpdf::xobject::XObject;
use printpdf::{PdfDocument, PdfPage, PdfSaveOptions, XObjectId};

/// One labeled line in the ticket's detail list.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

impl DetailLine {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Everything printed on a ticket, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketContent {
    pub document_title: String,
    pub brand_label: String,
    pub event_name: String,
    pub details: Vec<DetailLine>,
}

impl TicketContent {
    /// Whether every printed string is plain ASCII.
    pub fn is_ascii(&self) -> bool {
        self.brand_label.is_ascii()
            && self.event_name.is_ascii()
            && self.details.iter().all(|line| line.value.is_ascii())
    }

    pub fn from_ticket(ticket: &TicketRecord, config: &RendererConfig) -> Self {
        let details = vec![
            DetailLine { label: "TICKET ID", value: ticket.id.clone() },
            DetailLine {
                label: "DATE PURCHASED",
                value: ticket.purchase_date.display_string(),
            },
            DetailLine { label: "EMAIL", value: ticket.email.clone() },
            DetailLine {
                label: "PRICE",
                value: ticket.formatted_price(&config.currency_prefix),
            },
        ];

        Self {
            document_title: format!("Ticket {}", ticket.id),
            brand_label: config.brand_label.clone(),
            event_name: ticket.event_name.clone(),
            details,
        }
    }
}

/// Builds the ticket document in memory.
pub struct TicketDocumentRenderer {
    document: PdfDocument,
    geometry: PageGeometry,
}

impl TicketDocumentRenderer {
    pub fn new(title: &str) -> Self {
        Self {
            document: PdfDocument::new(title),
            geometry: PageGeometry::a4(),
        }
    }

    /// Decodes the PNG and registers it as a shared image resource.
    fn register_image(&mut self, png: &[u8]) -> Result<(XObjectId, (u32, u32)), RenderError> {
        let mut warnings = Vec::new();
        let raw_image = RawImage::decode_from_bytes(png, &mut warnings)
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?;
        let dims = (raw_image.width as u32, raw_image.height as u32);
        if dims.0 == 0 || dims.1 == 0 {
            return Err(RenderError::ImageDecode("code image has zero size".to_string()));
        }

        let xobj_id = XObjectId::new();
        self.document
            .resources
            .xobjects
            .map
            .insert(xobj_id.clone(), XObject::Image(raw_image));
        Ok((xobj_id, dims))
    }

    /// Draws the page and serializes the document.
    pub fn render(mut self, content: &TicketContent, code_png: &[u8]) -> Result<Vec<u8>, RenderError> {
        let (code_id, code_dims) = self.register_image(code_png)?;
        let page = self.geometry;
        let mut canvas = PageCanvas::new();

        drawing::rect::fill_rect(&mut canvas, page.full_page(), BACKGROUND);
        drawing::rect::fill_rect(&mut canvas, page.top_band(), BAND);
        drawing::rect::fill_rect(&mut canvas, page.bottom_band(), BAND);

        drawing::text::draw_text(
            &mut canvas,
            &content.brand_label,
            TEXT_LEFT,
            TITLE_BASELINE,
            TITLE_FONT,
            TITLE_TEXT,
        );
        drawing::text::draw_text(
            &mut canvas,
            &content.event_name,
            TEXT_LEFT,
            EVENT_BASELINE,
            EVENT_FONT,
            BODY_TEXT,
        );

        drawing::image::draw_image(&mut canvas, &code_id, code_dims, page.code_slot());

        for (index, line) in content.details.iter().enumerate() {
            drawing::text::draw_text(
                &mut canvas,
                &line.text(),
                TEXT_LEFT,
                PageGeometry::detail_baseline(index),
                DETAILS_FONT,
                BODY_TEXT,
            );
        }

        self.document
            .pages
            .push(PdfPage::new(page.width_mm, page.height_mm, canvas.into_ops()));

        let mut warnings = Vec::new();
        let bytes = self.document.save(&PdfSaveOptions::default(), &mut warnings);
        if bytes.is_empty() {
            return Err(RenderError::InternalPdfError(
                "PDF serializer produced no output".to_string(),
            ));
        }
        log::debug!(
            "Serialized ticket PDF ({} bytes, {} warnings)",
            bytes.len(),
            warnings.len()
        );

        if content.is_ascii() {
            return Ok(bytes);
        }
        log::debug!("Re-encoding non-ASCII ticket text as WinAnsi");
        encoding::reencode_builtin_text(&bytes)
    }
}

/// Renders `content` with the QR code PNG embedded in its fixed slot.
pub fn render_ticket(content: &TicketContent, code_png: &[u8]) -> Result<Vec<u8>, RenderError> {
    TicketDocumentRenderer::new(&content.document_title).render(content, code_png)
}
