//! QR code generation for the ticket's scannable payload.

use crate::error::EncodingError;
use crate::payload::ScannablePayload;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Pixel size of one QR module.
pub const MODULE_SIZE_PX: u32 = 10;
/// Quiet-zone width in modules, as emitted by the encoder.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// A rendered QR code, held as PNG bytes ready for staging or embedding.
#[derive(Debug, Clone)]
pub struct CodeImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
    modules: usize,
}

impl CodeImage {
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Pixel dimensions, including the quiet zone.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of modules per side, excluding the quiet zone.
    pub fn module_count(&self) -> usize {
        self.modules
    }
}

/// Encodes a payload with high error correction (~30% damage tolerance).
pub fn encode_payload(payload: &ScannablePayload) -> Result<CodeImage, EncodingError> {
    let text = payload.to_json()?;
    log::debug!("Encoding scannable payload ({} bytes)", text.len());

    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
    let image = render_modules(&code);
    let (width, height) = image.dimensions();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    log::debug!(
        "QR code {:?}: {} modules, {}x{} px",
        code.version(),
        code.width(),
        width,
        height
    );

    Ok(CodeImage {
        png,
        width,
        height,
        modules: code.width(),
    })
}

fn render_modules(code: &QrCode) -> GrayImage {
    code.render::<Luma<u8>>()
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE_PX, MODULE_SIZE_PX)
        .build()
}
