//! Fixed geometry and palette of the printed ticket.
//!
//! All positions are in PDF points with the origin at the bottom-left corner
//! of the page. Text positions are baselines.

use printpdf::{BuiltinFont, Mm};

pub const INCH: f32 = 72.0;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const BAND_HEIGHT: f32 = 2.0 * INCH;

pub const TEXT_LEFT: f32 = 1.0 * INCH;
pub const TITLE_BASELINE: f32 = 10.5 * INCH;
pub const EVENT_BASELINE: f32 = 9.0 * INCH;
pub const DETAILS_BASELINE: f32 = 8.0 * INCH;
pub const DETAILS_LINE_STEP: f32 = 0.5 * INCH;

/// Distance from the right page edge to the code's left edge.
pub const CODE_RIGHT_INSET: f32 = 3.0 * INCH;
pub const CODE_BOTTOM: f32 = 7.0 * INCH;
pub const CODE_SIZE: f32 = 2.0 * INCH;

pub const TITLE_FONT: TextFont = TextFont { face: BuiltinFont::HelveticaBold, size: 32.0 };
pub const EVENT_FONT: TextFont = TextFont { face: BuiltinFont::HelveticaBold, size: 24.0 };
pub const DETAILS_FONT: TextFont = TextFont { face: BuiltinFont::Helvetica, size: 12.0 };

pub const BACKGROUND: Tone = Tone::new(0.95, 0.95, 0.95);
pub const BAND: Tone = Tone::new(0.2, 0.3, 0.8);
pub const TITLE_TEXT: Tone = Tone::new(1.0, 1.0, 1.0);
pub const BODY_TEXT: Tone = Tone::new(0.2, 0.2, 0.2);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFont {
    pub face: BuiltinFont,
    pub size: f32,
}

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Tone {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Page size and the regions derived from it.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width_mm: Mm,
    pub height_mm: Mm,
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        let width_mm = Mm(PAGE_WIDTH_MM);
        let height_mm = Mm(PAGE_HEIGHT_MM);
        Self {
            width_mm,
            height_mm,
            width_pt: width_mm.into_pt().0,
            height_pt: height_mm.into_pt().0,
        }
    }

    pub fn full_page(&self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width_pt, height: self.height_pt }
    }

    pub fn top_band(&self) -> Rect {
        Rect {
            x: 0.0,
            y: self.height_pt - BAND_HEIGHT,
            width: self.width_pt,
            height: BAND_HEIGHT,
        }
    }

    pub fn bottom_band(&self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width_pt, height: BAND_HEIGHT }
    }

    /// Upper-right slot for the QR code.
    pub fn code_slot(&self) -> Rect {
        Rect {
            x: self.width_pt - CODE_RIGHT_INSET,
            y: CODE_BOTTOM,
            width: CODE_SIZE,
            height: CODE_SIZE,
        }
    }

    /// Baseline of the `index`-th detail line.
    pub fn detail_baseline(index: usize) -> f32 {
        DETAILS_BASELINE - DETAILS_LINE_STEP * index as f32
    }
}
