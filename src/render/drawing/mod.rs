use super::layout::{TextFont, Tone};
use printpdf::color::Color;
use printpdf::ops::Op;
use printpdf::Rgb;

pub(super) mod image;
pub(super) mod rect;
pub(super) mod text;

/// Accumulates the operations of a single page and tracks the graphics state
/// needed to avoid redundant font and color changes.
pub(super) struct PageCanvas {
    pub(super) ops: Vec<Op>,
    is_text_section_open: bool,
    current_fill_color: Option<Color>,
    current_font: Option<TextFont>,
}

impl PageCanvas {
    pub(super) fn new() -> Self {
        Self {
            ops: Vec::new(),
            is_text_section_open: false,
            current_fill_color: None,
            current_font: None,
        }
    }

    pub(super) fn into_ops(mut self) -> Vec<Op> {
        self.close_text_section_if_open();
        self.ops
    }

    /// Shapes and images cannot be drawn inside a text section.
    fn close_text_section_if_open(&mut self) {
        if self.is_text_section_open {
            self.ops.push(Op::EndTextSection);
            self.is_text_section_open = false;
        }
    }

    fn open_text_section(&mut self) {
        if !self.is_text_section_open {
            self.ops.push(Op::StartTextSection);
            self.is_text_section_open = true;
        }
    }

    fn set_fill_color(&mut self, tone: Tone) {
        let color = to_pdf_color(tone);
        if self.current_fill_color.as_ref() != Some(&color) {
            self.ops.push(Op::SetFillColor { col: color.clone() });
            self.current_fill_color = Some(color);
        }
    }
}

fn to_pdf_color(tone: Tone) -> Color {
    Color::Rgb(Rgb::new(tone.r, tone.g, tone.b, None))
}
