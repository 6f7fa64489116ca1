// src/render/drawing/text.rs
use super::PageCanvas;
use crate::render::layout::{TextFont, Tone};
use printpdf::ops::Op;
use printpdf::{Pt, TextItem, TextMatrix};

/// Writes a single line of text with its baseline starting at `(x, baseline)`.
pub(in crate::render) fn draw_text(
    canvas: &mut PageCanvas,
    content: &str,
    x: f32,
    baseline: f32,
    font: TextFont,
    tone: Tone,
) {
    if content.is_empty() {
        return;
    }

    canvas.open_text_section();
    canvas.set_fill_color(tone);

    if canvas.current_font != Some(font) {
        canvas.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(font.size),
            font: font.face,
        });
        canvas.current_font = Some(font);
    }

    canvas.ops.push(Op::SetTextMatrix {
        matrix: TextMatrix::Translate(Pt(x), Pt(baseline)),
    });
    canvas.ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(content.to_string())],
        font: font.face,
    });
}
