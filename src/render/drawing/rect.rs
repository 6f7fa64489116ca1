// src/render/drawing/rect.rs
use super::PageCanvas;
use crate::render::layout::{Rect, Tone};
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::ops::Op;
use printpdf::Pt;

/// Fills a rectangle with a solid color, without an outline.
pub(in crate::render) fn fill_rect(canvas: &mut PageCanvas, rect: Rect, tone: Tone) {
    canvas.close_text_section_if_open();
    canvas.set_fill_color(tone);

    let Rect { x, y, width, height } = rect;
    let polygon = Polygon {
        rings: vec![PolygonRing {
            points: vec![
                LinePoint { p: Point { x: Pt(x), y: Pt(y) }, bezier: false },
                LinePoint { p: Point { x: Pt(x + width), y: Pt(y) }, bezier: false },
                LinePoint { p: Point { x: Pt(x + width), y: Pt(y + height) }, bezier: false },
                LinePoint { p: Point { x: Pt(x), y: Pt(y + height) }, bezier: false },
            ],
        }],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };
    canvas.ops.push(Op::DrawPolygon { polygon });
}
