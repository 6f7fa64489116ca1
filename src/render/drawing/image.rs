use super::PageCanvas;
use crate::render::layout::Rect;
use printpdf::ops::Op;
use printpdf::xobject::XObjectTransform;
use printpdf::{Pt, XObjectId};

/// Places an already-registered image XObject so it exactly fills `slot`.
pub(in crate::render) fn draw_image(
    canvas: &mut PageCanvas,
    xobj_id: &XObjectId,
    (img_w, img_h): (u32, u32),
    slot: Rect,
) {
    canvas.close_text_section_if_open();

    // At 72 dpi one image pixel maps to one point before scaling.
    let transform = XObjectTransform {
        translate_x: Some(Pt(slot.x)),
        translate_y: Some(Pt(slot.y)),
        scale_x: Some(slot.width / img_w as f32),
        scale_y: Some(slot.height / img_h as f32),
        rotate: None,
        dpi: Some(72.0),
    };
    canvas.ops.push(Op::UseXobject {
        id: xobj_id.clone(),
        transform,
    });
}
