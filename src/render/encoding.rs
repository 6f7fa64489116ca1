// src/render/encoding.rs
//! Builtin-font text encoding.
//!
//! The standard 14 fonts are declared with `WinAnsiEncoding`, so every byte
//! of a text-showing operand is read as a Windows-1252 code. printpdf writes
//! those operands as UTF-8, which prints `é` as `Ã©`. After serialization the
//! page content is reparsed and each shown string is rewritten as
//! Windows-1252.

use crate::error::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object};

const TEXT_SHOWING_OPERATORS: [&str; 4] = ["Tj", "TJ", "'", "\""];

/// Windows-1252 assigns printable characters to 0x80..=0x9F where Latin-1
/// has C1 controls. Unassigned slots (0x81, 0x8D, 0x8F, 0x90, 0x9D) are `None`.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

/// Maps one character to its Windows-1252 byte, or `?` when the code page
/// has no slot for it.
fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x00..=0x7F | 0xA0..=0xFF => c as u8,
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|slot| *slot == Some(c))
            .map_or(b'?', |offset| 0x80 + offset as u8),
    }
}

pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

/// Rewrites a string operand in place. Returns whether anything changed.
fn reencode_operand(operand: &mut Object) -> bool {
    match operand {
        Object::String(bytes, _) if !bytes.is_ascii() => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            *bytes = to_win_ansi(&text);
            true
        }
        Object::Array(items) => items
            .iter_mut()
            .fold(false, |changed, item| reencode_operand(item) || changed),
        _ => false,
    }
}

fn reencode_operation(op: &mut Operation) -> bool {
    if !TEXT_SHOWING_OPERATORS.contains(&op.operator.as_str()) {
        return false;
    }
    op.operands
        .iter_mut()
        .fold(false, |changed, operand| reencode_operand(operand) || changed)
}

/// Re-encodes every shown string of a serialized PDF as Windows-1252.
///
/// Documents whose text is pure ASCII come back byte-for-byte unchanged.
pub fn reencode_builtin_text(pdf: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::load_mem(pdf)?;
    let page_ids: Vec<_> = doc.get_pages().into_values().collect();

    let mut any_changed = false;
    for page_id in page_ids {
        let raw = doc.get_page_content(page_id)?;
        let mut content = Content::<Vec<Operation>>::decode(&raw)?;
        let changed = content
            .operations
            .iter_mut()
            .fold(false, |changed, op| reencode_operation(op) || changed);
        if changed {
            doc.change_page_content(page_id, content.encode()?)?;
            any_changed = true;
        }
    }

    if !any_changed {
        return Ok(pdf.to_vec());
    }
    let mut out = Vec::with_capacity(pdf.len());
    doc.save_to(&mut out).map_err(lopdf::Error::from)?;
    Ok(out)
}
