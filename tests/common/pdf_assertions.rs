use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Base font names referenced anywhere in the document
pub fn font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = Vec::new();
    for (_, object) in doc.objects.iter() {
        if let Ok(dict) = object.as_dict()
            && let Ok(type_val) = dict.get(b"Type")
            && let Ok(type_name) = type_val.as_name()
            && type_name == b"Font"
            && let Ok(base_font) = dict.get(b"BaseFont")
            && let Ok(font_name) = base_font.as_name()
        {
            fonts.push(String::from_utf8_lossy(font_name).to_string());
        }
    }
    fonts
}

/// Pixel dimensions of every image XObject in the document
pub fn image_dimensions(doc: &LopdfDocument) -> Vec<(i64, i64)> {
    let mut images = Vec::new();
    for (_, object) in doc.objects.iter() {
        if let Ok(stream) = object.as_stream()
            && let Ok(subtype) = stream.dict.get(b"Subtype")
            && let Ok(name) = subtype.as_name()
            && name == b"Image"
            && let Ok(width) = stream.dict.get(b"Width").and_then(|w| w.as_i64())
            && let Ok(height) = stream.dict.get(b"Height").and_then(|h| h.as_i64())
        {
            images.push((width, height));
        }
    }
    images
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// An image XObject's decoded samples as 8-bit luma, row-major
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Every 8-bit gray or RGB image XObject, decompressed to luma
pub fn gray_images(doc: &LopdfDocument) -> Vec<GrayImage> {
    let mut images = Vec::new();
    for (_, object) in doc.objects.iter() {
        if let Ok(stream) = object.as_stream()
            && let Ok(subtype) = stream.dict.get(b"Subtype")
            && let Ok(name) = subtype.as_name()
            && name == b"Image"
            && let Ok(width) = stream.dict.get(b"Width").and_then(|w| w.as_i64())
            && let Ok(height) = stream.dict.get(b"Height").and_then(|h| h.as_i64())
        {
            let (width, height) = (width as usize, height as usize);
            // Unfiltered streams have nothing to decompress.
            let samples = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            let pixels = match samples.len() / (width * height).max(1) {
                1 => samples,
                3 => samples.chunks_exact(3).map(|rgb| rgb[0]).collect(),
                _ => continue,
            };
            images.push(GrayImage { width, height, pixels });
        }
    }
    images
}
