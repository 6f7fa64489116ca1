mod common;

use common::fixtures::{ticket_json, ticket_with, ticket_without};
use common::pdf_assertions::{font_names, get_page_dimensions, gray_images, image_dimensions};
use common::{GeneratedPdf, TestResult, dir_entries, init_logger, scan_codes};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use ticketpdf::{
    CodeHandoff, ScannablePayload, TicketError, TicketPipeline, TicketPipelineBuilder,
    encode_payload,
};

fn pipeline_in(dir: &TempDir) -> TicketPipeline {
    TicketPipelineBuilder::new()
        .with_scope_dir(dir.path())
        .build()
        .expect("pipeline should build")
}

#[test]
fn returns_absolute_deterministic_path() -> TestResult {
    init_logger();
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);

    let path = pipeline.generate_from_json(&ticket_json("65f1c2a9").to_string())?;

    let expected = dir.path().canonicalize()?.join("ticket_65f1c2a9.pdf");
    assert_eq!(path, expected);
    assert!(path.is_absolute());
    assert!(path.is_file());
    Ok(())
}

#[test]
fn leaves_only_the_document_behind() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);

    pipeline.generate_from_json(&ticket_json("T-1").to_string())?;

    assert!(!pipeline.scope().code_image_path("T-1").exists());
    assert_eq!(dir_entries(dir.path()), vec!["ticket_T-1.pdf".to_string()]);
    Ok(())
}

#[test]
fn renders_single_a4_page_with_all_details() -> TestResult {
    let dir = TempDir::new()?;
    let path = pipeline_in(&dir).generate_from_json(&ticket_json("T-2").to_string())?;
    let pdf = GeneratedPdf::load(&path)?;

    assert_eq!(pdf.page_count(), 1);
    let (width, height) = get_page_dimensions(&pdf.doc, 1).expect("page should have a MediaBox");
    assert!((width - 595.28).abs() < 0.5, "width was {width}");
    assert!((height - 841.89).abs() < 0.5, "height was {height}");

    let text = pdf.text();
    for expected in [
        "BIG BULL EVENTS",
        "Colombo Music Festival",
        "TICKET ID: T-2",
        "DATE PURCHASED: March 15, 2024 at 02:30 PM",
        "EMAIL: buyer@example.com",
        "PRICE: LKR 3500.00",
    ] {
        assert!(text.contains(expected), "missing {expected:?} in:\n{text}");
    }

    let fonts = font_names(&pdf.doc);
    assert!(fonts.iter().any(|f| f == "Helvetica"), "fonts: {fonts:?}");
    assert!(fonts.iter().any(|f| f == "Helvetica-Bold"), "fonts: {fonts:?}");
    Ok(())
}

#[test]
fn embeds_one_code_built_from_id_and_email_only() -> TestResult {
    let dir = TempDir::new()?;
    let path = pipeline_in(&dir).generate_from_json(&ticket_json("T-3").to_string())?;
    let pdf = GeneratedPdf::load(&path)?;

    let images = gray_images(&pdf.doc);
    assert_eq!(images.len(), 1, "expected exactly one embedded image");

    let scanned = scan_codes(&images[0]);
    assert_eq!(scanned.len(), 1, "expected exactly one readable code, got {scanned:?}");
    let decoded: serde_json::Value = serde_json::from_str(&scanned[0])?;
    assert_eq!(
        decoded,
        json!({"ticket_id": "T-3", "email": "buyer@example.com"})
    );
    assert_eq!(decoded.as_object().map(|o| o.len()), Some(2));

    let payload = ScannablePayload::from_json(&scanned[0])?;
    assert_eq!(payload.ticket_id, "T-3");

    let code = encode_payload(&payload)?;
    let (w, h) = code.dimensions();
    assert_eq!(image_dimensions(&pdf.doc), vec![(w as i64, h as i64)]);

    let text = pdf.text();
    assert!(!text.contains("ticket_id"), "payload must not be printed as text");
    Ok(())
}

#[test]
fn prints_accented_text_in_the_fonts_encoding() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = TicketPipelineBuilder::new()
        .with_scope_dir(dir.path())
        .with_brand_label("FÊTE €")
        .build()?;

    let path = pipeline.generate_from_json(
        &ticket_with("T-9", "eventName", json!("Café Łódź")).to_string(),
    )?;

    let text = GeneratedPdf::load(&path)?.text();
    assert!(text.contains("FÊTE €"), "text was:\n{text}");
    assert!(text.contains("Café ?ód?"), "text was:\n{text}");
    assert!(!text.contains("Ã"), "UTF-8 bytes leaked into the page:\n{text}");
    Ok(())
}

#[test]
fn missing_email_fails_before_any_file_is_written() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);

    let err = pipeline
        .generate_from_json(&ticket_without("T-4", "email").to_string())
        .unwrap_err();

    assert!(matches!(err, TicketError::MissingField("email")), "got {err:?}");
    assert!(err.to_string().contains("email"));
    assert!(dir_entries(dir.path()).is_empty());
    Ok(())
}

#[test]
fn malformed_date_leaves_nothing_behind() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);

    let err = pipeline
        .generate_from_json(&ticket_with("T-5", "purchaseDate", json!("not-a-date")).to_string())
        .unwrap_err();

    assert!(matches!(err, TicketError::InvalidDate { .. }), "got {err:?}");
    assert!(dir_entries(dir.path()).is_empty());
    Ok(())
}

#[test]
fn rerun_with_same_id_overwrites_document() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);

    let first = pipeline.generate_from_json(
        &ticket_with("T-6", "eventName", json!("Opening Night")).to_string(),
    )?;
    let second = pipeline.generate_from_json(
        &ticket_with("T-6", "eventName", json!("Closing Gala")).to_string(),
    )?;

    assert_eq!(first, second);
    assert_eq!(dir_entries(dir.path()), vec!["ticket_T-6.pdf".to_string()]);

    let text = GeneratedPdf::load(&second)?.text();
    assert!(text.contains("Closing Gala"));
    assert!(!text.contains("Opening Night"));
    Ok(())
}

#[test]
fn in_memory_handoff_produces_same_layout() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = TicketPipelineBuilder::new()
        .with_scope_dir(dir.path())
        .with_code_handoff(CodeHandoff::InMemory)
        .with_currency_prefix("USD")
        .build()?;

    let path = pipeline.generate_from_json(&ticket_json("T-7").to_string())?;

    assert_eq!(dir_entries(dir.path()), vec!["ticket_T-7.pdf".to_string()]);
    let pdf = GeneratedPdf::load(&path)?;
    assert!(pdf.text().contains("PRICE: USD 3500.00"));
    assert_eq!(image_dimensions(&pdf.doc).len(), 1);
    Ok(())
}

#[test]
fn write_failure_cleans_up_staged_code_image() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);
    // A directory squatting on the document path makes the final write fail.
    fs::create_dir(dir.path().join("ticket_T-8.pdf"))?;

    let err = pipeline
        .generate_from_json(&ticket_json("T-8").to_string())
        .unwrap_err();

    assert_eq!(err.kind(), "io");
    assert!(!pipeline.scope().code_image_path("T-8").exists());
    assert_eq!(dir_entries(dir.path()), vec!["ticket_T-8.pdf".to_string()]);
    Ok(())
}

#[test]
fn distinct_ids_do_not_collide() -> TestResult {
    let dir = TempDir::new()?;
    let pipeline = pipeline_in(&dir);

    let a = pipeline.generate_from_json(&ticket_json("A").to_string())?;
    let b = pipeline.generate_from_json(&ticket_json("B").to_string())?;

    assert_ne!(a, b);
    assert_eq!(
        dir_entries(dir.path()),
        vec!["ticket_A.pdf".to_string(), "ticket_B.pdf".to_string()]
    );
    Ok(())
}
