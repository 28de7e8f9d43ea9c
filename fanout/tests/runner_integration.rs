//! End-to-end tests for the batch runner.
//!
//! These tests exercise the full flow over a real directory: discovery,
//! all three batches on their pools, per-task status messages, and the
//! end-of-batch summaries.

use fanout::runner::{BatchRunner, RunnerConfig};
use fanout::sink::MemorySink;
use image::{Rgb, RgbImage};
use std::sync::Arc;
use tempfile::TempDir;

fn test_runner(sink: Arc<MemorySink>) -> BatchRunner {
    let config = RunnerConfig {
        worker_cap: 4,
        numeric_range: 1..10,
    };
    BatchRunner::new(config, sink)
}

fn write_png(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_fn(32, 32, |x, y| Rgb([x as u8, y as u8, 128]))
        .save(&path)
        .expect("write image");
    path
}

#[tokio::test]
async fn test_full_run_over_mixed_directory() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("a.txt"), "hi hi bye").expect("write a.txt");
    std::fs::write(dir.path().join("empty.txt"), "").expect("write empty.txt");
    // Invalid UTF-8 makes the text task fail with an I/O failure.
    std::fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).expect("write bad.txt");
    write_png(&dir, "valid.png");
    let whole = write_png(&dir, "whole.png");
    let bytes = std::fs::read(&whole).expect("read image bytes");
    std::fs::write(dir.path().join("cut.png"), &bytes[..bytes.len() / 2])
        .expect("write truncated");
    std::fs::remove_file(&whole).expect("remove donor image");

    let sink = Arc::new(MemorySink::new());
    let report = test_runner(sink.clone())
        .run(dir.path())
        .await
        .expect("run");

    // Numeric batch: 1..10 squared, all successful.
    assert_eq!(report.numbers_processed, 9);
    assert_eq!(report.numbers_failed, 0);

    // Text batch: a.txt and empty.txt succeed, bad.txt fails.
    assert_eq!(report.text_processed, 2);
    assert_eq!(report.text_failed, 1);

    // Image batch: valid.png succeeds, cut.png fails verification.
    assert_eq!(report.images_processed, 1);
    assert_eq!(report.images_failed, 1);

    // Outputs: only the valid image produced a sibling JPEG.
    assert!(dir.path().join("valid_processed.jpg").exists());
    assert!(!dir.path().join("cut_processed.jpg").exists());

    let rendered = sink.rendered();

    // Numeric summary is the ordered collection.
    assert!(rendered.contains("[1, 4, 9, 16, 25, 36, 49, 64, 81]"));

    // Text summary: counts in first-seen order, empty and failed files
    // called out by name in the same summary.
    let hi_at = rendered.find("hi: 2").expect("hi count");
    let bye_at = rendered.find("bye: 1").expect("bye count");
    assert!(hi_at < bye_at);
    assert!(rendered.contains("empty.txt\nFile is empty"));
    assert!(rendered.contains("bad.txt\nNot processed due to errors"));
}

#[tokio::test]
async fn test_batches_run_in_fixed_order() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("words.txt"), "one two").expect("write text");
    write_png(&dir, "shot.png");

    let sink = Arc::new(MemorySink::new());
    test_runner(sink.clone())
        .run(dir.path())
        .await
        .expect("run");

    let messages = sink.messages();
    let banner_at = |banner: &str| {
        messages
            .iter()
            .position(|m| m == banner)
            .unwrap_or_else(|| panic!("missing banner {banner}"))
    };

    let numbers_at = banner_at("=== Processing numbers ===");
    let text_at = banner_at("=== Processing text files ===");
    let images_at = banner_at("=== Processing images ===");
    assert!(numbers_at < text_at);
    assert!(text_at < images_at);

    // No cross-batch interleaving: every square message sits before the
    // text banner, every text message before the image banner.
    for (i, message) in messages.iter().enumerate() {
        if message.contains("Squaring ") {
            assert!(i < text_at);
        }
        if message.contains("Processing file ") {
            assert!(i > text_at && i < images_at);
        }
        if message.contains("Processing image ") {
            assert!(i > images_at);
        }
    }
}

#[tokio::test]
async fn test_text_only_directory_skips_image_batch() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("solo.txt"), "word").expect("write text");

    let sink = Arc::new(MemorySink::new());
    let report = test_runner(sink.clone())
        .run(dir.path())
        .await
        .expect("run");

    assert_eq!(report.text_processed, 1);
    assert_eq!(report.images_processed, 0);
    assert!(!sink.rendered().contains("=== Processing images ==="));
    // The numeric batch still runs when any files were discovered.
    assert!(sink.rendered().contains("=== Processing numbers ==="));
}

#[tokio::test]
async fn test_empty_directory_is_a_successful_no_op() {
    let dir = TempDir::new().expect("tempdir");
    let sink = Arc::new(MemorySink::new());

    let report = test_runner(sink.clone())
        .run(dir.path())
        .await
        .expect("run");

    assert_eq!(report.failed_total(), 0);
    assert_eq!(sink.messages(), vec!["Nothing to process."]);
}
