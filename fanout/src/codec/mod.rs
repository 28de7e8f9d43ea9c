//! Image codec collaborator: decode, verify, invert, blur, encode.
//!
//! The pipeline for one image is:
//!
//! ```text
//! verify (full decode pass) → fresh decode → flatten alpha → invert → blur → encode JPEG
//! ```
//!
//! Verification is a decode pass of its own, distinct from the transform
//! decode: a header-only probe can succeed on a truncated file, so the
//! whole image is decoded once and discarded before any work is done.
//! Because verification consumes its reader, the transform starts from a
//! fresh decode handle.
//!
//! Output is always JPEG, written to a sibling path with the original
//! extension replaced by `_processed.jpg`. On any failure no output file
//! is left behind.

use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed Gaussian blur radius applied after inversion.
pub const BLUR_SIGMA: f32 = 2.0;

/// Suffix appended to the source file stem for output files.
pub const PROCESSED_SUFFIX: &str = "_processed.jpg";

/// Errors from the image pipeline.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The image could not be decoded or failed its integrity check.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The pipeline failed after verification (transform, encode, write).
    #[error("pipeline failed: {0}")]
    Pipeline(String),
}

/// Decodes the whole image and discards the pixels.
///
/// This is the integrity check: it fails on truncated or corrupt files
/// that a shallow header probe would accept.
pub fn verify_image(path: &Path) -> Result<(), CodecError> {
    decode_image(path).map(|_| ())
}

/// Opens a fresh decode handle and decodes the image.
fn decode_image(path: &Path) -> Result<DynamicImage, CodecError> {
    let reader = ImageReader::open(path)
        .map_err(|e| CodecError::Decode(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    reader.decode().map_err(|e| CodecError::Decode(e.to_string()))
}

/// Flattens any alpha-carrying image to an opaque 3-channel color space.
///
/// Transform artifacts on transparent regions are avoided by dropping the
/// alpha channel before inversion. Images without alpha pass through
/// untouched.
pub fn flatten_to_opaque(image: DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image
    }
}

/// Inverts every channel: `output = 255 - input`.
///
/// Applying this twice returns the original image pixel-exact.
pub fn invert(mut image: DynamicImage) -> DynamicImage {
    image.invert();
    image
}

/// Applies the fixed-radius Gaussian blur.
pub fn blur(image: &DynamicImage) -> DynamicImage {
    image.blur(BLUR_SIGMA)
}

/// Builds the output path: original extension replaced by `_processed.jpg`.
pub fn processed_path(path: &Path) -> PathBuf {
    let mut name = path.file_stem().unwrap_or_default().to_os_string();
    name.push(PROCESSED_SUFFIX);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Runs the full pipeline for one image and returns the output path.
///
/// Fails with [`CodecError::Decode`] when verification rejects the file
/// (no work is done) and with [`CodecError::Pipeline`] when the transform
/// or JPEG encode fails. A partially written output file is removed on
/// encode failure.
pub fn transform_image(path: &Path) -> Result<PathBuf, CodecError> {
    verify_image(path)?;

    // Verification consumed its reader; start the transform from a fresh
    // decode handle.
    let image = decode_image(path)?;
    let flattened = flatten_to_opaque(image);
    let blurred = blur(&invert(flattened));

    let output_path = processed_path(path);
    // JPEG has no alpha and no high-bit-depth support; normalize to RGB8
    // so every surviving color mode encodes.
    if let Err(e) = blurred.to_rgb8().save(&output_path) {
        if std::fs::remove_file(&output_path).is_ok() {
            warn!(path = %output_path.display(), "Removed partial output after encode failure");
        }
        return Err(CodecError::Pipeline(e.to_string()));
    }

    debug!(
        source = %path.display(),
        output = %output_path.display(),
        "Image transformed"
    );
    Ok(output_path)
}
