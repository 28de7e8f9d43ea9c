//! File discovery collaborator.
//!
//! Lists the working directory (non-recursive) and buckets entries into
//! the two batches the runner cares about: `.txt` files (case-sensitive
//! extension match) and `.jpg`/`.jpeg`/`.png` images (case-insensitive).
//! Listings are sorted by path so batch order is deterministic across
//! platforms.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Image extensions, matched case-insensitively.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// The two input listings produced by one discovery pass.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// `.txt` files in the working directory, sorted by path
    pub text_files: Vec<PathBuf>,
    /// `.jpg`/`.jpeg`/`.png` files in the working directory, sorted by path
    pub image_files: Vec<PathBuf>,
}

impl DiscoveredFiles {
    /// True when there is nothing to process.
    pub fn is_empty(&self) -> bool {
        self.text_files.is_empty() && self.image_files.is_empty()
    }
}

/// Scans `dir` and returns the text and image listings.
///
/// Only direct children are considered; subdirectories are not entered.
/// Entries the process cannot stat are skipped rather than failing the
/// whole scan.
pub fn discover(dir: &Path) -> Result<DiscoveredFiles, std::io::Error> {
    let mut found = DiscoveredFiles::default();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if is_text_file(&path) {
            found.text_files.push(path);
        } else if is_image_file(&path) {
            found.image_files.push(path);
        }
    }

    found.text_files.sort();
    found.image_files.sort();

    debug!(
        dir = %dir.display(),
        text_files = found.text_files.len(),
        image_files = found.image_files.len(),
        "Discovery complete"
    );
    Ok(found)
}

/// Case-sensitive `.txt` extension match.
fn is_text_file(path: &Path) -> bool {
    path.extension().map(|ext| ext == "txt").unwrap_or(false)
}

/// Case-insensitive image extension match.
fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lowered = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|known| *known == lowered)
        })
        .unwrap_or(false)
}
