//! Image-transform task adapter.

use super::{failure_message, success_message};
use crate::codec::{transform_image, CodecError};
use crate::error::TaskFailure;
use crate::outcome::{TaskClock, TaskResult};
use crate::sink::OutputSink;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Task that inverts and blurs one image.
///
/// Wraps the codec collaborator. Verification rejections map to
/// [`TaskFailure::Decode`]; everything after verification (transform,
/// encode, write) maps to [`TaskFailure::Image`]. On success the result
/// carries the output path.
pub struct ImageTransformTask {
    /// Serialized destination for the status message
    sink: Arc<dyn OutputSink>,
}

impl ImageTransformTask {
    /// Creates a new image-transform task adapter.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// Transforms `path`, reports status, and returns the result.
    pub fn run(&self, path: PathBuf) -> TaskResult<PathBuf, PathBuf> {
        let clock = TaskClock::start();
        let outcome = transform_image(&path).map_err(|e| match e {
            CodecError::Decode(message) => TaskFailure::Decode {
                path: path.clone(),
                message,
            },
            CodecError::Pipeline(message) => TaskFailure::Image {
                path: path.clone(),
                message,
            },
        });
        let timing = clock.finish();

        let activity = format!("Processing image '{}'", path.display());
        let message = match &outcome {
            Ok(output_path) => success_message(
                &activity,
                &timing,
                &[format!("Saved as '{}'", output_path.display())],
            ),
            Err(failure) => {
                warn!(path = %path.display(), %failure, "Image task failed");
                failure_message(&activity, &timing, &failure.to_string())
            }
        };
        self.sink.write(&message);

        TaskResult {
            input: path,
            outcome,
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::processed_path;
    use crate::sink::MemorySink;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_valid_image_reports_output_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("pic.png");
        RgbImage::from_pixel(16, 16, Rgb([40, 80, 120]))
            .save(&path)
            .expect("write source");

        let sink = Arc::new(MemorySink::new());
        let task = ImageTransformTask::new(sink.clone());
        let result = task.run(path.clone());

        let output_path = result.outcome.as_ref().expect("output path");
        assert_eq!(*output_path, dir.path().join("pic_processed.jpg"));
        assert!(output_path.exists());

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Saved as"));
    }

    #[test]
    fn test_corrupt_image_is_decode_failure() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image at all").expect("write noise");

        let sink = Arc::new(MemorySink::new());
        let task = ImageTransformTask::new(sink.clone());
        let result = task.run(path.clone());

        assert!(matches!(result.outcome, Err(TaskFailure::Decode { .. })));
        assert!(!processed_path(&path).exists());

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("[ERROR]"));
    }
}
