//! # Image Processing Abstractions
//!
//! Defines the interface the preview service needs from an image backend:
//! reading the size of a source image and producing a resized, re-encoded
//! data URL from it.
//!
//! Backends are swappable (e.g. `image-rs`, native bindings, or a test
//! double), so the service stays independent of any pixel library.
//!
//! # Example
//! ```rust
//! use photo_preview::image::format::OutputFormat;
//! use photo_preview::image::planner::Dimensions;
//! use photo_preview::image::processor::ImageProcessor;
//! use anyhow::Result;
//!
//! struct FixedProcessor;
//!
//! impl ImageProcessor for FixedProcessor {
//!     fn probe_dimensions(&self, _path: &str) -> Result<Dimensions> {
//!         Ok(Dimensions::new(640, 480))
//!     }
//!
//!     fn resize_and_encode(
//!         &self,
//!         _path: &str,
//!         _size: Dimensions,
//!         format: OutputFormat,
//!     ) -> Result<String> {
//!         Ok(format!("data:{};base64,AAAA", format.mime()))
//!     }
//! }
//!
//! let p = FixedProcessor;
//! assert_eq!(p.probe_dimensions("x.jpg").unwrap(), Dimensions::new(640, 480));
//! ```

use anyhow::Result;

use super::format::OutputFormat;
use super::planner::Dimensions;

/// Trait defining the image backend used by the preview service.
pub trait ImageProcessor: Send + Sync {
    /// Reads the pixel size of the image at `path`.
    ///
    /// Returns an error when the file cannot be read or is not an image.
    fn probe_dimensions(&self, path: &str) -> Result<Dimensions>;

    /// Resizes the image at `path` to exactly `size` and encodes it as
    /// `format`.
    ///
    /// # Returns
    /// A `data:<mime>;base64,<bytes>` string. An empty string means the
    /// backend produced nothing usable.
    fn resize_and_encode(
        &self,
        path: &str,
        size: Dimensions,
        format: OutputFormat,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingProcessor {
        calls: Mutex<Vec<(String, u32, u32, OutputFormat)>>,
    }

    impl ImageProcessor for RecordingProcessor {
        fn probe_dimensions(&self, path: &str) -> Result<Dimensions> {
            if path.is_empty() {
                bail!("empty path");
            }
            Ok(Dimensions::new(10, 20))
        }

        fn resize_and_encode(
            &self,
            path: &str,
            size: Dimensions,
            format: OutputFormat,
        ) -> Result<String> {
            self.calls.lock().unwrap().push((
                path.to_string(),
                size.width,
                size.height,
                format,
            ));
            Ok(format!("data:{};base64,", format.mime()))
        }
    }

    #[test]
    fn processor_is_usable_as_trait_object() {
        let rec = Arc::new(RecordingProcessor::default());
        let proc_obj: Arc<dyn ImageProcessor> = rec.clone();

        assert_eq!(
            proc_obj.probe_dimensions("a.png").unwrap(),
            Dimensions::new(10, 20)
        );
        assert!(proc_obj.probe_dimensions("").is_err());

        let out = proc_obj
            .resize_and_encode("a.png", Dimensions::new(5, 10), OutputFormat::Png)
            .expect("encode ok");
        assert_eq!(out, "data:image/png;base64,");

        let calls = rec.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("a.png".to_string(), 5, 10, OutputFormat::Png));
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_image_processor_is_send_sync() {
        assert_send_sync::<dyn ImageProcessor>();
    }
}
