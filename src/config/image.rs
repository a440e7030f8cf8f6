//! # Preview Configuration
//!
//! Bounding box, JPEG quality and optional source root for previews.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `PREVIEW_MAX_WIDTH` | Maximum preview width | `1024` |
//! | `PREVIEW_MAX_HEIGHT` | Maximum preview height | `1024` |
//! | `PREVIEW_JPEG_QUALITY` | JPEG quality, clamped to 1–100 | `85` |
//! | `PREVIEW_ROOT` | Directory source paths are confined to | *none* |
//!
//! # Example
//! ```rust
//! use photo_preview::config::image::PreviewConfig;
//!
//! let cfg = PreviewConfig::default();
//! assert_eq!(cfg.max_width, 1024);
//! assert_eq!(cfg.max_height, 1024);
//! ```

use std::path::PathBuf;

use crate::config::env::{read_clamped_u8_from, read_nonzero_u32_from, read_path_from};
use crate::image::{
    image_rs_processor::DEFAULT_JPEG_QUALITY, planner::BoundingBox, source::SourceResolver,
};

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub jpeg_quality: u8,
    pub root: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_width: BoundingBox::DEFAULT_EDGE,
            max_height: BoundingBox::DEFAULT_EDGE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            root: None,
        }
    }
}

impl PreviewConfig {
    pub fn from_env() -> Self {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        Self {
            max_width: read_nonzero_u32_from(&provider, "PREVIEW_MAX_WIDTH", d.max_width),
            max_height: read_nonzero_u32_from(&provider, "PREVIEW_MAX_HEIGHT", d.max_height),
            jpeg_quality: read_clamped_u8_from(
                &provider,
                "PREVIEW_JPEG_QUALITY",
                d.jpeg_quality,
                1,
                100,
            ),
            root: read_path_from(&provider, "PREVIEW_ROOT"),
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.max_width, self.max_height)
    }

    pub fn source(&self) -> SourceResolver {
        SourceResolver::from_option(self.root.clone())
    }
}
