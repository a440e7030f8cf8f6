//! # Output Format Selection
//!
//! Previews are encoded as PNG when the source path ends in `.png`
//! (any case) and as JPEG otherwise.

use std::fmt;

use image::ImageFormat;

/// Encoding used for the preview data URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Selects the output format from the extension of `path`.
    ///
    /// The extension is whatever follows the last `.`; a path without one has
    /// an empty extension and falls back to JPEG.
    ///
    /// # Example
    /// ```rust
    /// use photo_preview::image::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("a/b/c.PNG"), OutputFormat::Png);
    /// assert_eq!(OutputFormat::from_path("a/b/c"), OutputFormat::Jpeg);
    /// ```
    pub fn from_path(path: &str) -> Self {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        if ext.eq_ignore_ascii_case("png") {
            OutputFormat::Png
        } else {
            OutputFormat::Jpeg
        }
    }

    /// Short name used in the data URL subtype (`"jpeg"` / `"png"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
