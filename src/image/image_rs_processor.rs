//! # Image Processor Implementation (image-rs)
//!
//! Provides an [`ImageProcessor`] implementation using the [`image`] crate.
//!
//! Any format the `image` crate can decode is accepted as a source. Output is
//! JPEG (RGB8, configurable quality) or PNG (RGBA8), base64-encoded into a
//! data URL.
//!
//! # Example
//! ```rust,no_run
//! use photo_preview::image::format::OutputFormat;
//! use photo_preview::image::image_rs_processor::ImageRsProcessor;
//! use photo_preview::image::planner::Dimensions;
//! use photo_preview::image::processor::ImageProcessor;
//!
//! let processor = ImageRsProcessor::default();
//! let size = processor.probe_dimensions("input.png").unwrap();
//! let url = processor
//!     .resize_and_encode("input.png", size, OutputFormat::Png)
//!     .expect("encode ok");
//! assert!(url.starts_with("data:image/png;base64,"));
//! ```
//!
//! # Errors
//! Returns an [`anyhow::Error`] if:
//! - the file cannot be opened or its format cannot be guessed,
//! - the image cannot be decoded,
//! - encoding the resized image fails.

use std::io::Cursor;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    codecs::jpeg::JpegEncoder, imageops::FilterType, ColorType, DynamicImage, GenericImageView,
    ImageFormat, ImageReader,
};

use super::{
    format::OutputFormat, planner::Dimensions, processor::ImageProcessor, source::SourceResolver,
};

/// Default JPEG quality for previews.
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// A concrete implementation of [`ImageProcessor`] using the `image` crate.
#[derive(Clone, Debug)]
pub struct ImageRsProcessor {
    source: SourceResolver,
    jpeg_quality: u8,
}

impl Default for ImageRsProcessor {
    fn default() -> Self {
        Self::new(SourceResolver::unrestricted(), DEFAULT_JPEG_QUALITY)
    }
}

impl ImageRsProcessor {
    /// `jpeg_quality` is clamped to `1..=100`.
    pub fn new(source: SourceResolver, jpeg_quality: u8) -> Self {
        Self {
            source,
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Reads only the header of the image to obtain its size.
    pub fn probe_dimensions(&self, path: &str) -> Result<Dimensions> {
        let full = self.source.resolve(path);
        let (w, h) = image::image_dimensions(&full)
            .with_context(|| format!("read dimensions of {:?}", &full))?;
        Ok(Dimensions::new(w, h))
    }

    /// Decodes, resizes to exactly `size`, and encodes as a data URL.
    pub fn resize_and_encode(
        &self,
        path: &str,
        size: Dimensions,
        format: OutputFormat,
    ) -> Result<String> {
        let full = self.source.resolve(path);
        let img = ImageReader::open(&full)
            .with_context(|| format!("open {:?}", &full))?
            .with_guessed_format()
            .context("guess format")?
            .decode()
            .with_context(|| format!("decode {:?}", &full))?;

        let resized = resize_exact(img, size);
        let bytes = self.encode(&resized, format)?;

        Ok(format!("data:{};base64,{}", format.mime(), STANDARD.encode(bytes)))
    }

    fn encode(&self, img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>> {
        let (w, h) = img.dimensions();
        let mut out = Vec::new();

        match format {
            OutputFormat::Jpeg => {
                let rgb = img.to_rgb8();
                let mut encoder = JpegEncoder::new_with_quality(&mut out, self.jpeg_quality);
                encoder
                    .encode(&rgb, w, h, ColorType::Rgb8.into())
                    .context("encode jpeg")?;
            }
            OutputFormat::Png => {
                let rgba = img.to_rgba8();
                let mut cur = Cursor::new(&mut out);
                image::write_buffer_with_format(
                    &mut cur,
                    &rgba,
                    w,
                    h,
                    ColorType::Rgba8,
                    ImageFormat::Png,
                )
                .context("encode png")?;
            }
        }

        Ok(out)
    }
}

impl ImageProcessor for ImageRsProcessor {
    fn probe_dimensions(&self, path: &str) -> Result<Dimensions> {
        ImageRsProcessor::probe_dimensions(self, path)
    }

    fn resize_and_encode(
        &self,
        path: &str,
        size: Dimensions,
        format: OutputFormat,
    ) -> Result<String> {
        ImageRsProcessor::resize_and_encode(self, path, size, format)
    }
}

/// Resizes to the planned size, leaving the image untouched when it already
/// has that size.
///
/// Uses [`FilterType::Triangle`] for quality-speed balance.
fn resize_exact(img: DynamicImage, size: Dimensions) -> DynamicImage {
    let (w, h) = img.dimensions();
    if w == size.width && h == size.height {
        return img;
    }
    img.resize_exact(size.width, size.height, FilterType::Triangle)
}
