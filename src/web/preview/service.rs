use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::preview::PreviewError;
use crate::image::{
    format::OutputFormat,
    planner::{plan_dimensions, BoundingBox},
    processor::ImageProcessor,
};

/// Parameters of a preview request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImageRequest {
    pub filepath: Option<String>,
}

impl ImageRequest {
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: Some(filepath.into()),
        }
    }
}

/// Produces downscaled data URL previews through an [`ImageProcessor`].
#[derive(Clone)]
pub struct PreviewService {
    image: Arc<dyn ImageProcessor>,
    bounds: BoundingBox,
}

impl PreviewService {
    pub fn new(image: Arc<dyn ImageProcessor>, bounds: BoundingBox) -> Self {
        Self { image, bounds }
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Runs validate, probe, plan and transform for one request.
    ///
    /// Calls the processor at most once per stage and stops at the first
    /// failure.
    pub fn compress(&self, req: &ImageRequest) -> Result<String, PreviewError> {
        let path = req
            .filepath
            .as_deref()
            .ok_or(PreviewError::MissingParameter)?;

        let source = match self.image.probe_dimensions(path) {
            Ok(d) if d.is_valid() => d,
            Ok(d) => {
                warn!("zero dimensions for {path}: {}x{}", d.width, d.height);
                return Err(PreviewError::UnreadableImage);
            }
            Err(e) => {
                warn!("dimension probe failed for {path}: {e:#}");
                return Err(PreviewError::UnreadableImage);
            }
        };

        let planned = plan_dimensions(source, self.bounds);
        let format = OutputFormat::from_path(path);
        debug!(
            "planned {path}: {}x{} -> {}x{} ({format})",
            source.width, source.height, planned.width, planned.height
        );

        match self.image.resize_and_encode(path, planned, format) {
            Ok(url) if !url.is_empty() => {
                info!(
                    "preview ready: path={path} size={}x{} format={format} bytes={}",
                    planned.width,
                    planned.height,
                    url.len()
                );
                Ok(url)
            }
            Ok(_) => {
                warn!("empty preview for {path}");
                Err(PreviewError::ResizeFailed)
            }
            Err(e) => {
                warn!("preview encoding failed for {path}: {e:#}");
                Err(PreviewError::Encoding(format!("{e:#}")))
            }
        }
    }
}
