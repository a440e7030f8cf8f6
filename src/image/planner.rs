//! # Dimension Planner
//!
//! Computes the output size of a preview from the source size and a
//! [`BoundingBox`]. Images that already fit are never upscaled; larger ones
//! are scaled by a single factor so the aspect ratio is kept.
//!
//! # Example
//! ```rust
//! use photo_preview::image::planner::{plan_dimensions, BoundingBox, Dimensions};
//!
//! let planned = plan_dimensions(Dimensions::new(2000, 1000), BoundingBox::default());
//! assert_eq!(planned, Dimensions::new(1024, 512));
//! ```

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both axes are non-zero.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn fits_within(&self, bounds: BoundingBox) -> bool {
        self.width <= bounds.max_w && self.height <= bounds.max_h
    }
}

/// Maximum permitted output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Maximum width (in pixels).
    pub max_w: u32,
    /// Maximum height (in pixels).
    pub max_h: u32,
}

impl BoundingBox {
    /// Default preview bound on each axis.
    pub const DEFAULT_EDGE: u32 = 1024;

    pub fn new(max_w: u32, max_h: u32) -> Self {
        Self { max_w, max_h }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EDGE, Self::DEFAULT_EDGE)
    }
}

/// Plans the preview size for `source` inside `bounds`.
///
/// The scale factor is `min(max_w / w, max_h / h)`; scaled values are rounded
/// half away from zero and never drop below 1. `source` must be non-zero on
/// both axes.
pub fn plan_dimensions(source: Dimensions, bounds: BoundingBox) -> Dimensions {
    if source.fits_within(bounds) {
        return source;
    }

    let width_ratio = bounds.max_w as f64 / source.width as f64;
    let height_ratio = bounds.max_h as f64 / source.height as f64;
    let ratio = width_ratio.min(height_ratio);

    Dimensions {
        width: scale_axis(source.width, ratio),
        height: scale_axis(source.height, ratio),
    }
}

fn scale_axis(value: u32, ratio: f64) -> u32 {
    ((value as f64 * ratio).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(w: u32, h: u32) -> (u32, u32) {
        let d = plan_dimensions(Dimensions::new(w, h), BoundingBox::default());
        (d.width, d.height)
    }

    #[test]
    fn in_bounds_images_are_unchanged() {
        for (w, h) in [(1, 1), (800, 600), (1024, 1024), (1024, 1), (10, 1024)] {
            assert_eq!(plan(w, h), (w, h), "{w}x{h} should not change");
        }
    }

    #[test]
    fn landscape_is_bound_by_width() {
        assert_eq!(plan(2000, 1000), (1024, 512));
    }

    #[test]
    fn portrait_is_bound_by_height() {
        assert_eq!(plan(3000, 4000), (768, 1024));
    }

    #[test]
    fn only_one_axis_over_the_limit() {
        assert_eq!(plan(1025, 100), (1024, 100));
        assert_eq!(plan(500, 2048), (250, 1024));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 3 * (1024 / 2048) = 1.5 -> 2
        assert_eq!(plan(2048, 3), (1024, 2));
        // 5 * (1024 / 2048) = 2.5 -> 3
        assert_eq!(plan(2048, 5), (1024, 3));
    }

    #[test]
    fn extreme_aspect_never_collapses_to_zero() {
        assert_eq!(plan(100_000, 1), (1024, 1));
        assert_eq!(plan(1, 100_000), (1, 1024));
    }

    #[test]
    fn oversized_results_stay_in_bounds_and_keep_aspect() {
        let sizes = [
            (1025, 1025),
            (4032, 3024),
            (3024, 4032),
            (1920, 1080),
            (7000, 1300),
            (1111, 3333),
            (6000, 6001),
        ];
        for (w, h) in sizes {
            let (nw, nh) = plan(w, h);
            assert!(nw <= 1024 && nh <= 1024, "{w}x{h} -> {nw}x{nh}");
            assert!(nw == 1024 || nh == 1024, "binding axis should hit the bound");

            let ratio = (1024.0 / w as f64).min(1024.0 / h as f64);
            let exact_w = w as f64 * ratio;
            let exact_h = h as f64 * ratio;
            assert!((nw as f64 - exact_w).abs() <= 1.0, "{w}x{h} -> {nw}x{nh}");
            assert!((nh as f64 - exact_h).abs() <= 1.0, "{w}x{h} -> {nw}x{nh}");
        }
    }

    #[test]
    fn planning_is_idempotent() {
        for (w, h) in [(2000, 1000), (4032, 3024), (800, 600), (1, 5000)] {
            let once = plan_dimensions(Dimensions::new(w, h), BoundingBox::default());
            let twice = plan_dimensions(once, BoundingBox::default());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn custom_bounds_are_respected() {
        let d = plan_dimensions(Dimensions::new(2000, 1000), BoundingBox::new(2048, 2048));
        assert_eq!(d, Dimensions::new(2000, 1000));

        let d = plan_dimensions(Dimensions::new(2000, 1000), BoundingBox::new(500, 100));
        assert_eq!(d, Dimensions::new(200, 100));
    }

    #[test]
    fn dimensions_validity() {
        assert!(Dimensions::new(1, 1).is_valid());
        assert!(!Dimensions::new(0, 10).is_valid());
        assert!(!Dimensions::new(10, 0).is_valid());
    }
}
