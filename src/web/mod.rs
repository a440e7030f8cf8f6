pub mod cors;
pub mod fallback;
pub mod preview;
pub mod router;
