pub mod format;
pub mod image_rs_processor;
pub mod planner;
pub mod processor;
pub mod source;
