//! Input processing module
//! Handles format detection, text extraction, folder scanning and upload staging

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod staging;

pub use file_detector::SupportedFormat;
pub use manager::{Document, InputManager};
pub use staging::StagingArea;
