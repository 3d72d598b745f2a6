//! Shared helpers

pub mod encoding;
pub mod paths;

pub use encoding::read_text_lossy;
