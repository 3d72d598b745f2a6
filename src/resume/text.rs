//! Resume text loading

use crate::sections::resume::IngestionConfig;
use crate::utils::encoding::read_text_lossy;
use crate::utils::paths::resolve_against_root;
use std::path::Path;

/// Load the resume plaintext named by `text_path`.
///
/// Missing path, missing file and unreadable file all yield an empty string.
pub fn load_resume_text(root: &Path, home: Option<&str>, config: &IngestionConfig) -> String {
    if config.text_path.is_empty() {
        return String::new();
    }
    let path = resolve_against_root(root, &config.text_path, home);
    if !path.is_file() {
        tracing::debug!("Resume text not found at {}", path.display());
        return String::new();
    }

    match read_text_lossy(&path) {
        Ok((text, lossy)) => {
            if lossy {
                tracing::warn!("Dropped invalid UTF-8 bytes while reading {}", path.display());
            }
            text
        }
        Err(e) => {
            tracing::warn!("Failed to read resume text {}: {}", path.display(), e);
            String::new()
        }
    }
}
