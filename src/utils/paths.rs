//! Path helpers

use std::path::{Path, PathBuf};

/// Expand a leading `~` against `home`. Other paths are returned as-is.
pub fn expand_home(raw: &str, home: Option<&str>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return PathBuf::from(home);
    }
    match raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        Some(rest) => Path::new(home).join(rest),
        None => PathBuf::from(raw),
    }
}

/// Prefer `raw` relative to `root` when that exists, else treat it literally.
pub fn resolve_against_root(root: &Path, raw: &str, home: Option<&str>) -> PathBuf {
    let candidate = root.join(raw);
    if candidate.exists() {
        return candidate;
    }
    expand_home(raw, home)
}
