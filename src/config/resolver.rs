//! Profile path resolution

use crate::config::env::{EnvSnapshot, ENV_PROFILE_FILE, ENV_PROFILE_NAME};
use crate::utils::paths::expand_home;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE_NAME: &str = "active";
pub const PROFILE_EXTENSION: &str = "json";

/// Fixed locations relative to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    root: PathBuf,
}

impl AppLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join("config").join("profiles")
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }
}

/// Determine the active profile path from an environment snapshot.
///
/// Order: `JOB_APPLIER_PROFILE_FILE`, then `JOB_APPLIER_PROFILE` under the
/// profiles directory, then the `active` profile.
pub fn resolve_profile_path(layout: &AppLayout, env: &EnvSnapshot) -> PathBuf {
    if let Some(explicit) = env.get(ENV_PROFILE_FILE) {
        return expand_home(explicit, env.get("HOME"));
    }

    let name = env.get(ENV_PROFILE_NAME).unwrap_or(DEFAULT_PROFILE_NAME);
    layout.profiles_dir().join(format!("{}.{}", name, PROFILE_EXTENSION))
}

/// Merge the layout's env file into `env`, then resolve.
pub fn resolve_with_env_file(layout: &AppLayout, env: &mut EnvSnapshot) -> PathBuf {
    env.merge_env_file(&layout.env_file());
    let path = resolve_profile_path(layout, env);
    tracing::debug!("Resolved profile path: {}", path.display());
    path
}
