//! Shared CLI utilities.

use anyhow::{Context, Result};
use job_applier_profile::{AppLayout, EnvSnapshot, Profile};
use std::path::PathBuf;

/// Resolve the active profile and export `.env` entries to the process once.
pub fn open_profile(root: Option<PathBuf>) -> Result<Profile> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let layout = AppLayout::new(root);

    let mut env = EnvSnapshot::from_process();
    let profile = Profile::resolve(&layout, &mut env);
    env.inject_into_process();
    Ok(profile)
}
