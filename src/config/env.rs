//! Environment snapshot and the minimal `.env` loader.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Explicit full-path override for the profile document.
pub const ENV_PROFILE_FILE: &str = "JOB_APPLIER_PROFILE_FILE";
/// Named profile under the profiles directory.
pub const ENV_PROFILE_NAME: &str = "JOB_APPLIER_PROFILE";

/// A copy of the environment that resolution reads from.
///
/// Keys merged in from an env file are tracked so they can later be exported
/// to the real process environment in a single step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
    injected: Vec<String>,
}

impl EnvSnapshot {
    /// Capture the current process environment. Non-UTF-8 entries are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars, injected: Vec::new() }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { vars, injected: Vec::new() }
    }

    /// Look up a variable, treating an empty value as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Keys that were added from an env file rather than the original environment.
    pub fn injected_keys(&self) -> &[String] {
        &self.injected
    }

    /// Set `key` only if it is not already present. Returns whether it was set.
    pub fn set_default(&mut self, key: &str, value: &str) -> bool {
        if self.vars.contains_key(key) {
            return false;
        }
        self.vars.insert(key.to_string(), value.to_string());
        self.injected.push(key.to_string());
        true
    }

    /// Merge entries from the env file at `path`; existing keys always win.
    ///
    /// A missing or unreadable file is not an error. Returns the number of
    /// keys added.
    pub fn merge_env_file(&mut self, path: &Path) -> usize {
        if !path.is_file() {
            return 0;
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Ignoring unreadable env file {}: {}", path.display(), e);
                return 0;
            }
        };

        let added = parse_env_file(&content)
            .into_iter()
            .filter(|(key, value)| self.set_default(key, value))
            .count();
        tracing::debug!("Loaded {} new variable(s) from {}", added, path.display());
        added
    }

    /// Export injected keys to the process environment without overwriting.
    ///
    /// Call once at startup, before any threads are spawned.
    pub fn inject_into_process(&self) {
        for key in &self.injected {
            if std::env::var_os(key).is_some() {
                continue;
            }
            if let Some(value) = self.vars.get(key) {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Parse `KEY=value` lines. Blank lines, `#` comments, lines without `=`,
/// lines with an empty key and pairs containing NUL are skipped.
pub fn parse_env_file(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, value)| !key.is_empty() && !key.contains('\0') && !value.contains('\0'))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
