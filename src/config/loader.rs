//! Profile document loading

use crate::config::accessors::Section;
use crate::config::env::EnvSnapshot;
use crate::config::resolver::{resolve_with_env_file, AppLayout};
use crate::error::{ProfileError, Result};
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Parsed profile: an object of named sections.
pub type Document = Map<String, Value>;

/// The active profile, loaded lazily and at most once.
///
/// Concurrent first calls to [`Profile::load_profile`] are serialised by the
/// cell, so the file is read a single time.
#[derive(Debug)]
pub struct Profile {
    path: PathBuf,
    root: PathBuf,
    home: Option<String>,
    document: OnceCell<Document>,
}

impl Profile {
    pub fn new(layout: &AppLayout, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: layout.root().to_path_buf(),
            home: None,
            document: OnceCell::new(),
        }
    }

    /// Merge the env file into `env`, resolve the active path, and wrap it.
    pub fn resolve(layout: &AppLayout, env: &mut EnvSnapshot) -> Self {
        let path = resolve_with_env_file(layout, env);
        let mut profile = Self::new(layout, path);
        profile.home = env.get("HOME").map(str::to_string);
        profile
    }

    /// Wrap an already-parsed document. Nothing is read from disk.
    pub fn from_document(layout: &AppLayout, document: Document) -> Self {
        Self {
            path: layout.root().join("<memory>"),
            root: layout.root().to_path_buf(),
            home: None,
            document: OnceCell::with_value(document),
        }
    }

    pub fn with_home(mut self, home: Option<String>) -> Self {
        self.home = home;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// The cached document; the first call reads the file.
    pub fn load_profile(&self) -> Result<&Document> {
        self.document.get_or_try_init(|| read_document(&self.path))
    }

    /// A named section, or an empty one when absent.
    pub fn load_section(&self, name: &str) -> Result<Section<'_>> {
        match self.load_profile()?.get(name) {
            None => Ok(Section::empty()),
            Some(Value::Object(map)) => Ok(Section::new(map)),
            Some(_) => Err(ProfileError::shape(name)),
        }
    }

    /// Required keys of `section` that are absent, null, blank or empty.
    pub fn list_missing_fields(&self, section: &str, required: &[&str]) -> Result<Vec<String>> {
        let data = self.load_section(section)?;
        Ok(required
            .iter()
            .filter(|field| match data.get(field) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(Value::Array(items)) => items.is_empty(),
                Some(Value::Object(map)) => map.is_empty(),
                Some(_) => false,
            })
            .map(|field| field.to_string())
            .collect())
    }
}

/// Read and parse a profile file. A missing file yields an empty document.
///
/// The format follows the extension: `.toml`, `.yaml`/`.yml`, otherwise JSON.
pub fn read_document(path: &Path) -> Result<Document> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No profile at {}, using defaults", path.display());
            return Ok(Document::new());
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(ProfileError::parse(path, "profile is not valid UTF-8"));
        }
        Err(source) => return Err(ProfileError::Io { path: path.to_path_buf(), source }),
    };

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let raw = match ext.as_str() {
        "toml" => parse_toml_profile(&content),
        "yaml" | "yml" => parse_yaml_profile(&content),
        _ => serde_json::from_str::<Value>(&content).map_err(|e| e.to_string()),
    }
    .map_err(|message| ProfileError::parse(path, message))?;

    match raw {
        Value::Object(map) => {
            tracing::debug!("Loaded profile {} ({} sections)", path.display(), map.len());
            Ok(map)
        }
        _ => Err(ProfileError::parse(path, "profile root must be an object")),
    }
}

fn parse_toml_profile(content: &str) -> std::result::Result<Value, String> {
    let raw: toml::Value = toml::from_str(content).map_err(|e| e.to_string())?;
    serde_json::to_value(raw).map_err(|e| e.to_string())
}

fn parse_yaml_profile(content: &str) -> std::result::Result<Value, String> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    serde_json::to_value(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout(tmp: &TempDir) -> AppLayout {
        AppLayout::new(tmp.path())
    }

    #[test]
    fn test_missing_profile_is_empty() {
        let tmp = TempDir::new().expect("tmp");
        let profile = Profile::new(&layout(&tmp), tmp.path().join("nope.json"));
        assert!(profile.load_profile().expect("load").is_empty());
        let section = profile.load_section("search").expect("section");
        assert!(section.is_empty());
        assert_eq!(section.get_int("switch_number", 2), 2);
    }

    #[test]
    fn test_malformed_profile_names_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").expect("write");

        let err = Profile::new(&layout(&tmp), &path).load_profile().unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_non_object_root_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("list.json");
        fs::write(&path, "[1, 2]").expect("write");

        let err = Profile::new(&layout(&tmp), &path).load_profile().unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn test_profile_is_cached() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("p.json");
        fs::write(&path, r#"{"search": {"search_location": "Berlin"}}"#).expect("write");

        let profile = Profile::new(&layout(&tmp), &path);
        let first = profile.load_profile().expect("first");

        fs::write(&path, r#"{"search": {"search_location": "Paris"}}"#).expect("rewrite");
        let second = profile.load_profile().expect("second");

        assert!(std::ptr::eq(first, second));
        let section = profile.load_section("search").expect("section");
        assert_eq!(section.get_str("search_location", ""), "Berlin");
    }

    #[test]
    fn test_non_object_section_is_shape_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("p.json");
        fs::write(&path, r#"{"search": ["a", "b"]}"#).expect("write");

        let profile = Profile::new(&layout(&tmp), &path);
        let err = profile.load_section("search").unwrap_err();
        assert!(matches!(err, ProfileError::Shape { ref section } if section == "search"));
        assert!(profile.load_section("settings").expect("absent").is_empty());
    }

    #[test]
    fn test_in_memory_document_skips_disk() {
        let tmp = TempDir::new().expect("tmp");
        let doc = serde_json::json!({"settings": {"click_gap": 7}});
        let profile = Profile::from_document(&layout(&tmp), doc.as_object().cloned().expect("object"));
        assert!(!profile.path().exists());
        assert_eq!(profile.load_section("settings").expect("section").get_int("click_gap", 0), 7);
    }

    #[test]
    fn test_toml_and_yaml_profiles() {
        let tmp = TempDir::new().expect("tmp");
        let toml_path = tmp.path().join("p.toml");
        fs::write(&toml_path, "[settings]\nclick_gap = 3\n").expect("write");
        let yaml_path = tmp.path().join("p.yaml");
        fs::write(&yaml_path, "settings:\n  click_gap: 4\n").expect("write");

        let from_toml = Profile::new(&layout(&tmp), toml_path);
        let from_yaml = Profile::new(&layout(&tmp), yaml_path);
        assert_eq!(from_toml.load_section("settings").expect("toml").get_int("click_gap", 0), 3);
        assert_eq!(from_yaml.load_section("settings").expect("yaml").get_int("click_gap", 0), 4);
    }

    #[test]
    fn test_list_missing_fields() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("p.json");
        fs::write(
            &path,
            r#"{"personals": {"first_name": "Ada", "last_name": "  ", "phone_number": null, "tags": []}}"#,
        )
        .expect("write");

        let profile = Profile::new(&layout(&tmp), &path);
        let missing = profile
            .list_missing_fields("personals", &["first_name", "last_name", "phone_number", "tags", "city"])
            .expect("missing");
        assert_eq!(missing, vec!["last_name", "phone_number", "tags", "city"]);
    }
}
