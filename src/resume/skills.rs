//! Years-of-experience extraction
//!
//! ORDER MATTERS: terms are tried in declared order and the first term with a
//! match decides the skill; within a term the leftmost match wins.

use crate::sections::resume::{normalize_skill_key, IngestionConfig};
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Max characters between the number and the term, on the same sentence/line.
pub const TERM_WINDOW: usize = 80;

/// Skill key to years, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillYears {
    entries: Vec<(String, String)>,
}

impl SkillYears {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or overwrite in place, keeping the original position.
    pub fn insert(&mut self, key: String, years: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = years,
            None => self.entries.push((key, years)),
        }
    }

    pub fn insert_if_absent(&mut self, key: &str, years: &str) {
        if self.get(key).is_none() {
            self.entries.push((key.to_string(), years.to_string()));
        }
    }

    /// Years for the first skill key contained in `label`, case-insensitively.
    pub fn find_for_label(&self, label: &str) -> Option<&str> {
        if label.is_empty() {
            return None;
        }
        let normalized = label.to_lowercase();
        self.iter().find(|(skill, _)| normalized.contains(skill)).map(|(_, years)| years)
    }

    /// Entries sorted by skill key.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort();
        entries
    }
}

impl Serialize for SkillYears {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (skill, years) in &self.entries {
            map.serialize_entry(skill, years)?;
        }
        map.end()
    }
}

/// Case-insensitive "N years ... term" or "term ... N years" matcher.
pub fn term_pattern(term: &str) -> Result<Regex, regex::Error> {
    let term = regex::escape(term);
    let years = r"\+?\s*(?:years?|yrs?)";
    Regex::new(&format!(
        r"(?i)(?:(\d{{1,2}}){years}[^.\n]{{0,{window}}}?{term}|{term}[^.\n]{{0,{window}}}?(\d{{1,2}}){years})",
        years = years,
        term = term,
        window = TERM_WINDOW,
    ))
}

/// Years from the first term that matches anywhere in `text`.
pub fn find_years_for_terms<'t>(
    text: &str,
    terms: impl IntoIterator<Item = &'t str>,
) -> Option<String> {
    for term in terms {
        let pattern = match term_pattern(term) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Skipping skill term {:?}: {}", term, e);
                continue;
            }
        };
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        if let Some(years) = caps.get(1).or_else(|| caps.get(2)) {
            return Some(years.as_str().to_string());
        }
    }
    None
}

/// Build the skill-years map: extraction first, then declared fallbacks.
///
/// Without resume text the map is empty, fallbacks included.
pub fn extract_skill_years(text: &str, config: &IngestionConfig) -> SkillYears {
    let mut results = SkillYears::default();
    if text.is_empty() {
        return results;
    }

    for (raw_key, terms) in &config.skill_keywords {
        let key = normalize_skill_key(raw_key);
        if let Some(years) = find_years_for_terms(text, terms.iter().map(String::as_str)) {
            results.insert(key, years);
        } else if let Some(fallback) = config.fallback_for(&key) {
            let fallback = fallback.to_string();
            results.insert(key, fallback);
        }
    }

    for (key, years) in &config.fallbacks {
        results.insert_if_absent(key, years);
    }

    tracing::debug!("Extracted years for {} skill(s)", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(skills: &[(&str, &[&str])], fallbacks: &[(&str, &str)]) -> IngestionConfig {
        IngestionConfig {
            skill_keywords: skills
                .iter()
                .map(|(k, terms)| (k.to_string(), terms.iter().map(|t| t.to_string()).collect()))
                .collect(),
            fallbacks: fallbacks.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_number_before_term() {
        let cfg = config(&[("Python", &["Python"])], &[]);
        let years = extract_skill_years("5+ years of Python development", &cfg);
        assert_eq!(years.iter().collect::<Vec<_>>(), vec![("python", "5")]);
    }

    #[test]
    fn test_term_before_number() {
        let found = find_years_for_terms("Kubernetes administration for 7 yrs", ["kubernetes"]);
        assert_eq!(found.as_deref(), Some("7"));
    }

    #[test]
    fn test_sentence_boundary_blocks_match() {
        assert_eq!(find_years_for_terms("10 years in sales. Rust hobbyist", ["Rust"]), None);
        assert_eq!(find_years_for_terms("10 years in sales\nRust hobbyist", ["Rust"]), None);
    }

    #[test]
    fn test_window_limit() {
        let far = format!("3 years {} Rust", "x".repeat(TERM_WINDOW + 1));
        assert_eq!(find_years_for_terms(&far, ["Rust"]), None);
        let near = format!("3 years {} Rust", "x".repeat(TERM_WINDOW - 2));
        assert_eq!(find_years_for_terms(&near, ["Rust"]).as_deref(), Some("3"));
    }

    #[test]
    fn test_term_is_escaped() {
        assert_eq!(find_years_for_terms("4 years of C++", ["C++"]).as_deref(), Some("4"));
        assert_eq!(find_years_for_terms("4 years of Cxx", ["C++"]), None);
    }

    #[test]
    fn test_first_declared_term_wins() {
        let text = "2 years of Golang. 6 years of Go";
        assert_eq!(find_years_for_terms(text, ["Go", "Golang"]).as_deref(), Some("2"));
        assert_eq!(find_years_for_terms(text, ["Golang", "Go"]).as_deref(), Some("2"));
        assert_eq!(find_years_for_terms("6 years of Go", ["Erlang", "Go"]).as_deref(), Some("6"));
    }

    #[test]
    fn test_fallback_fills_gap() {
        let cfg = config(&[("go", &["Go"])], &[("go", "3")]);
        let years = extract_skill_years("Mostly Java work.", &cfg);
        assert_eq!(years.get("go"), Some("3"));
    }

    #[test]
    fn test_extraction_beats_fallback() {
        let cfg = config(&[("go", &["Go"])], &[("go", "3")]);
        let years = extract_skill_years("4 years of Go", &cfg);
        assert_eq!(years.get("go"), Some("4"));
    }

    #[test]
    fn test_unlisted_fallbacks_are_appended() {
        let cfg = config(&[("rust", &["Rust"])], &[("sql", "8")]);
        let years = extract_skill_years("1 year of Rust", &cfg);
        assert_eq!(years.iter().collect::<Vec<_>>(), vec![("rust", "1"), ("sql", "8")]);
    }

    #[test]
    fn test_no_text_yields_empty_map() {
        let cfg = config(&[("go", &["Go"])], &[("go", "3")]);
        assert!(extract_skill_years("", &cfg).is_empty());
    }

    #[test]
    fn test_find_for_label() {
        let mut years = SkillYears::default();
        years.insert("python".into(), "5".into());
        years.insert("go".into(), "3".into());
        assert_eq!(
            years.find_for_label("How many years of Python experience do you have?"),
            Some("5")
        );
        assert_eq!(years.find_for_label("Years with Haskell?"), None);
        assert_eq!(years.find_for_label(""), None);
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut years = SkillYears::default();
        years.insert("a".into(), "1".into());
        years.insert("b".into(), "2".into());
        years.insert("a".into(), "9".into());
        assert_eq!(years.iter().collect::<Vec<_>>(), vec![("a", "9"), ("b", "2")]);
        assert_eq!(serde_json::to_string(&years).unwrap(), r#"{"a":"9","b":"2"}"#);
    }
}
