//! Resume generation and ingestion settings (`resume`, `resume_ingestion`)

use crate::config::accessors::item_text;
use crate::config::{Section, TermList};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SECTION: &str = "resume";
pub const INGESTION_SECTION: &str = "resume_ingestion";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeSettings {
    pub template_path: String,
    pub output_path: String,
    pub filename_pattern: String,
    pub ingestion: IngestionConfig,
}

impl ResumeSettings {
    pub fn from_sections(resume: &Section<'_>, ingestion: &Section<'_>) -> Self {
        Self {
            template_path: resume.get_str("template_path", ""),
            output_path: resume.get_str("output_path", ""),
            filename_pattern: resume.get_str("filename_pattern", "{full_name}_resume.pdf"),
            ingestion: IngestionConfig::from_section(ingestion),
        }
    }
}

/// Resume ingestion inputs, decoded once from the `resume_ingestion` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestionConfig {
    pub text_path: String,
    /// Raw skill key to search terms, in declared order.
    pub skill_keywords: Vec<(String, Vec<String>)>,
    /// Normalised skill key to years, in declared order. Composite values
    /// are kept in their JSON form.
    pub fallbacks: Vec<(String, String)>,
    pub highlights: Vec<String>,
    pub question_keyword_answers: BTreeMap<String, String>,
    pub textarea_keyword_answers: BTreeMap<String, String>,
}

impl IngestionConfig {
    pub fn from_section(section: &Section<'_>) -> Self {
        let skill_keywords = section
            .get_object("skill_keywords")
            .map(|map| {
                map.iter()
                    .filter_map(|(key, terms)| match TermList::from_value(Some(terms)) {
                        TermList::Absent => None,
                        terms => Some((key.clone(), terms.into_vec())),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let mut fallbacks: Vec<(String, String)> = Vec::new();
        if let Some(map) = section.get_object("fallbacks") {
            for (key, value) in map {
                let Some(years) = item_text(value) else {
                    continue;
                };
                let key = normalize_skill_key(key);
                match fallbacks.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(slot) => slot.1 = years,
                    None => fallbacks.push((key, years)),
                }
            }
        }

        Self {
            text_path: section.get_str("text_path", ""),
            skill_keywords,
            fallbacks,
            highlights: TermList::from_value(section.get("highlights")).into_vec(),
            question_keyword_answers: section.get_string_map("question_keyword_answers"),
            textarea_keyword_answers: section.get_string_map("textarea_keyword_answers"),
        }
    }

    pub fn fallback_for(&self, key: &str) -> Option<&str> {
        self.fallbacks.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Skill keys compare lowercased and trimmed.
pub fn normalize_skill_key(key: &str) -> String {
    key.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingestion_fields() {
        let ingestion = json!({
            "text_path": " cv.txt ",
            "skill_keywords": {"Python": ["Python", "py"], "go": "Golang", "bad": 3},
            "fallbacks": {"Go ": 3, "rust": null, "GO": "4"},
            "highlights": ["Led a team", ""],
            "question_keyword_answers": {"visa": "No"}
        });
        let config = IngestionConfig::from_section(&Section::new(ingestion.as_object().expect("object")));
        assert_eq!(config.text_path, "cv.txt");
        assert_eq!(
            config.skill_keywords,
            vec![
                ("Python".to_string(), vec!["Python".to_string(), "py".to_string()]),
                ("go".to_string(), vec!["Golang".to_string()]),
            ]
        );
        assert_eq!(config.fallbacks, vec![("go".to_string(), "4".to_string())]);
        assert_eq!(config.fallback_for("go"), Some("4"));
        assert_eq!(config.highlights, vec!["Led a team", ""]);
        assert_eq!(config.question_keyword_answers.get("visa").map(String::as_str), Some("No"));
    }

    #[test]
    fn test_composite_fallback_is_rendered() {
        let ingestion = json!({"fallbacks": {"sql": [5, 6], "k8s": {"min": 2}, "ops": true}});
        let config = IngestionConfig::from_section(&Section::new(ingestion.as_object().expect("object")));
        assert_eq!(config.fallback_for("sql"), Some("[5,6]"));
        assert_eq!(config.fallback_for("k8s"), Some(r#"{"min":2}"#));
        assert_eq!(config.fallback_for("ops"), Some("True"));
    }

    #[test]
    fn test_single_string_highlight() {
        let ingestion = json!({"highlights": "Shipped v2"});
        let config = IngestionConfig::from_section(&Section::new(ingestion.as_object().expect("object")));
        assert_eq!(config.highlights, vec!["Shipped v2"]);
    }

    #[test]
    fn test_resume_defaults() {
        let settings = ResumeSettings::from_sections(&Section::empty(), &Section::empty());
        assert_eq!(settings.filename_pattern, "{full_name}_resume.pdf");
        assert!(settings.ingestion.skill_keywords.is_empty());
    }
}
