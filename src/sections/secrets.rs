//! Login and AI provider settings (`secrets` section)

use crate::config::Section;
use serde::{Serialize, Serializer};
use std::fmt;

pub const SECTION: &str = "secrets";

const MASK: &str = "********";

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Secrets {
    pub username: String,
    #[serde(serialize_with = "mask")]
    pub password: String,
    #[serde(rename = "use_AI")]
    pub use_ai: bool,
    pub ai_provider: String,
    pub llm_api_url: String,
    #[serde(serialize_with = "mask")]
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_spec: String,
    pub stream_output: bool,
}

impl Secrets {
    pub fn from_section(section: &Section<'_>) -> Self {
        Self {
            username: section.get_str("username", ""),
            password: section.get_str("password", ""),
            use_ai: section.get_bool("use_AI", false),
            ai_provider: section.get_str("ai_provider", "openai"),
            llm_api_url: section.get_str("llm_api_url", ""),
            llm_api_key: section.get_str("llm_api_key", ""),
            llm_model: section.get_str("llm_model", ""),
            llm_spec: section.get_str("llm_spec", "openai"),
            stream_output: section.get_bool("stream_output", false),
        }
    }
}

fn masked(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        MASK
    }
}

fn mask<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(masked(value))
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("username", &self.username)
            .field("password", &masked(&self.password))
            .field("use_ai", &self.use_ai)
            .field("ai_provider", &self.ai_provider)
            .field("llm_api_url", &self.llm_api_url)
            .field("llm_api_key", &masked(&self.llm_api_key))
            .field("llm_model", &self.llm_model)
            .field("llm_spec", &self.llm_spec)
            .field("stream_output", &self.stream_output)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secrets_are_masked() {
        let raw = json!({"username": "ada", "password": "hunter2", "use_AI": "yes", "llm_api_key": "sk-1"});
        let secrets = Secrets::from_section(&Section::new(raw.as_object().expect("object")));
        assert!(secrets.use_ai);
        assert_eq!(secrets.password, "hunter2");

        let debug = format!("{:?}", secrets);
        assert!(!debug.contains("hunter2"));
        let rendered = serde_json::to_string(&secrets).expect("json");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("sk-1"));
        assert!(rendered.contains("\"use_AI\":true"));
    }
}
