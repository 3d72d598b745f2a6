//! Typed section accessors
//!
//! Every getter is total: absent keys, nulls and values of the wrong shape
//! return the supplied fallback instead of an error.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

const TRUE_WORDS: [&str; 4] = ["true", "1", "yes", "y"];
const FALSE_WORDS: [&str; 4] = ["false", "0", "no", "n"];

/// A borrowed view of one profile section. Absent sections are empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Section<'a> {
    values: Option<&'a Map<String, Value>>,
}

impl<'a> Section<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Self { values: Some(values) }
    }

    pub fn empty() -> Self {
        Self { values: None }
    }

    pub fn is_empty(&self) -> bool {
        self.values.map_or(true, Map::is_empty)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.values?.get(key)
    }

    /// Strings are trimmed; other scalars are stringified then trimmed.
    pub fn get_str(&self, key: &str, fallback: &str) -> String {
        match self.get(key) {
            None | Some(Value::Null) => fallback.to_string(),
            Some(value) => match scalar_text(value) {
                Some(text) => text.trim().to_string(),
                None => fallback.to_string(),
            },
        }
    }

    /// Like [`Section::get_str`], but only string values are accepted.
    pub fn get_text(&self, key: &str, fallback: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn get_bool(&self, key: &str, fallback: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => parse_bool_word(s).unwrap_or(fallback),
            _ => fallback,
        }
    }

    pub fn get_int(&self, key: &str, fallback: i64) -> i64 {
        self.get(key).and_then(coerce_int).unwrap_or(fallback)
    }

    /// A cleaned list; an empty result reverts to `fallback`.
    ///
    /// Strings are split on commas. Elements are stringified and trimmed and
    /// empty ones are dropped.
    pub fn get_list(&self, key: &str, fallback: &[&str]) -> Vec<String> {
        let cleaned = match self.get(key) {
            Some(Value::Array(items)) => clean_items(items.iter().filter_map(item_text)),
            Some(Value::String(s)) => clean_items(s.split(',').map(str::to_string)),
            _ => Vec::new(),
        };
        if cleaned.is_empty() {
            return fallback.iter().map(|s| s.to_string()).collect();
        }
        cleaned
    }

    /// A nested object, or `None` when absent or of another shape.
    pub fn get_object(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.get(key)?.as_object()
    }

    /// A nested object flattened to strings. Nulls and composites are skipped.
    pub fn get_string_map(&self, key: &str) -> BTreeMap<String, String> {
        self.get_object(key)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| Some((k.clone(), scalar_text(v)?)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A raw value that may be a single string, a list, or missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TermList {
    #[default]
    Absent,
    One(String),
    Many(Vec<String>),
}

impl TermList {
    /// Decode once at the boundary. Numbers, booleans and objects read as absent.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self::One(s.clone()),
            Some(Value::Array(items)) => Self::Many(items.iter().filter_map(item_text).collect()),
            _ => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Self::Absent => &[],
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(items) => items,
        };
        items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::One(s) => vec![s],
            Self::Many(items) => items,
        }
    }
}

/// Case-insensitive boolean words; `None` for anything else.
pub fn parse_bool_word(raw: &str) -> Option<bool> {
    let lowered = raw.trim().to_ascii_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Text form of a scalar. Booleans read `True`/`False`. Null, arrays and
/// objects have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text form of a list element. Nested composites are rendered as JSON.
pub fn item_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        scalar => scalar_text(scalar),
    }
}

fn clean_items(items: impl Iterator<Item = String>) -> Vec<String> {
    items.map(|item| item.trim().to_string()).filter(|item| !item.is_empty()).collect()
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            (f.is_finite() && f.abs() < i64::MAX as f64).then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
