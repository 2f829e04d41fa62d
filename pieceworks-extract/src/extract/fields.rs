//! Scalar field extraction: `key: '...'` in any of three quoting styles.

use regex::Regex;

/// One key's extractors across the three quoting styles, tried in order
/// (single, double, backtick) — first style that matches anywhere wins.
struct QuotedField {
    patterns: Vec<Regex>,
}

impl QuotedField {
    fn new(key: &str) -> Self {
        let sources = [
            format!(r"{key}\s*:\s*'([^']+)'"),
            format!(r#"{key}\s*:\s*"([^"]+)""#),
            format!(r"{key}\s*:\s*`([^`]+)`"),
        ];
        Self {
            patterns: sources.iter().filter_map(|p| Regex::new(p).ok()).collect(),
        }
    }

    fn extract(&self, text: &str) -> Option<String> {
        for re in &self.patterns {
            if let Some(caps) = re.captures(text) {
                return caps.get(1).map(|m| m.as_str().to_string());
            }
        }
        None
    }
}

/// Pre-compiled extractors for the scalar fields of actions, triggers,
/// index artifacts, and property blocks.
pub struct FieldExtractor {
    name: QuotedField,
    display_name: QuotedField,
    description: QuotedField,
    required: Option<Regex>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            name: QuotedField::new("name"),
            display_name: QuotedField::new("displayName"),
            description: QuotedField::new("description"),
            required: Regex::new(r"required\s*:\s*(true|false)").ok(),
        }
    }

    pub fn name(&self, text: &str) -> Option<String> {
        self.name.extract(text)
    }

    pub fn display_name(&self, text: &str) -> Option<String> {
        self.display_name.extract(text)
    }

    pub fn description(&self, text: &str) -> Option<String> {
        self.description.extract(text)
    }

    /// The `required` boolean literal; absent defaults to false.
    pub fn required(&self, text: &str) -> bool {
        self.required
            .as_ref()
            .and_then(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .is_some_and(|m| m.as_str() == "true")
    }
}
