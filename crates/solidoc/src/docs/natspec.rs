use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@(\w+)\s*(.*)$").expect("valid natspec tag regex"));
static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?|\n").expect("valid line break regex"));

/// Natspec tags of one declaration.
///
/// Text before the first tag counts as `@notice`. Repeated tags and
/// continuation lines are joined with newlines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Natspec {
    tags: HashMap<String, String>,
}

impl Natspec {
    pub fn parse(text: &str) -> Self {
        let mut tags: HashMap<String, String> = HashMap::new();
        let mut current = "notice".to_owned();

        for raw_line in text.lines() {
            let line = raw_line.trim().trim_start_matches('*').trim();
            if line.is_empty() {
                continue;
            }
            let content = match TAG_LINE.captures(line) {
                Some(caps) => {
                    current = caps[1].to_owned();
                    caps[2].to_owned()
                },
                None => line.to_owned(),
            };
            if content.is_empty() {
                continue;
            }
            let entry = tags.entry(current.clone()).or_default();
            if !entry.is_empty() {
                entry.push('\n');
            }
            entry.push_str(&content);
        }

        Self {
            tags,
        }
    }

    pub fn get(
        &self,
        tag: &str,
    ) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn notice(&self) -> &str {
        self.get("notice").unwrap_or_default()
    }

    pub fn dev(&self) -> Option<&str> {
        self.get("dev")
    }
}

/// Collapse every line break into a single space.
pub fn single_line(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").into_owned()
}
