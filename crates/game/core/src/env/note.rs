//! Note metadata extraction.
//!
//! Database entries carry free text in which `<key:value>` and `<key>` tags
//! are recognised. Keys are case-sensitive; a later tag with the same key
//! overwrites an earlier one.

use std::collections::HashMap;

/// Metadata tags found in a note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteMeta {
    entries: HashMap<String, MetaValue>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaValue {
    /// `<key>`
    Flag,
    /// `<key:value>`
    Text(String),
}

impl NoteMeta {
    pub fn extract(note: &str) -> Self {
        let mut entries = HashMap::new();
        let mut rest = note;

        while let Some(open) = rest.find('<') {
            let after = &rest[open + 1..];
            let Some(len) = after.find(['<', '>']) else {
                break;
            };
            if after.as_bytes()[len] == b'<' {
                // Nested opener: restart the scan from it.
                rest = &after[len..];
                continue;
            }

            let body = &after[..len];
            rest = &after[len + 1..];

            let (key, value) = match body.split_once(':') {
                Some((key, value)) => (key, MetaValue::Text(value.to_string())),
                None => (body, MetaValue::Flag),
            };
            if !key.is_empty() {
                entries.insert(key.to_string(), value);
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Value of a `<key:value>` tag; `None` for flags and missing keys.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            MetaValue::Text(text) => Some(text),
            MetaValue::Flag => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_values_and_flags() {
        let meta = NoteMeta::extract("Blade dance <requiredStates:4,5>\n<boss> <x:1><x:2>");

        assert_eq!(meta.text("requiredStates"), Some("4,5"));
        assert_eq!(meta.get("boss"), Some(&MetaValue::Flag));
        assert_eq!(meta.text("x"), Some("2"));
        assert_eq!(meta.text("RequiredStates"), None);
    }

    #[test]
    fn ignores_unterminated_and_nested_tags() {
        let meta = NoteMeta::extract("<broken <ok:yes> <dangling");

        assert_eq!(meta.text("ok"), Some("yes"));
        assert!(meta.get("broken ").is_none());
        assert!(meta.get("dangling").is_none());
    }
}
