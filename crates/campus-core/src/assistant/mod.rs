//! Rule-based assistant features: chat replies, voice search and campus info.
//!
//! All behavior is driven by keyword tables. A table is an ordered list of rules;
//! a rule matches when the lowercased input contains any of its keywords.

mod campus;
mod chat;
mod voice;

pub use campus::{campus_info, Building, CampusInfo};
pub use chat::ChatResponder;
pub use voice::{interpret_command, voice_search, Section, VoiceAction, VoiceResult};

/// One keyword rule.
#[derive(Debug, Clone)]
pub struct KeywordRule<R> {
    /// Lowercase keywords, any of which triggers the rule.
    pub keywords: Vec<&'static str>,
    pub value: R,
}

/// Ordered keyword rules; earlier rules take priority.
#[derive(Debug, Clone)]
pub struct KeywordTable<R> {
    rules: Vec<KeywordRule<R>>,
}

impl<R> KeywordTable<R> {
    pub fn new(rules: Vec<KeywordRule<R>>) -> Self {
        Self { rules }
    }

    /// Value of the first rule matching `text`.
    pub fn first_match(&self, text: &str) -> Option<&R> {
        self.all_matches(text).next()
    }

    /// Values of every rule matching `text`, in rule order.
    pub fn all_matches<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a R> + 'a {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .filter(move |rule| rule.keywords.iter().any(|k| lower.contains(k)))
            .map(|rule| &rule.value)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeywordTable<u8> {
        KeywordTable::new(vec![
            KeywordRule {
                keywords: vec!["course", "program"],
                value: 1,
            },
            KeywordRule {
                keywords: vec!["campus"],
                value: 2,
            },
        ])
    }

    #[test]
    fn test_first_match_respects_order() {
        let table = table();
        assert_eq!(table.first_match("Campus PROGRAM tour"), Some(&1));
        assert_eq!(table.first_match("campus"), Some(&2));
        assert_eq!(table.first_match("weather"), None);
    }

    #[test]
    fn test_all_matches() {
        let table = table();
        let hits: Vec<_> = table.all_matches("course and campus").collect();
        assert_eq!(hits, vec![&1, &2]);
        assert_eq!(table.len(), 2);
    }
}
