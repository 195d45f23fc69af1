//! Course record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Study level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Undergraduate,
    Diploma,
    Postgraduate,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Undergraduate => "Undergraduate",
            CourseLevel::Diploma => "Diploma",
            CourseLevel::Postgraduate => "Postgraduate",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: CourseLevel,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub career_prospects: Vec<String>,
    #[serde(default)]
    pub admission_requirements: Vec<String>,
    /// Display string such as `$15,000/year`.
    pub tuition_fee: String,
    pub available_seats: u32,
    pub start_date: NaiveDate,
}

impl Course {
    /// Numeric tuition amount embedded in the display string.
    ///
    /// All non-digit characters are dropped, so `$15,000/year` becomes `15000`.
    /// A string without digits yields 0.
    pub fn tuition_amount(&self) -> u64 {
        parse_fee(&self.tuition_fee)
    }
}

/// Extract the integer amount from a fee display string.
pub fn parse_fee(display: &str) -> u64 {
    display
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// Case-insensitive substring test.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fee() {
        assert_eq!(parse_fee("$15,000/year"), 15000);
        assert_eq!(parse_fee("$10,000/year"), 10000);
        assert_eq!(parse_fee("free"), 0);
        assert_eq!(parse_fee(""), 0);
    }

    #[test]
    fn test_level_serializes_as_display_string() {
        let json = serde_json::to_string(&CourseLevel::Postgraduate).unwrap();
        assert_eq!(json, "\"Postgraduate\"");
        assert_eq!(CourseLevel::Diploma.to_string(), "Diploma");
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Data Science & Analytics", "SCIENCE"));
        assert!(!contains_ci("Business", "science"));
        assert!(contains_ci("anything", ""));
    }
}
