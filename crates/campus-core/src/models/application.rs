//! Course application types and validation.
//!
//! Applications are never stored: a validated form becomes an
//! [`ApplicationSubmission`], which is turned into an [`ApplicationReceipt`] and
//! dropped.

use crate::config::ApplicationConfig;
use crate::error::{CampusError, FieldErrors, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// A document attached to an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Raw application form as posted by the browser.
///
/// Every field is optional here so that missing fields surface as validation
/// messages instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub education_background: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(default)]
    pub documents: Option<Vec<DocumentRef>>,
}

/// An application that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub education_background: String,
    pub motivation: String,
    pub documents: Vec<DocumentRef>,
}

/// Response data for an accepted application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReceipt {
    pub application_id: String,
    pub course_title: String,
    pub applicant_name: String,
    pub status: String,
    pub submitted_at: String,
}

impl ApplicationReceipt {
    pub fn new(
        course_title: &str,
        submission: &ApplicationSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            application_id: format!("{}{}", ApplicationConfig::ID_PREFIX, submitted_at.timestamp()),
            course_title: course_title.to_string(),
            applicant_name: submission.full_name.clone(),
            status: ApplicationConfig::INITIAL_STATUS.to_string(),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    max_chars: usize,
) -> String {
    let value = value.unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors
            .entry(field.to_string())
            .or_default()
            .push(format!("The {} field is required.", field.replace('_', " ")));
    } else if trimmed.chars().count() > max_chars {
        errors.entry(field.to_string()).or_default().push(format!(
            "The {} may not be greater than {} characters.",
            field.replace('_', " "),
            max_chars
        ));
    }
    trimmed.to_string()
}

fn check_document(errors: &mut FieldErrors, index: usize, doc: &DocumentRef) {
    let key = format!("documents.{}", index);
    let extension = doc
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if !ApplicationConfig::DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
        errors.entry(key.clone()).or_default().push(format!(
            "The document must be a file of type: {}.",
            ApplicationConfig::DOCUMENT_EXTENSIONS.join(", ")
        ));
    }
    if doc.size_bytes > ApplicationConfig::DOCUMENT_MAX_BYTES {
        errors.entry(key).or_default().push(format!(
            "The document may not be greater than {} kilobytes.",
            ApplicationConfig::DOCUMENT_MAX_BYTES / 1024
        ));
    }
}

impl ApplicationForm {
    /// Validate the form, collecting every failing field.
    pub fn validate(self) -> Result<ApplicationSubmission> {
        let mut errors = FieldErrors::new();

        let full_name = required(
            &mut errors,
            "full_name",
            self.full_name,
            ApplicationConfig::FULL_NAME_MAX,
        );
        let email = required(&mut errors, "email", self.email, ApplicationConfig::EMAIL_MAX);
        if !email.is_empty() && !EMAIL_PATTERN.is_match(&email) {
            errors
                .entry("email".to_string())
                .or_default()
                .push("The email must be a valid email address.".to_string());
        }
        let phone = required(&mut errors, "phone", self.phone, ApplicationConfig::PHONE_MAX);
        let address = required(
            &mut errors,
            "address",
            self.address,
            ApplicationConfig::ADDRESS_MAX,
        );
        let education_background = required(
            &mut errors,
            "education_background",
            self.education_background,
            ApplicationConfig::EDUCATION_MAX,
        );
        let motivation = required(
            &mut errors,
            "motivation",
            self.motivation,
            ApplicationConfig::MOTIVATION_MAX,
        );

        let documents = self.documents.unwrap_or_default();
        for (index, doc) in documents.iter().enumerate() {
            check_document(&mut errors, index, doc);
        }

        if !errors.is_empty() {
            return Err(CampusError::ValidationFailed { errors });
        }

        Ok(ApplicationSubmission {
            full_name,
            email,
            phone,
            address,
            education_background,
            motivation,
            documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            full_name: Some("Nimal Perera".into()),
            email: Some("nimal@example.com".into()),
            phone: Some("+94 77 123 4567".into()),
            address: Some("12 Galle Road, Colombo".into()),
            education_background: Some("A/L Physical Science".into()),
            motivation: Some("I want to build software.".into()),
            documents: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let submission = valid_form().validate().unwrap();
        assert_eq!(submission.full_name, "Nimal Perera");
        assert!(submission.documents.is_empty());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = ApplicationForm::default().validate().unwrap_err();
        let errors = err.field_errors().unwrap();
        for field in [
            "full_name",
            "email",
            "phone",
            "address",
            "education_background",
            "motivation",
        ] {
            assert!(errors.contains_key(field), "missing {}", field);
        }
        assert_eq!(errors["full_name"], vec!["The full name field is required."]);
    }

    #[test]
    fn test_bad_email_and_long_phone() {
        let mut form = valid_form();
        form.email = Some("not-an-email".into());
        form.phone = Some("0".repeat(21));
        let err = form.validate().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors["email"][0].contains("valid email"));
        assert!(errors["phone"][0].contains("20 characters"));
    }

    #[test]
    fn test_document_rules() {
        let mut form = valid_form();
        form.documents = Some(vec![
            DocumentRef {
                file_name: "transcript.PDF".into(),
                size_bytes: 1024,
            },
            DocumentRef {
                file_name: "photo.png".into(),
                size_bytes: 6 * 1024 * 1024,
            },
        ]);
        let err = form.validate().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(!errors.contains_key("documents.0"));
        assert_eq!(errors["documents.1"].len(), 2);
    }

    #[test]
    fn test_receipt_fields() {
        let submission = valid_form().validate().unwrap();
        let at = Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0).unwrap();
        let receipt = ApplicationReceipt::new("Business Administration", &submission, at);
        assert_eq!(receipt.application_id, format!("APP-{}", at.timestamp()));
        assert_eq!(receipt.status, "pending");
        assert_eq!(receipt.applicant_name, "Nimal Perera");
        assert_eq!(receipt.submitted_at, "2024-09-01T08:30:00.000Z");
    }
}
