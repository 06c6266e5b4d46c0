//! Shared contact-form wire model for the `/api/contact` endpoints.
//!
//! This crate owns the JSON representation used by both `server` and `client`,
//! together with the validation rules both sides enforce. The client runs the
//! field-level checks to render inline messages; the server runs
//! [`ContactSubmission::validate`] and answers the first failure with a 400.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Selectable project types shown in the contact form: `(value, label)`.
pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("custom-harness", "Custom wire harness"),
    ("cable-assembly", "Cable assembly"),
    ("panel-wiring", "Control panel wiring"),
    ("prototype", "Prototype / small batch"),
    ("volume-production", "Volume production"),
    ("other", "Other"),
];

/// Resolve a project type value to its human label. Unknown values pass through.
#[must_use]
pub fn project_type_label(value: &str) -> &str {
    PROJECT_TYPES
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |(_, label)| label)
}

// =============================================================================
// ERRORS
// =============================================================================

/// First failing rule of a submission, in the order the server checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("GDPR consent is required")]
    ConsentRequired,
    #[error("Invalid email format")]
    InvalidEmail,
}

// =============================================================================
// UTM ATTRIBUTION
// =============================================================================

/// Campaign attribution captured from the landing URL.
///
/// Serialized with `utm_*` keys, which is also the session-storage shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtmParams {
    #[serde(rename = "utm_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "utm_medium", skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(rename = "utm_campaign", skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(rename = "utm_term", skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(rename = "utm_content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UtmParams {
    /// Collect `utm_*` pairs from a parsed query string. Blank values are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "utm_source" => &mut params.source,
                "utm_medium" => &mut params.medium,
                "utm_campaign" => &mut params.campaign,
                "utm_term" => &mut params.term,
                "utm_content" => &mut params.content,
                _ => continue,
            };
            *slot = Some(value.to_owned());
        }
        params
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.medium.is_none()
            && self.campaign.is_none()
            && self.term.is_none()
            && self.content.is_none()
    }

    /// Overlay `fresh` onto `self`: any field present in `fresh` wins.
    #[must_use]
    pub fn overridden_by(self, fresh: Self) -> Self {
        Self {
            source: fresh.source.or(self.source),
            medium: fresh.medium.or(self.medium),
            campaign: fresh.campaign.or(self.campaign),
            term: fresh.term.or(self.term),
            content: fresh.content.or(self.content),
        }
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Request body of `POST /api/contact`.
///
/// Every field defaults when absent so a partial body reaches validation
/// instead of failing at deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    pub message: String,
    pub gdpr_consent: bool,
    pub marketing_consent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

/// Form fields that carry their own inline validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Company,
    Message,
    GdprConsent,
}

/// Inline messages keyed by field. Empty means the form may be submitted.
pub type FieldErrors = BTreeMap<Field, &'static str>;

impl ContactSubmission {
    /// Copy attribution fields from captured UTM parameters.
    #[must_use]
    pub fn with_attribution(mut self, utm: &UtmParams) -> Self {
        self.utm_source.clone_from(&utm.source);
        self.utm_medium.clone_from(&utm.medium);
        self.utm_campaign.clone_from(&utm.campaign);
        self.utm_term.clone_from(&utm.term);
        self.utm_content.clone_from(&utm.content);
        self
    }

    #[must_use]
    pub fn attribution(&self) -> UtmParams {
        UtmParams {
            source: self.utm_source.clone(),
            medium: self.utm_medium.clone(),
            campaign: self.utm_campaign.clone(),
            term: self.utm_term.clone(),
            content: self.utm_content.clone(),
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Server-side gate. Returns the first failing rule.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingFields`] when any required text field is
    /// blank, [`ValidationError::ConsentRequired`] without GDPR consent, and
    /// [`ValidationError::InvalidEmail`] when the address has no valid shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.first_name, &self.last_name, &self.email, &self.company, &self.message];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !self.gdpr_consent {
            return Err(ValidationError::ConsentRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Client-side checks with one message per failing field.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.first_name.trim().is_empty() {
            errors.insert(Field::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(Field::LastName, "Last name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !is_valid_email(self.email.trim()) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }
        if self.company.trim().is_empty() {
            errors.insert(Field::Company, "Company is required");
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required");
        }
        if !self.gdpr_consent {
            errors.insert(Field::GdprConsent, "You must accept the privacy policy to continue");
        }
        errors
    }
}

/// Email shape check: `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Attribution echoed back on success for client-side conversion tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionData {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub project_type: Option<String>,
    pub marketing_consent: bool,
}

impl From<&ContactSubmission> for ConversionData {
    fn from(s: &ContactSubmission) -> Self {
        Self {
            utm_source: s.utm_source.clone(),
            utm_medium: s.utm_medium.clone(),
            utm_campaign: s.utm_campaign.clone(),
            utm_term: s.utm_term.clone(),
            utm_content: s.utm_content.clone(),
            project_type: s.project_type.clone(),
            marketing_consent: s.marketing_consent,
        }
    }
}

/// `200` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_data: Option<ConversionData>,
}

/// `4xx` / `5xx` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    #[must_use]
    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}
