//! Contact form draft, inline validation and submit lifecycle.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use contact::{ContactSubmission, Field, FieldErrors, UtmParams};

pub const GENERIC_ERROR: &str =
    "Sorry, something went wrong sending your message. Please try again or email us directly.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub draft: ContactSubmission,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl ContactFormState {
    /// Validate and move to `Submitting`. Returns the payload to post, with
    /// attribution attached, or `None` when validation failed or a request is
    /// already in flight.
    pub fn begin_submit(&mut self, utm: &UtmParams) -> Option<ContactSubmission> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }
        self.errors = self.draft.field_errors();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.draft.clone().with_attribution(utm))
    }

    /// Record the request outcome. Success clears the form.
    pub fn finish<E>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.draft = ContactSubmission::default();
                self.errors.clear();
                self.status = SubmitStatus::Succeeded;
            }
            Err(_) => self.status = SubmitStatus::Failed(GENERIC_ERROR.to_owned()),
        }
    }

    /// Drop the inline message for a field once the visitor edits it.
    pub fn clear_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Back to an empty form after the thank-you state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
