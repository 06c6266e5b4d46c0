//! Contact form routes.
//!
//! `POST /api/contact` validates and forwards the inquiry by email.
//! `POST /api/contact-netlify` applies the same validation, logs, and always
//! reports success without sending anything (static-host fallback).

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use contact::{ContactResponse, ContactSubmission, ConversionData, ErrorBody, ValidationError};
use uuid::Uuid;

use crate::services::contact::{self as contact_svc, DeliveryError};
use crate::state::AppState;

pub(crate) const SUCCESS_MESSAGE: &str = "Thank you for your message. We will get back to you within one business day.";
pub(crate) const FAILURE_MESSAGE: &str = "Failed to send message";
pub(crate) const INVALID_BODY_MESSAGE: &str = "Invalid request body";

fn error_response(status: StatusCode, body: ErrorBody) -> Response {
    (status, Json(body)).into_response()
}

/// Parse and validate, or produce the `400` answer.
fn accept(state: &AppState, payload: Result<Json<ContactSubmission>, JsonRejection>) -> Result<ContactSubmission, Response> {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "contact body rejected");
            let body = ErrorBody::new(INVALID_BODY_MESSAGE).with_details(state.details(&rejection));
            return Err(error_response(StatusCode::BAD_REQUEST, body));
        }
    };
    if let Err(e) = submission.validate() {
        tracing::info!(reason = %e, "contact submission failed validation");
        return Err(validation_error_response(e));
    }
    Ok(submission)
}

pub(crate) fn validation_error_response(err: ValidationError) -> Response {
    error_response(StatusCode::BAD_REQUEST, ErrorBody::new(err.to_string()))
}

/// `POST /api/contact`: validate, email sales + submitter, echo attribution.
pub async fn submit(State(state): State<AppState>, payload: Result<Json<ContactSubmission>, JsonRejection>) -> Response {
    let submission = match accept(&state, payload) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let reference = Uuid::new_v4();
    tracing::info!(
        %reference,
        company = submission.company.trim(),
        project_type = submission.project_type.as_deref().unwrap_or("-"),
        utm_source = submission.utm_source.as_deref().unwrap_or("-"),
        marketing_consent = submission.marketing_consent,
        "contact submission received"
    );

    let result = match &state.mail {
        Some(mail) => contact_svc::deliver(mail.mailer.as_ref(), &mail.routing, &submission, reference).await,
        None => Err(DeliveryError::NotConfigured),
    };

    match result {
        Ok(()) => Json(ContactResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_owned(),
            conversion_data: Some(ConversionData::from(&submission)),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(%reference, error = %e, "contact submission failed");
            let body = ErrorBody::new(FAILURE_MESSAGE).with_details(state.details(&e));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, body)
        }
    }
}

/// `POST /api/contact-netlify`: validate and log only.
pub async fn submit_without_mail(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let submission = match accept(&state, payload) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    tracing::info!(
        company = submission.company.trim(),
        project_type = submission.project_type.as_deref().unwrap_or("-"),
        "contact submission received (no mail delivery)"
    );
    Json(ContactResponse { success: true, message: SUCCESS_MESSAGE.to_owned(), conversion_data: None }).into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
