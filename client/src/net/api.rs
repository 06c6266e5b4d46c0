//! REST helpers for the contact endpoint and static site assets.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these requests are only
//! made from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for logging; the UI shows one generic
//! message for any of them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contact::{ContactResponse, ContactSubmission};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16, error: Option<&str>) -> String {
    match error {
        Some(error) => format!("{what} failed: {status} ({error})"),
        None => format!("{what} failed: {status}"),
    }
}

/// Post a contact submission to `/api/contact`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx answer, or a response
/// body that does not report success.
pub async fn submit_contact(submission: &ContactSubmission) -> Result<ContactResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(submission)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let error = resp.json::<contact::ErrorBody>().await.ok().map(|b| b.error);
            return Err(request_failed_message("contact submit", resp.status(), error.as_deref()));
        }
        let body = resp.json::<ContactResponse>().await.map_err(|e| e.to_string())?;
        if body.success {
            Ok(body)
        } else {
            Err(body.message)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err("not available on server".to_owned())
    }
}

/// Fetch an SVG document as text.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx answer.
pub async fn fetch_svg(path: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("svg fetch", resp.status(), None));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err("not available on server".to_owned())
    }
}
