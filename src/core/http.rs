//! Blocking HTTP fetch for the change list.
//!
//! One GET, no timeout, no retries. Network failures and non-2xx
//! responses are fatal and abort the whole run.

use crate::error::{Error, Result};
use reqwest::blocking::Client;

fn request_error(url: &str, e: reqwest::Error) -> Error {
    Error::fetch_request_failed(url, e.to_string())
}

/// Fetches a plain-text resource and returns the full response body.
pub(crate) fn fetch_text(url: &str) -> Result<String> {
    let client = Client::new();
    let response = client.get(url).send().map_err(|e| request_error(url, e))?;

    let status = response.status();
    let body = response.text().map_err(|e| request_error(url, e))?;

    if !status.is_success() {
        return Err(Error::fetch_bad_status(url, status.as_u16(), body));
    }

    Ok(body)
}
