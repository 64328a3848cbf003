//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since the assistant only asks from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-OK statuses are logged to the console and
//! reported as the same generic failure text the server uses, so the UI has a
//! single failure path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::AskResponse;

#[cfg(any(test, feature = "hydrate"))]
const ASK_ENDPOINT: &str = "/api/ask";

#[cfg(any(test, feature = "hydrate"))]
fn ask_failed_message(status: u16) -> String {
    format!("ask request failed: {status}")
}

/// Decode an `/api/ask` reply; anything but a well-formed body is the
/// generic failure.
#[cfg(any(test, feature = "hydrate"))]
fn decode_ask_response(body: Result<AskResponse, String>) -> Result<String, String> {
    match body {
        Ok(resp) => resp.into_result(),
        Err(_) => Err(super::types::GENERIC_FAILURE.to_owned()),
    }
}

/// Ask the IPv6 assistant a question via `POST /api/ask`.
///
/// # Errors
///
/// Returns displayable error text when the request fails or the server
/// reports a failure.
pub async fn ask_question(question: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{AskRequest, GENERIC_FAILURE};

        let payload = AskRequest { question: question.to_owned() };
        let sent = async {
            gloo_net::http::Request::post(ASK_ENDPOINT)
                .json(&payload)?
                .send()
                .await
        }
        .await;
        let resp = match sent {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("ask request failed: {e}");
                return Err(GENERIC_FAILURE.to_owned());
            }
        };
        if !resp.ok() {
            log::warn!("{}", ask_failed_message(resp.status()));
            return Err(GENERIC_FAILURE.to_owned());
        }
        decode_ask_response(resp.json::<AskResponse>().await.map_err(|e| e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err("not available on server".to_owned())
    }
}
