//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate (SSR build) and serializes these exact
//! types, so both sides of `POST /api/ask` share one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Fallback shown when a failure response carries no error text.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// The only error text a user ever sees from the question service.
pub const GENERIC_FAILURE: &str =
    "Sorry, I encountered an issue while processing your question. Please try again later.";

/// Request body for `POST /api/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Response body for `POST /api/ask`.
///
/// `{ "success": true, "answer": … }` or `{ "success": false, "error": … }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskResponse {
    #[must_use]
    pub fn answered(answer: impl Into<String>) -> Self {
        Self { success: true, answer: Some(answer.into()), error: None }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, answer: None, error: Some(error.into()) }
    }

    /// Collapse to the answer text or a displayable error.
    ///
    /// A success flag without an answer counts as a failure.
    ///
    /// # Errors
    ///
    /// Returns the server's error text, or [`UNKNOWN_ERROR`] when absent.
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self { success: true, answer: Some(answer), .. } if !answer.is_empty() => Ok(answer),
            Self { error: Some(error), .. } if !error.is_empty() => Err(error),
            _ => Err(UNKNOWN_ERROR.to_owned()),
        }
    }
}

impl From<Result<String, String>> for AskResponse {
    fn from(result: Result<String, String>) -> Self {
        match result {
            Ok(answer) => Self::answered(answer),
            Err(error) => Self::failed(error),
        }
    }
}

/// Body returned by the ipify lookup endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IpResponse {
    pub ip: String,
}
