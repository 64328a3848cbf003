//! AI question service: the boundary between the UI and the hosted flow.
//!
//! ERROR HANDLING
//! ==============
//! Every failure below this point (unconfigured provider, transport, quota,
//! off-schema output) is logged here and collapsed into one user-facing
//! string. Nothing propagates to the caller as a fault.

use tracing::{error, info, warn};

pub use client::net::types::GENERIC_FAILURE;

use crate::flows::{Question, QuestionAnswerer};

/// Forward `question` to the answerer and return its answer text.
///
/// # Errors
///
/// Returns [`GENERIC_FAILURE`] (as an owned string) on any failure; details
/// go to the log only.
pub async fn ask_question(answerer: Option<&dyn QuestionAnswerer>, question: &str) -> Result<String, String> {
    info!(question_len = question.chars().count(), "ask: question received");

    let Some(answerer) = answerer else {
        warn!("ask: LLM not configured");
        return Err(GENERIC_FAILURE.to_owned());
    };

    let question = match Question::new(question) {
        Ok(q) => q,
        Err(e) => {
            warn!(code = e.error_code(), error = %e, "ask: rejected question");
            return Err(GENERIC_FAILURE.to_owned());
        }
    };

    match answerer.ask(&question).await {
        Ok(answer) => {
            info!(answer_len = answer.text.len(), "ask: answered");
            Ok(answer.text)
        }
        Err(e) => {
            error!(code = e.error_code(), error = %e, "ask: flow failed");
            Err(GENERIC_FAILURE.to_owned())
        }
    }
}

#[cfg(test)]
#[path = "ask_test.rs"]
mod tests;
