//! Hosted prompt flows.
//!
//! DESIGN
//! ======
//! A flow is a fixed instruction template plus schema-checked input and output
//! around one LLM call. Callers see only [`QuestionAnswerer`], so the model
//! provider can be swapped for a stub in tests.

pub mod answer_ipv6;

use crate::llm::types::LlmError;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The input did not satisfy the flow's input schema.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The model call itself failed.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model answered, but not in the declared output schema.
    #[error("malformed model output: {0}")]
    MalformedOutput(String),

    /// The reply hit the output token cap before the schema was complete.
    #[error("model output truncated at {max_tokens} tokens")]
    Truncated { max_tokens: u32 },
}

impl FlowError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "E_INVALID_INPUT",
            Self::Llm(e) => e.error_code(),
            Self::MalformedOutput(_) => "E_MALFORMED_OUTPUT",
            Self::Truncated { .. } => "E_TRUNCATED",
        }
    }
}

// =============================================================================
// SCHEMA TYPES
// =============================================================================

/// A user question; never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
}

impl Question {
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] when `text` is empty after trimming.
    pub fn new(text: &str) -> Result<Self, FlowError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FlowError::InvalidInput("question must not be empty"));
        }
        Ok(Self { text: text.to_owned() })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The structured answer produced by a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

// =============================================================================
// ANSWERER TRAIT
// =============================================================================

/// Narrow seam in front of the hosted model: one question in, one answer out.
#[async_trait::async_trait]
pub trait QuestionAnswerer: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`FlowError`] when the model call fails or its output does
    /// not match the answer schema.
    async fn ask(&self, question: &Question) -> Result<Answer, FlowError>;
}
