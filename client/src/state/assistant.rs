//! AI assistant chat state.
//!
//! DESIGN
//! ======
//! Submission is optimistic: the user's message is appended before the
//! request goes out and removed again (by id) if the request fails, so a
//! failed exchange leaves the transcript exactly as it was. Only one request
//! may be in flight at a time.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::net::types::UNKNOWN_ERROR;

/// Shortest accepted question, in characters after trimming.
pub const MIN_QUESTION_CHARS: usize = 10;

/// Offered while the transcript is empty.
pub const SUGGESTED_QUESTIONS: [&str; 2] = ["What is IPv6?", "Why does my connection still use IPv4?"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Never edited after insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please ask a more detailed question.")]
    TooShort,
    #[error("a question is already being answered")]
    Busy,
}

/// Handle for a submitted question awaiting its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAsk {
    pub message_id: String,
    pub question: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub input: String,
    /// Inline form message; set by a rejected submission.
    pub validation: Option<String>,
}

impl AssistantState {
    /// Validate `text` and, if accepted, optimistically append it as a user
    /// message, clear the input, and mark the assistant pending.
    ///
    /// # Errors
    ///
    /// [`ValidationError::TooShort`] when the trimmed text is under
    /// [`MIN_QUESTION_CHARS`]; [`ValidationError::Busy`] while a request is in
    /// flight. The transcript is untouched in both cases.
    pub fn submit(&mut self, text: &str) -> Result<PendingAsk, ValidationError> {
        if self.pending {
            return Err(ValidationError::Busy);
        }
        let question = text.trim();
        if question.chars().count() < MIN_QUESTION_CHARS {
            self.validation = Some(ValidationError::TooShort.to_string());
            return Err(ValidationError::TooShort);
        }

        let message = ChatMessage::new(Role::User, question.to_owned());
        let ask = PendingAsk { message_id: message.id.clone(), question: question.to_owned() };
        self.messages.push(message);
        self.input.clear();
        self.validation = None;
        self.pending = true;
        Ok(ask)
    }

    /// Apply the answer for `ask`. Returns the error text to surface when the
    /// request failed.
    pub fn resolve(&mut self, ask: PendingAsk, outcome: Result<String, String>) -> Option<String> {
        self.pending = false;
        match outcome {
            Ok(answer) => {
                self.messages.push(ChatMessage::new(Role::Assistant, answer));
                None
            }
            Err(error) => {
                self.messages.retain(|m| m.id != ask.message_id);
                if error.trim().is_empty() {
                    Some(UNKNOWN_ERROR.to_owned())
                } else {
                    Some(error)
                }
            }
        }
    }

    /// Replace the input text. A shown validation message is re-checked and
    /// cleared once the text would pass.
    pub fn edit(&mut self, text: String) {
        if self.validation.is_some() && text.trim().chars().count() >= MIN_QUESTION_CHARS {
            self.validation = None;
        }
        self.input = text;
    }

    #[must_use]
    pub fn show_suggestions(&self) -> bool {
        self.messages.is_empty()
    }
}
