//! IPv6 question-answering flow.
//!
//! One fixed system instruction, one templated field (`{{question}}`), and a
//! JSON output schema `{"answer": string}` that the reply must satisfy.

use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use tracing::{debug, info};

use super::{Answer, FlowError, Question, QuestionAnswerer};
use crate::llm::LlmChat;
use crate::llm::types::Message;

const DEFAULT_AI_MAX_TOKENS: u32 = 1024;

const SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant that answers questions about IPv6.";

const OUTPUT_INSTRUCTION: &str = "Reply with a single JSON object and nothing else, of the form \
{\"answer\": \"<your answer>\"}. The answer may use Markdown.";

const PROMPT_TEMPLATE: &str = "Answer the following question:\n\n{{question}}";

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn ai_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("AI_MAX_TOKENS", DEFAULT_AI_MAX_TOKENS))
}

// =============================================================================
// FLOW
// =============================================================================

pub struct Ipv6AnswerFlow {
    llm: Arc<dyn LlmChat>,
    max_tokens: u32,
}

impl Ipv6AnswerFlow {
    /// Build the flow with `AI_MAX_TOKENS` (default 1024) as the output cap.
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>) -> Self {
        Self { llm, max_tokens: ai_max_tokens() }
    }
}

#[async_trait::async_trait]
impl QuestionAnswerer for Ipv6AnswerFlow {
    async fn ask(&self, question: &Question) -> Result<Answer, FlowError> {
        let system = system_prompt();
        let messages = [Message::user(render_prompt(question))];

        let response = self.llm.chat(self.max_tokens, &system, &messages).await?;
        info!(
            model = %response.model,
            stop_reason = %response.stop_reason,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "flow: answer_ipv6 LLM response"
        );

        let raw = response.text();
        debug!(raw_len = raw.len(), "flow: answer_ipv6 parsing output");
        parse_answer(&raw).map_err(|e| {
            if response.stop_reason == "max_tokens" {
                FlowError::Truncated { max_tokens: self.max_tokens }
            } else {
                e
            }
        })
    }
}

// =============================================================================
// PROMPT
// =============================================================================

fn system_prompt() -> String {
    format!("{SYSTEM_INSTRUCTION}\n\n{OUTPUT_INSTRUCTION}")
}

fn render_prompt(question: &Question) -> String {
    PROMPT_TEMPLATE.replace("{{question}}", question.text())
}

// =============================================================================
// OUTPUT PARSING
// =============================================================================

#[derive(Deserialize)]
struct AnswerOutput {
    answer: String,
}

/// Parse the model reply against the `{"answer": string}` schema.
///
/// Accepts the bare object or one wrapped in a Markdown code fence.
fn parse_answer(raw: &str) -> Result<Answer, FlowError> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(FlowError::MalformedOutput("empty reply".into()));
    }

    let output: AnswerOutput =
        serde_json::from_str(body).map_err(|e| FlowError::MalformedOutput(e.to_string()))?;
    let text = output.answer.trim();
    if text.is_empty() {
        return Err(FlowError::MalformedOutput("answer is empty".into()));
    }
    Ok(Answer { text: text.to_owned() })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = match rest.split_once('\n') {
        // Drop the info string (e.g. `json`) on the opening fence line.
        Some((_, body)) => body,
        // Whole fence on one line; an info string runs up to the first brace.
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

#[cfg(test)]
#[path = "answer_ipv6_test.rs"]
mod tests;
