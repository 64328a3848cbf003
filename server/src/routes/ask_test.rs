use std::sync::Arc;

use super::*;
use crate::flows::{Answer, FlowError, Question, QuestionAnswerer};
use crate::services::ask::GENERIC_FAILURE;

struct EchoAnswerer;

#[async_trait::async_trait]
impl QuestionAnswerer for EchoAnswerer {
    async fn ask(&self, question: &Question) -> Result<Answer, FlowError> {
        Ok(Answer { text: format!("echo: {}", question.text()) })
    }
}

struct BrokenAnswerer;

#[async_trait::async_trait]
impl QuestionAnswerer for BrokenAnswerer {
    async fn ask(&self, _question: &Question) -> Result<Answer, FlowError> {
        Err(FlowError::MalformedOutput("not json".into()))
    }
}

fn state_with(answerer: impl QuestionAnswerer + 'static) -> AppState {
    let answerer: Arc<dyn QuestionAnswerer> = Arc::new(answerer);
    AppState::new(Some(answerer))
}

fn request(question: &str) -> Json<AskRequest> {
    Json(AskRequest { question: question.to_owned() })
}

#[tokio::test]
async fn ask_success_body() {
    let state = state_with(EchoAnswerer);
    let Json(body) = ask(State(state), request("What is IPv6?")).await;
    assert!(body.success);
    assert_eq!(body.answer.as_deref(), Some("echo: What is IPv6?"));
    assert!(body.error.is_none());
}

#[tokio::test]
async fn ask_failure_body_is_structured() {
    let state = state_with(BrokenAnswerer);
    let Json(body) = ask(State(state), request("What is IPv6?")).await;
    assert!(!body.success);
    assert!(body.answer.is_none());
    assert_eq!(body.error.as_deref(), Some(GENERIC_FAILURE));
}

#[tokio::test]
async fn ask_without_llm_is_structured_failure() {
    let Json(body) = ask(State(AppState::new(None)), request("What is IPv6?")).await;
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some(GENERIC_FAILURE));
}

#[tokio::test]
async fn ask_failure_serializes_without_answer_field() {
    let Json(body) = ask(State(AppState::new(None)), request("What is IPv6?")).await;
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("answer").is_none());
}
