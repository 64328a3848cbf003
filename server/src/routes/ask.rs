//! AI question route: JSON face of the question service.

use axum::extract::State;
use axum::response::Json;
use client::net::types::{AskRequest, AskResponse};

use crate::services::ask as ask_svc;
use crate::state::AppState;

/// `POST /api/ask`: answer an IPv6 question.
///
/// Always `200`: flow failures travel in the body as `{ success: false, error }`.
pub async fn ask(State(state): State<AppState>, Json(req): Json<AskRequest>) -> Json<AskResponse> {
    let result = ask_svc::ask_question(state.answerer.as_deref(), &req.question).await;
    Json(AskResponse::from(result))
}

#[cfg(test)]
#[path = "ask_test.rs"]
mod tests;
