//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds read-only collaborators only; the server keeps no per-user state.

use std::sync::Arc;

use crate::flows::QuestionAnswerer;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Hosted question flow. `None` if LLM env vars are not configured.
    pub answerer: Option<Arc<dyn QuestionAnswerer>>,
}

impl AppState {
    #[must_use]
    pub fn new(answerer: Option<Arc<dyn QuestionAnswerer>>) -> Self {
        Self { answerer }
    }
}
