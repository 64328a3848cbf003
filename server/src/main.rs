#![recursion_limit = "256"]

mod flows;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use flows::QuestionAnswerer;
use flows::answer_ipv6::Ipv6AnswerFlow;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the hosted flow (non-fatal: the assistant reports failures if config is missing).
    let answerer: Option<Arc<dyn QuestionAnswerer>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            let flow: Arc<dyn QuestionAnswerer> = Arc::new(Ipv6AnswerFlow::new(Arc::new(client)));
            Some(flow)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; AI assistant disabled");
            None
        }
    };

    let state = state::AppState::new(answerer);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ipv6insight listening");
    axum::serve(listener, app).await.expect("server failed");
}
