//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Compiled WASM/CSS assets are served from
//! `/pkg`.

pub mod ask;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// API routes consumed by the hydrated UI.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/ask", post(ask::ask))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router: API + Leptos SSR when configured.
///
/// A missing Leptos configuration (no `cargo-leptos` environment) is not
/// fatal; the API is still served.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app() {
        Ok(leptos) => api_routes(state).merge(leptos),
        Err(e) => {
            warn!(error = %e, "Leptos configuration unavailable; serving API only");
            api_routes(state)
        }
    };
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend plus its static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment and no `[[workspace.metadata.leptos]]` context).
fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = leptos_options.site_pkg_dir.to_string();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(leptos_router.nest_service(&format!("/{pkg_dir}"), ServeDir::new(site_root_path.join(&pkg_dir))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
