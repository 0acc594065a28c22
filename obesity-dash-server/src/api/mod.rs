pub mod dashboard;
pub mod portal;

use std::sync::Arc;

use axum::{Router, routing::get};
use obesity_dash::selection::{SelectionRequest, SelectionState};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::AppState;
use crate::error::Result;

/// Build the full application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(portal::index))
        .nest("/api/v1", dashboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Resolve the query string of a request into the selection for one render.
pub fn resolve_selection(state: &AppState, pairs: Vec<(String, String)>) -> Result<SelectionState> {
    let request = SelectionRequest::from_pairs(pairs);
    Ok(SelectionState::resolve(&request, &state.options)?)
}
