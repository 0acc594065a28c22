//! Dashboard JSON API handlers

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use obesity_dash::core::Dashboard;
use obesity_dash::data::Schema;
use obesity_dash::page::build_dashboard;
use obesity_dash::selection::{SelectionOptions, SelectionState};
use serde::Serialize;
use tracing::debug;

use super::resolve_selection;
use crate::AppState;
use crate::error::Result;

/// Build the dashboard API router
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/schema", get(get_schema))
        .route("/dashboard", get(get_dashboard))
        .route("/selection", get(get_selection))
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub source: String,
    pub records: usize,
    pub schema: Schema,
    pub options: SelectionOptions,
}

/// GET /api/v1/schema - Column kinds and the choices offered by the sidebar
async fn get_schema(State(state): State<Arc<AppState>>) -> Json<SchemaResponse> {
    Json(SchemaResponse {
        source: state.config.source().to_string(),
        records: state.table.len(),
        schema: state.table.schema().clone(),
        options: state.options.clone(),
    })
}

/// GET /api/v1/dashboard - The chart model for a selection
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Dashboard>> {
    let selection = resolve_selection(&state, pairs)?;
    let dashboard = build_dashboard(&state.table, &selection)?;
    debug!(sections = dashboard.sections.len(), "dashboard built");
    Ok(Json(dashboard))
}

/// GET /api/v1/selection - How a query string resolves against the dataset
async fn get_selection(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SelectionState>> {
    Ok(Json(resolve_selection(&state, pairs)?))
}
