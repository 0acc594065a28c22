//! Portal page handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use obesity_dash::page::build_dashboard;
use obesity_dash::render::{Sidebar, render_page};

use super::resolve_selection;
use crate::AppState;
use crate::error::Result;

/// GET / - The dashboard page; the query string carries the sidebar values
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>> {
    let selection = resolve_selection(&state, pairs)?;
    let dashboard = build_dashboard(&state.table, &selection)?;
    let sidebar = Sidebar::new(&state.table, &state.options, &selection);
    Ok(Html(render_page(&dashboard, &sidebar)?))
}
