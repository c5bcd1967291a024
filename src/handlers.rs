use crate::errors::AppError;
use crate::models::{DateQuery, Entry, MetaResponse};
use crate::render::{render_entries, render_out_of_range};
use crate::state::AppState;
use crate::ui::{render_page, PageContext};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::debug;

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let query = DateQuery::from(params);
    full_page(&state, query.date.as_deref()).await
}

pub async fn date_page(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Html<String>, AppError> {
    full_page(&state, Some(&date)).await
}

pub async fn get_meta(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<MetaResponse> {
    let query = DateQuery::from(params);
    let window = state.date_window();
    let default_date = window.resolve_requested(query.date.as_deref());

    Json(MetaResponse {
        min_date: window.min_date,
        max_date: window.max_date,
        default_date,
    })
}

pub async fn get_entry(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let query = DateQuery::from(params);
    let window = state.date_window();
    let date = window.resolve_requested(query.date.as_deref());

    if !window.contains(&date) {
        debug!(%date, min = %window.min_date, max = %window.max_date, "entry request out of range");
        return Ok(Html(render_out_of_range(&window)));
    }

    let entries = state.store.fetch_entries_for_date(&date).await?;
    debug!(%date, count = entries.len(), "entry fragment");
    Ok(Html(render_entries(&entries)))
}

async fn full_page(state: &AppState, requested: Option<&str>) -> Result<Html<String>, AppError> {
    let window = state.date_window();
    let date = window.resolve_requested(requested);

    let entries: Vec<Entry> = if window.contains(&date) {
        state.store.fetch_entries_for_date(&date).await?
    } else {
        debug!(%date, "page request out of range");
        Vec::new()
    };

    Ok(Html(render_page(&PageContext {
        date: &date,
        entries: &entries,
        window: &window,
        base_path: &state.base_path,
    })))
}
