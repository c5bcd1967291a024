use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// One route set, mounted under `state.base_path` when that is non-empty.
pub fn router(state: AppState) -> Router {
    let base = state.base_path.clone();
    let home = if base.is_empty() { "/".to_string() } else { base.clone() };

    let mut router = Router::new().route(&home, get(handlers::index));
    if !base.is_empty() {
        router = router.route(&format!("{base}/"), get(handlers::index));
    }

    router
        .route(&format!("{base}/date/:date"), get(handlers::date_page))
        .route(&format!("{base}/api/meta"), get(handlers::get_meta))
        .route(&format!("{base}/api/entry"), get(handlers::get_entry))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
