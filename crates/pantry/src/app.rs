use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{healthz, livez},
        items::{add_item, delete_item, list_items, remove_item, update_quantity},
        pages::{entries, index},
        search::search,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let timeout = state.request_timeout;

    Router::new()
        // Pages
        .route("/", get(index))
        .route("/entries", get(entries))
        .route("/list", get(list_items))
        // Forms
        .route("/add", post(add_item))
        .route("/remove", post(remove_item))
        .route("/update-quantity", post(update_quantity))
        .route("/delete-item", post(delete_item))
        .route("/search", post(search))
        // Probes
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
