//! Router assembly.

mod api;
mod common;
mod rest;

pub use api::api_routes;
pub use common::common_routes;
pub use rest::rest_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: the custom student controller under /api, the
/// generic per-entity surface under /rest, health endpoints at the root.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state.clone()))
        .nest("/rest", rest_routes(state))
        .layer(TraceLayer::new_for_http())
}
