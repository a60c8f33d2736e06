//! Custom student controller routes.

use crate::handlers::students;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/:id",
            get(students::get_one)
                .put(students::update)
                .delete(students::delete),
        )
        .with_state(state)
}
