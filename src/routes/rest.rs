//! Generic per-entity routes: both collections, the byName finder, and
//! item-level CRUD. The static byName segment is matched before the id
//! parameter.

use crate::handlers::rest;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn rest_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/students",
            get(rest::list_students).post(rest::create_student),
        )
        .route("/students/byName", get(rest::students_by_name))
        .route(
            "/students/:id",
            get(rest::get_student)
                .put(rest::put_student)
                .patch(rest::patch_student)
                .delete(rest::delete_student),
        )
        .route(
            "/laboratories",
            get(rest::list_laboratories).post(rest::create_laboratory),
        )
        .route(
            "/laboratories/:id",
            get(rest::get_laboratory)
                .put(rest::put_laboratory)
                .patch(rest::patch_laboratory)
                .delete(rest::delete_laboratory),
        )
        .with_state(state)
}
