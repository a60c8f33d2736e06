//! Custom student controller mounted under /api.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::model::{Student, StudentInput};
use crate::repo::StudentRepo;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(StudentRepo::find_all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(student))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Overwrites every field of the record at the path id with the body's
/// fields; creates the record at that id when absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, AppError> {
    let student = StudentRepo::upsert(&state.pool, id, &input).await?;
    Ok(Json(student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    StudentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
