//! Generic per-entity surface mounted under /rest: conventional CRUD for
//! both collections, the byName finder, and the opt-in summary projection
//! of students.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::model::{
    Laboratory, LaboratoryInput, LaboratoryPatch, LaboratoryRef, Student, StudentInput,
    StudentPatch, StudentSummary,
};
use crate::repo::{LaboratoryRepo, StudentRepo};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReadParams {
    projection: Option<String>,
}

#[derive(Deserialize)]
pub struct ByNameParams {
    mc: String,
}

/// Renders students either fully or through the named projection.
fn render_students(students: Vec<Student>, projection: Option<&str>) -> Result<Response, AppError> {
    match projection {
        None => Ok(Json(students).into_response()),
        Some("summary") => {
            let view: Vec<StudentSummary> = students.into_iter().map(Into::into).collect();
            Ok(Json(view).into_response())
        }
        Some(other) => Err(AppError::BadRequest(format!("unknown projection: {}", other))),
    }
}

fn render_student(student: Student, projection: Option<&str>) -> Result<Response, AppError> {
    match projection {
        None => Ok(Json(student).into_response()),
        Some("summary") => Ok(Json(StudentSummary::from(student)).into_response()),
        Some(other) => Err(AppError::BadRequest(format!("unknown projection: {}", other))),
    }
}

pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ReadParams>,
) -> Result<Response, AppError> {
    let students = StudentRepo::find_all(&state.pool).await?;
    render_students(students, params.projection.as_deref())
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ReadParams>,
) -> Result<Response, AppError> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    render_student(student, params.projection.as_deref())
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn put_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, AppError> {
    let student = StudentRepo::upsert(&state.pool, id, &input).await?;
    Ok(Json(student))
}

/// Partial update: only fields present in the body change.
pub async fn patch_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<Student>, AppError> {
    let current = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    let laboratory = match patch.laboratory {
        Some(reference) => reference,
        None => current.laboratory.map(|l| LaboratoryRef { id: l.id }),
    };
    let merged = StudentInput {
        name: patch.name.unwrap_or(current.name),
        email: patch.email.unwrap_or(current.email),
        birth_date: patch.birth_date.unwrap_or(current.birth_date),
        laboratory,
    };
    let student = StudentRepo::upsert(&state.pool, id, &merged).await?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    StudentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Finder: students whose name contains the `mc` substring, case-sensitive.
pub async fn students_by_name(
    State(state): State<AppState>,
    Query(params): Query<ByNameParams>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentRepo::find_by_name_contains(&state.pool, &params.mc).await?;
    Ok(Json(students))
}

pub async fn list_laboratories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Laboratory>>, AppError> {
    Ok(Json(LaboratoryRepo::find_all(&state.pool).await?))
}

pub async fn get_laboratory(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Laboratory>, AppError> {
    let lab = LaboratoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("laboratory {}", id)))?;
    Ok(Json(lab))
}

pub async fn create_laboratory(
    State(state): State<AppState>,
    Json(input): Json<LaboratoryInput>,
) -> Result<(StatusCode, Json<Laboratory>), AppError> {
    input.validate()?;
    let lab = LaboratoryRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(lab)))
}

pub async fn put_laboratory(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<LaboratoryInput>,
) -> Result<Json<Laboratory>, AppError> {
    input.validate()?;
    let lab = LaboratoryRepo::upsert(&state.pool, id, &input).await?;
    Ok(Json(lab))
}

pub async fn patch_laboratory(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<LaboratoryPatch>,
) -> Result<Json<Laboratory>, AppError> {
    let current = LaboratoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("laboratory {}", id)))?;
    let merged = LaboratoryInput {
        name: patch.name.unwrap_or(current.name),
        contact: match patch.contact {
            Some(contact) => contact,
            None => current.contact,
        },
    };
    merged.validate()?;
    let lab = LaboratoryRepo::upsert(&state.pool, id, &merged).await?;
    Ok(Json(lab))
}

pub async fn delete_laboratory(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    LaboratoryRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
