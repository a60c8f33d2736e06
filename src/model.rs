//! Entities, write representations, and field validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// A research laboratory. The reverse student collection is never stored or
/// serialized; related students are reached by explicit query on their
/// `laboratory_id` column.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Laboratory {
    pub id: i64,
    pub name: String,
    pub contact: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: DateTime<Utc>,
    pub laboratory: Option<Laboratory>,
}

/// Reduced read view of a student: name, email, laboratory. No id.
#[derive(Clone, Debug, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub email: String,
    pub laboratory: Option<Laboratory>,
}

impl From<Student> for StudentSummary {
    fn from(s: Student) -> Self {
        StudentSummary {
            name: s.name,
            email: s.email,
            laboratory: s.laboratory,
        }
    }
}

/// Write representation of a student. Any id in the body is ignored; the
/// identifier comes from the store on create or from the path on update.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    pub laboratory: Option<LaboratoryRef>,
}

/// Laboratory reference inside a student payload. Only the id is used; any
/// other members of the embedded object are dropped.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LaboratoryRef {
    pub id: i64,
}

/// Write representation of a laboratory. An incoming `students` member is
/// accepted and ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct LaboratoryInput {
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
}

pub const LAB_NAME_MIN: usize = 2;
pub const LAB_NAME_MAX: usize = 20;

impl LaboratoryInput {
    /// The name must be 2 to 20 characters.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_lab_name(&self.name)
    }
}

pub fn validate_lab_name(name: &str) -> Result<(), AppError> {
    let len = name.chars().count();
    if len < LAB_NAME_MIN || len > LAB_NAME_MAX {
        return Err(AppError::Validation(format!(
            "name must be between {} and {} characters",
            LAB_NAME_MIN, LAB_NAME_MAX
        )));
    }
    Ok(())
}

/// Partial student update: only fields present in the body change.
/// `laboratory: null` clears the reference, an absent key leaves it alone.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub laboratory: Option<Option<LaboratoryRef>>,
}

/// Partial laboratory update. `contact: null` clears the contact.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LaboratoryPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact: Option<Option<String>>,
}

/// Distinguishes an absent key (outer None) from an explicit null
/// (Some(None)) when deserializing patch bodies.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
