//! Startup fixture data: two laboratories, four students.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::AppError;
use crate::model::{LaboratoryInput, LaboratoryRef, StudentInput};
use crate::repo::{LaboratoryRepo, StudentRepo};

/// Inserts the demo laboratories and students, then logs every student
/// name. Skipped when students already exist, so a restart against a
/// persistent database does not duplicate the fixtures.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), AppError> {
    let existing = StudentRepo::find_all(pool).await?;
    if !existing.is_empty() {
        info!(count = existing.len(), "students already present, skipping seed");
        return Ok(());
    }

    let informatique = LaboratoryRepo::insert(
        pool,
        &LaboratoryInput {
            name: "Informatique".into(),
            contact: Some("contact@gmail.com".into()),
        },
    )
    .await?;
    let biologie = LaboratoryRepo::insert(
        pool,
        &LaboratoryInput {
            name: "Biologie".into(),
            contact: Some("contact@gmail.com".into()),
        },
    )
    .await?;

    let now = Utc::now();
    let fixtures = [
        ("Hassan", "hassan@gmail.com", informatique.id),
        ("Mohamed", "mohamed@gmail.com", informatique.id),
        ("Samira", "samira@gmail.com", biologie.id),
        ("Hasna", "hasna@gmail.com", biologie.id),
    ];
    for (name, email, laboratory_id) in fixtures {
        StudentRepo::insert(
            pool,
            &StudentInput {
                name: name.into(),
                email: email.into(),
                birth_date: now,
                laboratory: Some(LaboratoryRef { id: laboratory_id }),
            },
        )
        .await?;
    }

    for student in StudentRepo::find_all(pool).await? {
        info!(name = %student.name, "seeded student");
    }
    Ok(())
}
