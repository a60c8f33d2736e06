//! Student queries. Every read joins the laboratory row so responses can
//! embed the full reference.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{Laboratory, Student, StudentInput};

const SELECT: &str = "SELECT s.id, s.name, s.email, s.birth_date, \
    l.id AS laboratory_id, l.name AS laboratory_name, l.contact AS laboratory_contact \
    FROM student s LEFT JOIN laboratory l ON l.id = s.laboratory_id";

/// Row shape produced by the student/laboratory join.
#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    birth_date: DateTime<Utc>,
    laboratory_id: Option<i64>,
    laboratory_name: Option<String>,
    laboratory_contact: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        let laboratory = match (r.laboratory_id, r.laboratory_name) {
            (Some(id), Some(name)) => Some(Laboratory {
                id,
                name,
                contact: r.laboratory_contact,
            }),
            _ => None,
        };
        Student {
            id: r.id,
            name: r.name,
            email: r.email,
            birth_date: r.birth_date,
            laboratory,
        }
    }
}

pub struct StudentRepo;

impl StudentRepo {
    /// All students in insertion order.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Student>, AppError> {
        let sql = format!("{} ORDER BY s.id", SELECT);
        let rows: Vec<StudentRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Student>, AppError> {
        let sql = format!("{} WHERE s.id = ?", SELECT);
        let row: Option<StudentRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row.map(Student::from))
    }

    /// Students whose name contains `needle`. instr() keeps the match
    /// case-sensitive; LIKE would fold ASCII case.
    pub async fn find_by_name_contains(
        pool: &SqlitePool,
        needle: &str,
    ) -> Result<Vec<Student>, AppError> {
        let sql = format!("{} WHERE instr(s.name, ?) > 0 ORDER BY s.id", SELECT);
        let rows: Vec<StudentRow> = sqlx::query_as(&sql).bind(needle).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    /// Insert with a generated id; returns the stored record.
    pub async fn insert(pool: &SqlitePool, input: &StudentInput) -> Result<Student, AppError> {
        let id = sqlx::query(
            "INSERT INTO student (name, email, birth_date, laboratory_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.birth_date)
        .bind(input.laboratory.map(|l| l.id))
        .execute(pool)
        .await?
        .last_insert_rowid();
        Self::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Full overwrite at `id`; inserts the row when absent. The identifier
    /// always comes from the caller, never the body.
    pub async fn upsert(
        pool: &SqlitePool,
        id: i64,
        input: &StudentInput,
    ) -> Result<Student, AppError> {
        sqlx::query(
            "INSERT INTO student (id, name, email, birth_date, laboratory_id) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email, \
             birth_date = excluded.birth_date, laboratory_id = excluded.laboratory_id",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.birth_date)
        .bind(input.laboratory.map(|l| l.id))
        .execute(pool)
        .await?;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Delete by id; NotFound when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("student {}", id)));
        }
        Ok(())
    }
}
