//! Laboratory queries.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{Laboratory, LaboratoryInput};

pub struct LaboratoryRepo;

impl LaboratoryRepo {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Laboratory>, AppError> {
        let rows = sqlx::query_as("SELECT id, name, contact FROM laboratory ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Laboratory>, AppError> {
        let row = sqlx::query_as("SELECT id, name, contact FROM laboratory WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert with a generated id; returns the stored record.
    pub async fn insert(pool: &SqlitePool, input: &LaboratoryInput) -> Result<Laboratory, AppError> {
        let id = sqlx::query("INSERT INTO laboratory (name, contact) VALUES (?, ?)")
            .bind(&input.name)
            .bind(&input.contact)
            .execute(pool)
            .await?
            .last_insert_rowid();
        Self::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Full overwrite at `id`; inserts the row when absent.
    pub async fn upsert(
        pool: &SqlitePool,
        id: i64,
        input: &LaboratoryInput,
    ) -> Result<Laboratory, AppError> {
        sqlx::query(
            "INSERT INTO laboratory (id, name, contact) VALUES (?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, contact = excluded.contact",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.contact)
        .execute(pool)
        .await?;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Delete by id; NotFound when no row matched. Deleting a laboratory
    /// still referenced by students fails on the foreign key.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM laboratory WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("laboratory {}", id)));
        }
        Ok(())
    }
}
