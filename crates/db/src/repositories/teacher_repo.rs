//! Repository for the `teachers` table.
//!
//! Every method runs exactly one parameterized statement. Input validation
//! happens here, before the statement executes, so a rejected request never
//! touches the store.

use sqlx::PgPool;

use schoolhub_core::types::DbId;

use crate::error::DbError;
use crate::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, hire_date, salary";

/// Provides CRUD operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Insert a new teacher, returning the created row.
    ///
    /// Rejects empty names and future hire dates. Salary is not checked
    /// here; see [`CreateTeacher::validate`].
    pub async fn create(pool: &PgPool, input: &CreateTeacher) -> Result<Teacher, DbError> {
        input.validate()?;
        let query = format!(
            "INSERT INTO teachers (first_name, last_name, hire_date, salary)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let teacher = sqlx::query_as::<_, Teacher>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.hire_date)
            .bind(input.salary)
            .fetch_one(pool)
            .await?;
        Ok(teacher)
    }

    /// Find a teacher by ID. `None` when no row matches; that is a valid
    /// outcome, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all teachers in storage order (ascending ID).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers ORDER BY id");
        sqlx::query_as::<_, Teacher>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable field of the teacher matching `id`.
    ///
    /// The body id must match `id`; name, hire date, and salary are all
    /// validated before the statement runs. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeacher,
    ) -> Result<Option<Teacher>, DbError> {
        input.validate(id)?;
        let query = format!(
            "UPDATE teachers
             SET first_name = $2, last_name = $3, hire_date = $4, salary = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let teacher = sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.hire_date)
            .bind(input.salary)
            .fetch_optional(pool)
            .await?;
        Ok(teacher)
    }

    /// Delete a teacher by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
