//! Teacher entity model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use schoolhub_core::error::CoreError;
use schoolhub_core::types::DbId;
use schoolhub_core::validation;

/// A row from the `teachers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Teacher {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
}

/// DTO for creating a new teacher. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacher {
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
}

/// DTO for updating an existing teacher. Carries the id and replaces every
/// mutable field of the matching row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeacher {
    pub teacher_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
}

impl CreateTeacher {
    /// Check name and hire date. Salary is not checked on create; the
    /// update path is the only one that enforces the salary rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        validation::validate_name(&self.first_name, &self.last_name)?;
        validation::validate_hire_date(self.hire_date)
    }
}

impl UpdateTeacher {
    /// Check that the body id matches the addressed row, then apply the
    /// name, hire date, and salary rules.
    pub fn validate(&self, id: DbId) -> Result<(), CoreError> {
        if self.teacher_id != id {
            return Err(CoreError::Validation("Teacher ID mismatch".to_string()));
        }
        validation::validate_name(&self.first_name, &self.last_name)?;
        validation::validate_hire_date(self.hire_date)?;
        validation::validate_salary(self.salary)
    }
}
