//! Input validation rules for teacher records.
//!
//! Each rule is a pure function returning `Result<(), CoreError>` so the
//! repository layer can reject bad input before any SQL executes. Messages
//! are surfaced verbatim to API clients.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::CoreError;

/// Both name parts must be non-empty.
pub fn validate_name(first_name: &str, last_name: &str) -> Result<(), CoreError> {
    if first_name.is_empty() || last_name.is_empty() {
        return Err(CoreError::Validation(
            "Teacher name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Hire dates may not be later than the current UTC date.
pub fn validate_hire_date(hire_date: NaiveDate) -> Result<(), CoreError> {
    if hire_date > Utc::now().date_naive() {
        return Err(CoreError::Validation(
            "Hire date cannot be in the future".to_string(),
        ));
    }
    Ok(())
}

/// Salary must be zero or positive. Only enforced on update, matching the
/// create path which accepts any salary value.
pub fn validate_salary(salary: Decimal) -> Result<(), CoreError> {
    if salary < Decimal::ZERO {
        return Err(CoreError::Validation(
            "Salary cannot be less than 0".to_string(),
        ));
    }
    Ok(())
}
