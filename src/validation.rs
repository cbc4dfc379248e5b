//! Input validation for task creation and updates.
//!
//! Field-level checks run before any repository call; the duplicate check
//! lives in the repository because it needs the stored collection.

use chrono::NaiveDate;

use crate::dtos::NewTaskDto;
use crate::error::TaskError;

/// Wire format for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation error with details about what failed.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validation - either Ok or a list of errors.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validates a new task DTO before creation.
///
/// Only field-shape checks happen here; the due date format is deliberately
/// not checked yet, because duplicate detection must see the raw value first.
pub fn validate_new_task(dto: &NewTaskDto) -> ValidationResult {
    let mut errors = Vec::new();

    if dto.description.trim().is_empty() {
        errors.push(ValidationError {
            field: "description".to_string(),
            message: "Task description cannot be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Parse a due date from its wire form.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, TaskError> {
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).map_err(|_| TaskError::InvalidDueDate)
}
