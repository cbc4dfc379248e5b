//! Error types for the task API.
//!
//! This module defines strongly-typed errors for better error handling
//! and more informative error messages.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header};
use thiserror::Error;

/// Domain error type for task operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task not found
    #[error("Task {0} not found")]
    TaskNotFound(uuid::Uuid),

    /// Another task already carries the same description, due date and status
    #[error("Task with the same description, due date, and status already exists.")]
    DuplicateTask,

    /// Due date did not match the expected calendar-date format
    #[error("Invalid date format. Expected YYYY-MM-DD.")]
    InvalidDueDate,
}

/// Error type for API operations (converts to HTTP responses).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: missing or invalid credentials")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);
        if matches!(self, ApiError::Unauthorized) {
            builder.insert_header((
                header::WWW_AUTHENTICATE,
                r#"Basic realm="Authentication Required""#,
            ));
        }
        builder.json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }))
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::TaskNotFound(id) => ApiError::NotFound(format!("Task {} not found", id)),
            TaskError::DuplicateTask => ApiError::Conflict(
                "Task with the same description, due date, and status already exists.".to_string(),
            ),
            TaskError::InvalidDueDate => {
                ApiError::BadRequest("Invalid date format. Expected YYYY-MM-DD.".to_string())
            }
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_status_codes() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(
            ApiError::from(TaskError::TaskNotFound(id)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(TaskError::DuplicateTask).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(TaskError::InvalidDueDate).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unauthorized_response_carries_basic_challenge() {
        let resp = ApiError::Unauthorized.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let challenge = resp
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .expect("challenge header missing");
        assert!(challenge.to_str().unwrap().starts_with("Basic"));
    }
}
