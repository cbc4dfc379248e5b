//! Request and response schemas for the task endpoints.
//!
//! DTOs are deliberately separate from the domain model: input payloads carry
//! the due date as the raw wire string so it can be checked against stored
//! tasks before it is parsed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TaskError;
use crate::models::{StatusKind, Task};
use crate::repository::TaskPatch;
use crate::validation;

/// Input DTO for creating a task via `POST /tasks`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewTaskDto {
    /// Task description. Must be non-empty.
    pub description: String,

    /// Due date in `YYYY-MM-DD` form. Kept as the raw wire string: duplicate
    /// detection compares it against the canonical form of each stored date
    /// before format validation runs.
    #[schema(example = "2025-03-10")]
    pub due_date: String,

    /// Task status, `active` or `completed`.
    pub status: StatusKind,
}

/// Partial payload for `PUT /tasks/{task_id}`. Absent fields keep their
/// previous values.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskDto {
    pub description: Option<String>,

    /// New due date in `YYYY-MM-DD` form, validated when present.
    #[schema(example = "2025-03-10")]
    pub due_date: Option<String>,

    pub status: Option<StatusKind>,
}

impl UpdateTaskDto {
    /// Convert into a repository patch, parsing the due date if one was sent.
    pub fn into_patch(self) -> Result<TaskPatch, TaskError> {
        let due_date = match self.due_date {
            Some(raw) => Some(validation::parse_due_date(&raw)?),
            None => None,
        };
        Ok(TaskPatch {
            description: self.description,
            due_date,
            status: self.status,
        })
    }
}

/// Task representation returned by every task endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    /// Server-assigned UUID. Immutable once assigned.
    pub id: uuid::Uuid,
    pub description: String,
    /// Due date, serialized as `YYYY-MM-DD`.
    pub due_date: chrono::NaiveDate,
    pub status: StatusKind,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            description: t.description,
            due_date: t.due_date,
            status: t.status,
        }
    }
}
