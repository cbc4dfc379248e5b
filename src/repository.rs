//! In-memory task storage.
//!
//! The collection is the only shared mutable state in the process. All access
//! goes through an async `RwLock`: reads may run concurrently, writes are
//! serialized. Insertion order is preserved, lookups are linear scans.

use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dtos::NewTaskDto;
use crate::error::TaskError;
use crate::models::{StatusKind, Task};
use crate::validation;

/// Partial update applied to an existing task. `None` fields keep their
/// previous values.
#[derive(Debug, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<StatusKind>,
}

/// Owned, insertion-ordered task collection.
#[derive(Debug, Default)]
pub struct TaskRepository {
    tasks: RwLock<Vec<Task>>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// All tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    /// Linear scan by id.
    pub async fn find(&self, id: Uuid) -> Option<Task> {
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// Insert a new task, assigning its id.
    ///
    /// Runs under a single write-lock acquisition so the uniqueness check and
    /// the insert cannot interleave with a concurrent create. The duplicate
    /// check compares the unparsed wire value against the canonical string
    /// form of each stored date; format validation runs after it.
    pub async fn create(&self, new: NewTaskDto) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;

        let duplicate = tasks.iter().any(|t| {
            t.description == new.description
                && t.due_date.to_string() == new.due_date
                && t.status == new.status
        });
        if duplicate {
            return Err(TaskError::DuplicateTask);
        }

        let due_date = validation::parse_due_date(&new.due_date)?;
        let task = Task {
            id: Uuid::new_v4(),
            description: new.description,
            due_date,
            status: new.status,
        };
        tasks.push(task.clone());
        Ok(task)
    }

    /// Merge the patch into the matching task, returning the updated record.
    pub async fn update(&self, id: Uuid, patch: TaskPatch) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|t| t.id == id)?;

        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        Some(task.clone())
    }

    /// Remove the matching task. Returns false when no task carried the id.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        tasks.len() != before
    }
}
