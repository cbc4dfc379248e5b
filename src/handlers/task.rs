use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::dtos;
use crate::error::{ApiError, TaskError};
use crate::validation;

use super::AppState;
use super::response::validation_error_response;

#[utoipa::path(
    get,
    path = "/tasks",
    summary = "List tasks",
    description = "Returns every task in insertion order.",
    responses(
        (status = 200, description = "Array of tasks", body = Vec<dtos::TaskDto>),
        (status = 401, description = "Missing or invalid credentials"),
    ),
    tag = "tasks"
)]
/// Get all tasks
pub async fn list_tasks(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    log::info!("Fetching all tasks");
    let tasks: Vec<dtos::TaskDto> = state
        .repo
        .list()
        .await
        .into_iter()
        .map(dtos::TaskDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(tasks))
}

#[utoipa::path(
    post,
    path = "/tasks",
    summary = "Create a task",
    description = "Creates a task with a server-assigned id. A task whose description, due date and status all match an existing task is rejected; the duplicate scan compares the raw `due_date` string against stored dates before the format check runs.",
    request_body = dtos::NewTaskDto,
    responses(
        (status = 201, description = "Task created", body = dtos::TaskDto),
        (status = 400, description = "Empty description or invalid due date"),
        (status = 409, description = "Task with the same description, due date, and status already exists"),
        (status = 401, description = "Missing or invalid credentials"),
    ),
    tag = "tasks"
)]
/// Create a new task
pub async fn create_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    form: web::Json<dtos::NewTaskDto>,
) -> actix_web::Result<HttpResponse> {
    if let Err(errors) = validation::validate_new_task(&form) {
        return Ok(validation_error_response(&errors));
    }

    let task = state.repo.create(form.into_inner()).await.map_err(|e| {
        log::warn!("Task creation rejected: {}", e);
        ApiError::from(e)
    })?;

    log::info!("Task created: {} (user={})", task.id, user);
    Ok(HttpResponse::Created().json(dtos::TaskDto::from(task)))
}

#[utoipa::path(
    get,
    path = "/tasks/{task_id}",
    summary = "Get a task",
    params(("task_id" = Uuid, Path, description = "The task identifier")),
    responses(
        (status = 200, description = "The matching task", body = dtos::TaskDto),
        (status = 404, description = "Task not found"),
        (status = 401, description = "Missing or invalid credentials"),
    ),
    tag = "tasks"
)]
/// Get a specific task by ID
pub async fn get_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
) -> actix_web::Result<HttpResponse> {
    let task_id = task_id.into_inner();
    match state.repo.find(task_id).await {
        Some(task) => {
            log::info!("Fetching task {}", task_id);
            Ok(HttpResponse::Ok().json(dtos::TaskDto::from(task)))
        }
        None => {
            log::warn!("Task {} not found", task_id);
            Err(ApiError::from(TaskError::TaskNotFound(task_id)).into())
        }
    }
}

#[utoipa::path(
    put,
    path = "/tasks/{task_id}",
    summary = "Update a task",
    description = "Merges the provided fields into the existing task; absent fields keep their previous values. The triple-uniqueness rule is not re-checked on update.",
    params(("task_id" = Uuid, Path, description = "The task identifier")),
    request_body = dtos::UpdateTaskDto,
    responses(
        (status = 200, description = "The updated task", body = dtos::TaskDto),
        (status = 400, description = "Invalid due date"),
        (status = 404, description = "Task not found"),
        (status = 401, description = "Missing or invalid credentials"),
    ),
    tag = "tasks"
)]
/// Update an existing task
pub async fn update_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
    form: web::Json<dtos::UpdateTaskDto>,
) -> actix_web::Result<HttpResponse> {
    let task_id = task_id.into_inner();

    // Existence is checked before the payload is validated: an unknown id is
    // 404 even when the body also carries a bad date.
    if state.repo.find(task_id).await.is_none() {
        log::warn!("Task {} not found for update", task_id);
        return Err(ApiError::from(TaskError::TaskNotFound(task_id)).into());
    }

    let patch = form.into_inner().into_patch().map_err(|e| {
        log::warn!("Task {} update rejected: {}", task_id, e);
        ApiError::from(e)
    })?;

    let task = state
        .repo
        .update(task_id, patch)
        .await
        .ok_or_else(|| ApiError::from(TaskError::TaskNotFound(task_id)))?;

    log::info!("Task {} updated (user={})", task_id, user);
    Ok(HttpResponse::Ok().json(dtos::TaskDto::from(task)))
}

#[utoipa::path(
    delete,
    path = "/tasks/{task_id}",
    summary = "Delete a task",
    params(("task_id" = Uuid, Path, description = "The task identifier")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found"),
        (status = 401, description = "Missing or invalid credentials"),
    ),
    tag = "tasks"
)]
/// Delete a task
pub async fn delete_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> actix_web::Result<HttpResponse> {
    let task_id = task_id.into_inner();
    if state.repo.remove(task_id).await {
        log::info!("Task {} deleted (user={})", task_id, user);
        Ok(HttpResponse::NoContent().finish())
    } else {
        log::warn!("Task {} not found for deletion", task_id);
        Err(ApiError::from(TaskError::TaskNotFound(task_id)).into())
    }
}
