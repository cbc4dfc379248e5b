//! HTTP handlers for the task endpoints.
//!
//! This module contains all HTTP handler functions that can be used by both
//! the main application and integration tests.

mod health;
pub mod response;
mod task;

use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::web;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{self, CredentialStore};
use crate::dtos;
use crate::repository::TaskRepository;

// Re-export handlers for route configuration
pub use health::health_check;
pub use task::{create_task, delete_task, get_task, list_tasks, update_task};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<TaskRepository>,
    pub credentials: Arc<CredentialStore>,
}

// =============================================================================
// OpenAPI Documentation
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        task::list_tasks,
        task::create_task,
        task::get_task,
        task::update_task,
        task::delete_task,
    ),
    components(schemas(
        dtos::NewTaskDto,
        dtos::UpdateTaskDto,
        dtos::TaskDto,
        crate::models::StatusKind,
    )),
    tags(
        (name = "health", description = "Liveness probe."),
        (name = "tasks", description = "Task operations. Every /tasks route requires HTTP Basic credentials from the server's static credential table."),
    ),
    info(
        title = "Task Management API",
        version = "1.0",
        description = "A simple Task Management API"
    )
)]
pub struct ApiDoc;

// =============================================================================
// Route Configuration
// =============================================================================

/// Configure all routes for the application.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/tasks")
                .wrap(from_fn(auth::require_basic_auth))
                .route("", web::get().to(list_tasks))
                .route("", web::post().to(create_task))
                .route("/{task_id}", web::get().to(get_task))
                .route("/{task_id}", web::put().to(update_task))
                .route("/{task_id}", web::delete().to(delete_task)),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}
