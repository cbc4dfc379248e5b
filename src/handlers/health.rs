use actix_web::{HttpResponse, web};

use super::AppState;

#[utoipa::path(
    get,
    path = "/health",
    summary = "Health check",
    description = "Unauthenticated liveness probe. Reports the current number of stored tasks.",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "tasks": state.repo.len().await
    }))
}
