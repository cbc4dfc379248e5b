use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use task_api::dtos::TaskDto;

use super::builders::{task_json, test_auth};

/// POST /tasks, assert 201, return the created task.
pub async fn create_task_ok<S, B>(
    app: &S,
    description: &str,
    due_date: &str,
    status: &str,
) -> TaskDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/tasks")
        .insert_header(test_auth())
        .set_json(task_json(description, due_date, status))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::CREATED,
        "POST /tasks should return 201 Created"
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /tasks/{id}, assert 200, return the task.
pub async fn get_task_ok<S, B>(app: &S, task_id: uuid::Uuid) -> TaskDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/tasks/{}", task_id))
        .insert_header(test_auth())
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET /tasks/{} returned {}",
        task_id,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /tasks, assert 200, return all tasks.
pub async fn list_tasks_ok<S, B>(app: &S) -> Vec<TaskDto>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri("/tasks")
        .insert_header(test_auth())
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    actix_web::test::read_body_json(resp).await
}
