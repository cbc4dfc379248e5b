use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde_json::json;

use super::setup::{TEST_PASSWORD, TEST_USER};

/// Helper to create a task JSON payload
pub fn task_json(description: &str, due_date: &str, status: &str) -> serde_json::Value {
    json!({
        "description": description,
        "due_date": due_date,
        "status": status
    })
}

/// `Authorization` header tuple for the given credentials.
pub fn basic_auth(user: &str, password: &str) -> (&'static str, String) {
    let token = BASE64_STANDARD.encode(format!("{}:{}", user, password));
    ("Authorization", format!("Basic {}", token))
}

/// Header tuple for the fixed test user.
pub fn test_auth() -> (&'static str, String) {
    basic_auth(TEST_USER, TEST_PASSWORD)
}
