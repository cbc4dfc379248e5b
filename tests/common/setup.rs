use std::sync::Arc;

use task_api::auth::CredentialStore;
use task_api::handlers::AppState;
use task_api::repository::TaskRepository;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// Credential spec handed to every test app.
pub const TEST_CREDENTIALS: &str = "admin:secret,alice:wonderland";

/// Build a fresh application state: empty repository, fixed credential table.
pub fn setup_test_app() -> AppState {
    AppState {
        repo: Arc::new(TaskRepository::new()),
        credentials: Arc::new(
            CredentialStore::from_spec(TEST_CREDENTIALS).expect("test credential spec is valid"),
        ),
    }
}
