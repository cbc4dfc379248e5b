#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod setup;

pub use assertions::*;
pub use builders::*;
pub use setup::*;

/// Build an actix test service wired exactly like the production app:
/// path normalization plus the full route configuration (auth gate included).
macro_rules! test_service {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(task_api::handlers::configure_routes),
        )
        .await
    };
}
