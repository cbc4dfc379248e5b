use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use task_api::auth::CredentialStore;
use task_api::config::Config;
use task_api::handlers::{self, AppState};
use task_api::repository::TaskRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let credentials = match CredentialStore::from_spec(&config.user_credentials) {
        Ok(store) => store,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        repo: Arc::new(TaskRepository::new()),
        credentials: Arc::new(credentials),
    };

    let port = config.port;
    log::info!("starting HTTP server at http://0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(handlers::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
