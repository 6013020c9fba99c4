use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use orgnest::auth::session::SessionManager;
use orgnest::config::{EnvConfig, CONFIG};
use orgnest::db::postgres_service::PostgresService;
use orgnest::db::revocation_store::RevocationStore;
use orgnest::routes::configure_routes;
use orgnest::tasks::EmailQueue;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let revocation_store =
        RevocationStore::connect(&config.redis_url, config.auth.store_timeout_ms)
            .await
            .expect("Failed to connect to the revocation store");

    let session_manager = web::Data::new(
        SessionManager::new(
            Arc::clone(&postgres_service),
            revocation_store,
            &config.auth,
        )
        .expect("Failed to initialize SessionManager"),
    );

    let email_queue = web::Data::new(EmailQueue::start(config.mail.clone()));

    let _ = CONFIG.set(config);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(session_manager.clone())
            .app_data(email_queue.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
