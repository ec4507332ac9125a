use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use modulehub::config::{EnvConfig, CONFIG};
use modulehub::db::postgres_service::PostgresService;
use modulehub::notify::Notifier;
use modulehub::routes::configure_routes;
use modulehub::validation::TitleValidator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let validator = TitleValidator::new(&config.banned_terms);
    let notifier = Notifier::spawn();

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(validator.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
