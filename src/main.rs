use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod api;
mod attendance;
mod auth;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod utils;

use config::Config;
use db::{AttendanceStore, MySqlAttendanceStore, init_db};

use crate::attendance::scheduler::spawn_periodic_derivation;
use crate::docs::ApiDoc;
use crate::routes::Limiters;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Gate attendance service"
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env().map_err(|e| io::Error::other(format!("{e:#}")))?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config)
        .await
        .map_err(|e| io::Error::other(format!("database init failed: {e:#}")))?;

    let store: Arc<dyn AttendanceStore> = Arc::new(MySqlAttendanceStore::new(pool.clone()));

    if config.derivation_interval_secs > 0 {
        spawn_periodic_derivation(
            store.clone(),
            Duration::from_secs(config.derivation_interval_secs),
        );
    }

    let limiters = Limiters::from_config(&config).map_err(io::Error::other)?;
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        let config = config.clone();
        let limiters = limiters.clone();

        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard matches JS/CSS assets
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(config.clone()))
            .app_data(Data::from(store.clone()))
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config, &limiters))
    })
    .bind(server_addr)?
    .run()
    .await
}
