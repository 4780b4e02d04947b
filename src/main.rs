use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::RwLock;

use hrm_tracker::config::Config;
use hrm_tracker::docs::ApiDoc;
use hrm_tracker::routes;
use hrm_tracker::state::{AppState, StateEvent};
use hrm_tracker::store::FileStore;
use hrm_tracker::utils::sample_data::sample_data;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

/// Log every state change; this is the view-side listener of the state.
fn log_event(event: &StateEvent) {
    match event {
        StateEvent::EmployeeDeleted {
            id,
            letters_removed,
            penalties_removed,
        } => info!(
            employee_id = %id,
            letters_removed,
            penalties_removed,
            "Employee deleted"
        ),
        other => info!(event = ?other, "State changed"),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

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

    info!(addr = %config.server_addr, data_dir = %config.data_dir, "Server starting...");

    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir))?;
    let mut state = AppState::load(Box::new(store)).context("cannot load stored records")?;
    state.subscribe(Box::new(log_event));

    if config.seed_sample_data && state.seed_if_empty(sample_data()) {
        info!("Sample data loaded");
    }

    let state = Data::new(RwLock::new(state));
    let limiter = routes::build_limiter(config.rate_api_per_min)?;
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, &config, limiter.clone()))
    })
    .bind(&server_addr)
    .with_context(|| format!("cannot bind {server_addr}"))?
    .run()
    .await
    .context("server terminated with an error")
}
