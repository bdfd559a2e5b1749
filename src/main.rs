use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use hello_service::config::{LoggingSettings, Settings};
use hello_service::core::HelloMessageService;
use hello_service::routes::{self, AppState};
use hello_service::services::HelloMessageServiceImpl;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber; `RUST_LOG` wins over `logging.level`
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting hello service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // Wire port adapter -> use cases -> handlers
    let service: Arc<dyn HelloMessageService> = Arc::new(HelloMessageServiceImpl::new());
    let app_state = AppState::new(service);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let feature_name = settings.feature.name.clone();

    info!("Feature route mounted at /{}", feature_name);
    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(|cfg| routes::configure_routes(cfg, &feature_name))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
