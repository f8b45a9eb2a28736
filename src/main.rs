use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use travillo::config::{LoggingSettings, Settings};
use travillo::core::{DestinationCatalog, HotelMatcher, VehicleMatcher};
use travillo::routes::{self, AppState, Latency};
use travillo::services::FeedbackService;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Travillo search service...");

    let vehicles = VehicleMatcher::with_default_catalog()
        .with_max_results(settings.matching.max_vehicle_results);
    let latency = Latency::from(&settings.matching);

    info!(
        "Simulated latency: vehicles {:?}, hotels {:?}, feedback {:?}",
        latency.vehicles, latency.hotels, latency.feedback
    );

    let app_state = AppState {
        vehicles: Arc::new(vehicles),
        hotels: Arc::new(HotelMatcher::with_default_catalog()),
        destinations: Arc::new(DestinationCatalog::with_default_catalog()),
        feedback: Arc::new(FeedbackService::new(settings.feedback.recipient.clone())),
        latency,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
