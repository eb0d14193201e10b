use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sizefit::config::Settings;
use sizefit::core::FitEvaluator;
use sizefit::routes::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting SizeFit service...");

    // Inverted or non-finite bands are rejected here, never at evaluation time
    let bands = match settings.band_table() {
        Ok(bands) => Arc::new(bands),
        Err(e) => {
            error!("Invalid fabric band configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    for (fabric, band) in bands.iter() {
        info!(
            "Fabric band {}: perfect [{}, {}], tight < {}, loose > {}",
            fabric,
            band.perfect_min(),
            band.perfect_max(),
            band.tight_threshold(),
            band.loose_threshold()
        );
    }

    let app_state = AppState {
        evaluator: FitEvaluator::new(bands),
        default_confidence: settings.evaluation.default_confidence.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
