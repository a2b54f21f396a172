use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use parcheggi_map::config::Settings;
use parcheggi_map::core::ParkingMap;
use parcheggi_map::routes::{self, parkings::AppState};
use parcheggi_map::services::{DatasetLoader, DatasetSource};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use validator::Validate;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Parcheggi Map service...");

    if let Err(e) = settings.reference.validate() {
        error!("Invalid reference point: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
    }

    let reference = Arc::new(settings.reference.to_reference_point());
    let options = settings.map.options();

    info!(
        "Reference point: {} ({:.6}, {:.6})",
        reference.name, reference.coordinate.latitude, reference.coordinate.longitude
    );

    // One-shot dataset load; a failure leaves only the reference point on the map
    let source = DatasetSource::parse(&settings.dataset.source);
    let loader = DatasetLoader::new(source, settings.dataset.timeout())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let map = match loader.load(reference.coordinate).await {
        Ok(dataset) => {
            info!(
                "Loaded {} parking records from {} (load {})",
                dataset.len(),
                loader.source(),
                dataset.load_id
            );
            if dataset.skipped > 0 {
                warn!("{} dataset entries were skipped", dataset.skipped);
            }
            ParkingMap::new(reference, Arc::new(dataset), options)
        }
        Err(e) => {
            error!("Failed to load dataset from {}: {}", loader.source(), e);
            ParkingMap::unavailable(reference, options)
        }
    };

    let app_state = AppState { map: Arc::new(map) };

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
