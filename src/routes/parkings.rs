use actix_web::{web, HttpResponse, Responder};
use crate::core::{classify, legend, ParkingMap};
use crate::models::{HealthResponse, MapQuery, ParkingEntry, ParkingsResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub map: Arc<ParkingMap>,
}

/// Configure all parking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/map", web::get().to(map_view))
        .route("/legend", web::get().to(map_legend))
        .route("/parkings", web::get().to(list_parkings));
}

/// Health check endpoint
///
/// Reports "degraded" when the dataset failed to load at startup.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let dataset = state.map.dataset();

    let status = if dataset.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        records: dataset.map_or(0, |d| d.len()),
        load_id: dataset.map(|d| d.load_id),
    })
}

/// Map view endpoint
///
/// GET /api/v1/map?multipiano=true&superficie=false&privato=true
///
/// Omitted toggles count as checked.
async fn map_view(
    state: web::Data<AppState>,
    query: web::Query<MapQuery>,
) -> impl Responder {
    let filters = query.filters();

    tracing::debug!("Rendering map view for filters {:?}", filters);

    HttpResponse::Ok().json(state.map.render(&filters))
}

async fn map_legend() -> impl Responder {
    HttpResponse::Ok().json(legend())
}

/// All loaded records with their bucket, unfiltered
async fn list_parkings(state: web::Data<AppState>) -> impl Responder {
    let Some(dataset) = state.map.dataset() else {
        return HttpResponse::Ok().json(ParkingsResponse {
            parkings: Vec::new(),
            total: 0,
            skipped: 0,
        });
    };

    let parkings = dataset
        .records
        .iter()
        .map(|record| {
            let bucket = classify(record.category_label());
            ParkingEntry {
                record: record.clone(),
                bucket,
                color: bucket.color(),
            }
        })
        .collect();

    HttpResponse::Ok().json(ParkingsResponse {
        parkings,
        total: dataset.len(),
        skipped: dataset.skipped,
    })
}
