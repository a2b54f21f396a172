//! Parcheggi Map - parking locations on a map, filtered by category
//!
//! This library computes everything a map display needs: distances from a
//! fixed home location, a display bucket per category label, and the set of
//! records visible under the current checkbox selection.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ParkingMap, MapOptions, MapView, CategoryBucket, classify, is_visible, haversine_distance};
pub use crate::models::{Coordinate, ReferencePoint, LocationRecord, Dataset, FilterState};
