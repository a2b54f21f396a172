// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, ReferencePoint, RawRecord, LocationRecord, Dataset, FilterState};
pub use requests::MapQuery;
pub use responses::{HealthResponse, ErrorResponse, ParkingEntry, ParkingsResponse};
