use geo::{BoundingRect, MultiPoint, Point, Rect};
use serde::Serialize;
use crate::models::Coordinate;

/// Viewport request for the map display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewportCommand {
    /// Fit the map to the rectangle spanned by the two corners
    FitBounds {
        #[serde(rename = "southWest")]
        south_west: Coordinate,
        #[serde(rename = "northEast")]
        north_east: Coordinate,
    },
    /// Center the map on a point at a fixed zoom
    CenterOn { center: Coordinate, zoom: u8 },
}

/// Plan the viewport for a set of visible coordinates
///
/// The reference point is always part of the fitted area. With nothing
/// visible the map falls back to centering on the reference point.
pub fn plan_viewport(
    visible: &[Coordinate],
    reference: Coordinate,
    padding: f64,
    fallback_zoom: u8,
) -> ViewportCommand {
    if visible.is_empty() {
        return ViewportCommand::CenterOn { center: reference, zoom: fallback_zoom };
    }

    let points: MultiPoint<f64> = visible
        .iter()
        .chain(std::iter::once(&reference))
        .map(|c| Point::from(*c))
        .collect();

    match points.bounding_rect() {
        Some(rect) => fit_bounds(pad(rect, padding)),
        None => ViewportCommand::CenterOn { center: reference, zoom: fallback_zoom },
    }
}

/// Grow each side of the rectangle by `ratio` times its span on that axis
fn pad(rect: Rect<f64>, ratio: f64) -> Rect<f64> {
    let lat_buffer = rect.height() * ratio;
    let lon_buffer = rect.width() * ratio;

    Rect::new(
        geo::coord! { x: rect.min().x - lon_buffer, y: rect.min().y - lat_buffer },
        geo::coord! { x: rect.max().x + lon_buffer, y: rect.max().y + lat_buffer },
    )
}

fn fit_bounds(rect: Rect<f64>) -> ViewportCommand {
    ViewportCommand::FitBounds {
        south_west: Coordinate::new(rect.min().y, rect.min().x),
        north_east: Coordinate::new(rect.max().y, rect.max().x),
    }
}
