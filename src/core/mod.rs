// Core algorithm exports
pub mod classifier;
pub mod distance;
pub mod filters;
pub mod map_view;
pub mod viewport;

pub use classifier::{classify, CategoryBucket};
pub use distance::{haversine_distance, resolve_distance, dms_to_decimal};
pub use filters::{is_visible, visible_records};
pub use map_view::{ParkingMap, MapOptions, TileLayer, MapView, Placement, Popup, ListEntry, LegendEntry, legend};
pub use viewport::{plan_viewport, ViewportCommand};
