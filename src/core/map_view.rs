use serde::Serialize;
use std::sync::Arc;
use crate::core::{
    classifier::{classify, CategoryBucket},
    filters::visible_records,
    viewport::{plan_viewport, ViewportCommand},
};
use crate::models::{Coordinate, Dataset, FilterState, LocationRecord, ReferencePoint};

/// Shown in the quick list when no record passes the filters
pub const EMPTY_LIST_MESSAGE: &str = "Nessun parcheggio visibile con i filtri selezionati.";

/// Shown when the dataset could not be loaded
pub const LOAD_FAILURE_NOTICE: &str =
    "Impossibile caricare i dati dei parcheggi. Controlla che la sorgente dati esista e sia raggiungibile.";

const MISSING_HOURS: &str = "N/D";

/// Base tile layer the map display draws under the markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url: String,
    #[serde(rename = "maxZoom")]
    pub max_zoom: u8,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            attribution: "&copy; OpenStreetMap".to_string(),
        }
    }
}

/// Presentation knobs for the map view
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Zoom used when centering on the reference point
    pub default_zoom: u8,
    /// Zoom used when focusing a single record from the quick list
    pub focus_zoom: u8,
    /// Ratio each side of the fitted bounds is grown by
    pub fit_padding: f64,
    /// Maximum number of quick-list entries
    pub list_limit: usize,
    pub tiles: TileLayer,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            default_zoom: 13,
            focus_zoom: 17,
            fit_padding: 0.12,
            list_limit: 200,
            tiles: TileLayer::default(),
        }
    }
}

/// Popup content of a placed marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub category: String,
    pub address: Option<String>,
    pub hours: String,
    pub distance: String,
    #[serde(rename = "sourceUrl")]
    pub source_url: Option<String>,
}

/// Marker placement request for one visible record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub coordinate: Coordinate,
    pub bucket: CategoryBucket,
    pub color: &'static str,
    pub popup: Popup,
}

/// Quick-list entry for one visible record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub text: String,
    pub focus: ViewportCommand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Option<&'static str>,
    pub symbol: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewCounts {
    pub total: usize,
    pub visible: usize,
    pub skipped: usize,
}

/// Everything the map display needs for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub filters: FilterState,
    pub tiles: TileLayer,
    pub reference: ReferencePoint,
    pub placements: Vec<Placement>,
    pub viewport: ViewportCommand,
    pub list: Vec<ListEntry>,
    #[serde(rename = "emptyMessage")]
    pub empty_message: Option<&'static str>,
    pub legend: Vec<LegendEntry>,
    pub notice: Option<&'static str>,
    pub counts: ViewCounts,
}

/// Map legend: the three filterable buckets plus the reference marker
pub fn legend() -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = [
        CategoryBucket::MultiLevel,
        CategoryBucket::Surface,
        CategoryBucket::Private,
    ]
    .into_iter()
    .map(|bucket| LegendEntry {
        label: bucket.label(),
        color: Some(bucket.color()),
        symbol: None,
    })
    .collect();

    entries.push(LegendEntry {
        label: "Casa",
        color: None,
        symbol: Some("★"),
    });
    entries
}

/// Builds map views over one loaded dataset
///
/// When the load failed the map shows only the reference point and a notice.
#[derive(Debug, Clone)]
pub struct ParkingMap {
    reference: Arc<ReferencePoint>,
    dataset: Option<Arc<Dataset>>,
    options: MapOptions,
}

impl ParkingMap {
    pub fn new(reference: Arc<ReferencePoint>, dataset: Arc<Dataset>, options: MapOptions) -> Self {
        Self {
            reference,
            dataset: Some(dataset),
            options,
        }
    }

    /// Map for a session whose dataset failed to load
    pub fn unavailable(reference: Arc<ReferencePoint>, options: MapOptions) -> Self {
        Self {
            reference,
            dataset: None,
            options,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_deref()
    }

    /// Compute the view for a filter selection
    ///
    /// Read-only over the dataset: the same filters always give the same view.
    pub fn render(&self, filters: &FilterState) -> MapView {
        let reference = self.reference.coordinate;

        let Some(dataset) = self.dataset.as_deref() else {
            return MapView {
                filters: *filters,
                tiles: self.options.tiles.clone(),
                reference: (*self.reference).clone(),
                placements: Vec::new(),
                viewport: ViewportCommand::CenterOn {
                    center: reference,
                    zoom: self.options.default_zoom,
                },
                list: Vec::new(),
                empty_message: None,
                legend: legend(),
                notice: Some(LOAD_FAILURE_NOTICE),
                counts: ViewCounts { total: 0, visible: 0, skipped: 0 },
            };
        };

        let visible = visible_records(&dataset.records, filters);

        let placements: Vec<Placement> = visible.iter().map(|record| self.place(record)).collect();

        let coordinates: Vec<Coordinate> = visible.iter().map(|record| record.coordinate).collect();
        let viewport = plan_viewport(
            &coordinates,
            reference,
            self.options.fit_padding,
            self.options.default_zoom,
        );

        let list: Vec<ListEntry> = visible
            .iter()
            .take(self.options.list_limit)
            .map(|record| self.list_entry(record))
            .collect();

        tracing::debug!(
            "Rendered {} of {} records for filters {:?}",
            visible.len(),
            dataset.len(),
            filters
        );

        MapView {
            filters: *filters,
            tiles: self.options.tiles.clone(),
            reference: (*self.reference).clone(),
            empty_message: visible.is_empty().then_some(EMPTY_LIST_MESSAGE),
            counts: ViewCounts {
                total: dataset.len(),
                visible: visible.len(),
                skipped: dataset.skipped,
            },
            placements,
            viewport,
            list,
            legend: legend(),
            notice: None,
        }
    }

    fn place(&self, record: &LocationRecord) -> Placement {
        let bucket = classify(record.category_label());

        Placement {
            coordinate: record.coordinate,
            bucket,
            color: bucket.color(),
            popup: Popup {
                title: record.name.clone(),
                category: record.category.clone().unwrap_or_default(),
                address: record.address.clone().filter(|a| !a.is_empty()),
                hours: record
                    .hours
                    .clone()
                    .filter(|h| !h.is_empty())
                    .unwrap_or_else(|| MISSING_HOURS.to_string()),
                distance: format_distance(record.distance_km),
                source_url: record.source_url.clone().filter(|s| !s.is_empty()),
            },
        }
    }

    fn list_entry(&self, record: &LocationRecord) -> ListEntry {
        ListEntry {
            text: format!(
                "{} - {} - {}",
                record.name,
                record.category_label().unwrap_or_default(),
                format_distance(record.distance_km)
            ),
            focus: ViewportCommand::CenterOn {
                center: record.coordinate,
                zoom: self.options.focus_zoom,
            },
        }
    }
}

/// Kilometers with two decimals
pub fn format_distance(km: f64) -> String {
    format!("{:.2} km", km)
}
