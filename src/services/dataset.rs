use crate::core::distance::resolve_distance;
use crate::models::{Coordinate, Dataset, LocationRecord, RawRecord};
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Dataset source returned status {0}")]
    Status(u16),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dataset document must be a JSON array")]
    NotAnArray,
}

/// Where the dataset document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Http(String),
}

impl DatasetSource {
    /// `http://` and `https://` sources are fetched, anything else is a path
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Http(source.to_string())
        } else {
            Self::File(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{}", url),
        }
    }
}

/// One-shot dataset loader
///
/// Reads the JSON document once and turns it into display-ready records,
/// with distances measured from the reference point.
pub struct DatasetLoader {
    source: DatasetSource,
    client: Client,
}

impl DatasetLoader {
    pub fn new(source: DatasetSource, timeout: Duration) -> Result<Self, DatasetError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { source, client })
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Load and convert the dataset
    pub async fn load(&self, reference: Coordinate) -> Result<Dataset, DatasetError> {
        let body = match &self.source {
            DatasetSource::File(path) => {
                tracing::debug!("Reading dataset from file: {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
            DatasetSource::Http(url) => {
                tracing::debug!("Fetching dataset from: {}", url);
                let response = self.client.get(url).send().await?;

                if !response.status().is_success() {
                    return Err(DatasetError::Status(response.status().as_u16()));
                }

                response.text().await?
            }
        };

        parse_dataset(&body, reference)
    }
}

/// Parse a dataset document
///
/// Entries without a usable coordinate are skipped and counted; the rest of
/// the document is still processed.
pub fn parse_dataset(document: &str, reference: Coordinate) -> Result<Dataset, DatasetError> {
    let entries = match serde_json::from_str::<Value>(document)? {
        Value::Array(entries) => entries,
        _ => return Err(DatasetError::NotAnArray),
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0;

    for (index, entry) in entries.into_iter().enumerate() {
        match to_record(entry, reference) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!("Skipping dataset entry {}: {}", index, reason);
                skipped += 1;
            }
        }
    }

    tracing::info!("Parsed {} parking records ({} skipped)", records.len(), skipped);

    Ok(Dataset::new(records, skipped))
}

/// Only a non-object entry or a missing/non-numeric `lat`/`lon` is rejected
fn to_record(entry: Value, reference: Coordinate) -> Result<LocationRecord, &'static str> {
    if !entry.is_object() {
        return Err("not a JSON object");
    }
    let raw: RawRecord = serde_json::from_value(entry).map_err(|_| "unreadable entry")?;
    let coordinate = raw.coordinate().ok_or("missing or non-numeric lat/lon")?;
    let precomputed = raw.precomputed_distance();

    Ok(LocationRecord {
        distance_km: resolve_distance(precomputed, reference, coordinate),
        precomputed_distance_km: precomputed,
        name: raw.name.unwrap_or_default(),
        category: raw.tipo,
        coordinate,
        address: raw.address,
        hours: raw.orari,
        source_url: raw.sito,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::haversine_distance;

    const HOME: Coordinate = Coordinate::new(43.45, 11.84);

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            DatasetSource::parse("https://example.org/data.json"),
            DatasetSource::Http("https://example.org/data.json".to_string())
        );
        assert_eq!(
            DatasetSource::parse("data/parcheggi.json"),
            DatasetSource::File(PathBuf::from("data/parcheggi.json"))
        );
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let document = r#"[
            {"name": "Ok", "tipo": "Multipiano", "lat": 43.46, "lon": 11.88},
            {"name": "No lon", "tipo": "raso", "lat": 43.46},
            {"name": "Null lat", "tipo": "raso", "lat": null, "lon": 11.88},
            {"name": "String lat", "tipo": "raso", "lat": "43.4", "lon": 11.88},
            42
        ]"#;

        let dataset = parse_dataset(document, HOME).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.skipped, 4);
        assert_eq!(dataset.records[0].name, "Ok");
    }

    #[test]
    fn test_wrongly_typed_optional_fields_keep_the_entry() {
        let document = r#"[
            {"name": "Pietri", "tipo": "Parcheggio multipiano", "lat": 43.4681, "lon": 11.8842, "orari": 24},
            {"name": 7, "tipo": "Parcheggio a raso", "lat": 43.46, "lon": 11.87, "sito": {"url": "x"}}
        ]"#;

        let dataset = parse_dataset(document, HOME).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped, 0);
        assert_eq!(dataset.records[0].name, "Pietri");
        assert_eq!(dataset.records[0].hours, None);
        assert_eq!(dataset.records[1].name, "");
        assert_eq!(dataset.records[1].category.as_deref(), Some("Parcheggio a raso"));
        assert_eq!(dataset.records[1].source_url, None);
    }

    #[test]
    fn test_negative_precomputed_distance_is_recomputed() {
        let document = r#"[{"name": "A", "tipo": "raso", "lat": 43.46, "lon": 11.88, "distanza_km": -1}]"#;

        let dataset = parse_dataset(document, HOME).unwrap();
        let record = &dataset.records[0];

        assert_eq!(record.precomputed_distance_km, Some(-1.0));
        assert_eq!(record.distance_km, haversine_distance(HOME, record.coordinate));
        assert!(record.distance_km > 0.0);
    }

    #[test]
    fn test_valid_precomputed_distance_wins() {
        let document = r#"[{"name": "A", "tipo": "raso", "lat": 43.46, "lon": 11.88, "distanza_km": 0.7}]"#;

        let dataset = parse_dataset(document, HOME).unwrap();
        assert_eq!(dataset.records[0].distance_km, 0.7);
    }

    #[test]
    fn test_document_must_be_array() {
        assert!(matches!(parse_dataset(r#"{"name": "A"}"#, HOME), Err(DatasetError::NotAnArray)));
        assert!(matches!(parse_dataset("not json", HOME), Err(DatasetError::Parse(_))));
    }
}
