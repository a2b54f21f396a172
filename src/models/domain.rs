use serde::{Deserialize, Deserializer, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

/// The fixed home location all distances are measured from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

/// Raw dataset entry, as found in the JSON document
///
/// Every field is read leniently: a value of the wrong JSON type counts as
/// absent, so only a missing or non-numeric `lat`/`lon` makes an entry
/// unusable. `distanza_km` stays untyped because sources sometimes carry
/// strings or nulls there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub distanza_km: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub orari: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sito: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

impl RawRecord {
    /// Coordinate of the entry, if both components are present
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    /// Precomputed distance, only when the source supplied a JSON number
    pub fn precomputed_distance(&self) -> Option<f64> {
        self.distanza_km.as_ref().and_then(serde_json::Value::as_f64)
    }
}

/// A parking location ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    /// Free-text category label (`tipo` in the source data)
    pub category: Option<String>,
    pub coordinate: Coordinate,
    #[serde(rename = "precomputedDistanceKm")]
    pub precomputed_distance_km: Option<f64>,
    /// Distance from the reference point, resolved once at load time
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub address: Option<String>,
    /// Opening hours / tariffs text
    pub hours: Option<String>,
    #[serde(rename = "sourceUrl")]
    pub source_url: Option<String>,
}

impl LocationRecord {
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// One load cycle of the dataset
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    #[serde(rename = "loadId")]
    pub load_id: uuid::Uuid,
    #[serde(rename = "loadedAt")]
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub records: Vec<LocationRecord>,
    /// Entries dropped because they lacked a usable coordinate
    pub skipped: usize,
}

impl Dataset {
    pub fn new(records: Vec<LocationRecord>, skipped: usize) -> Self {
        Self {
            load_id: uuid::Uuid::new_v4(),
            loaded_at: chrono::Utc::now(),
            records,
            skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Current on/off state of the three visibility toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub multipiano: bool,
    pub superficie: bool,
    pub privato: bool,
}

impl FilterState {
    pub const fn new(multipiano: bool, superficie: bool, privato: bool) -> Self {
        Self { multipiano, superficie, privato }
    }

    /// Every toggle checked
    pub const fn all() -> Self {
        Self::new(true, true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_distance_only_from_numbers() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"name":"A","tipo":"x","lat":43.0,"lon":11.0,"distanza_km":"1.5"}"#,
        )
        .unwrap();
        assert_eq!(raw.precomputed_distance(), None);

        let raw: RawRecord = serde_json::from_str(r#"{"lat":43.0,"lon":11.0,"distanza_km":2.25}"#).unwrap();
        assert_eq!(raw.precomputed_distance(), Some(2.25));
    }

    #[test]
    fn test_raw_record_missing_coordinate() {
        let raw: RawRecord = serde_json::from_str(r#"{"name":"A","lat":43.0}"#).unwrap();
        assert!(raw.coordinate().is_none());
    }

    #[test]
    fn test_raw_record_wrong_types_count_as_absent() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"name":7,"tipo":["x"],"lat":43.46,"lon":11.87,"orari":24,"sito":false}"#,
        )
        .unwrap();
        assert_eq!(raw.name, None);
        assert_eq!(raw.tipo, None);
        assert_eq!(raw.orari, None);
        assert_eq!(raw.sito, None);
        assert_eq!(raw.coordinate(), Some(Coordinate::new(43.46, 11.87)));

        let raw: RawRecord = serde_json::from_str(r#"{"lat":"43.4","lon":11.87}"#).unwrap();
        assert!(raw.coordinate().is_none());
    }
}
