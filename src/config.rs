use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use validator::Validate;
use crate::core::{distance::dms_to_decimal, MapOptions, TileLayer};
use crate::models::{Coordinate, ReferencePoint};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub reference: ReferenceSettings,
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    /// File path or http(s) URL of the JSON document
    #[serde(default = "default_dataset_source")]
    pub source: String,
    pub timeout_secs: Option<u64>,
}

impl DatasetSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            source: default_dataset_source(),
            timeout_secs: None,
        }
    }
}

fn default_dataset_source() -> String { "data/parcheggi.json".to_string() }

/// Home location; defaults to Casa Molin Bianco
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReferenceSettings {
    #[serde(default = "default_reference_name")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default = "default_reference_address")]
    pub address: String,
    #[serde(default = "default_reference_latitude")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(default = "default_reference_longitude")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl ReferenceSettings {
    pub fn to_reference_point(&self) -> ReferencePoint {
        ReferencePoint {
            name: self.name.clone(),
            address: self.address.clone(),
            coordinate: Coordinate::new(self.latitude, self.longitude),
        }
    }
}

impl Default for ReferenceSettings {
    fn default() -> Self {
        Self {
            name: default_reference_name(),
            address: default_reference_address(),
            latitude: default_reference_latitude(),
            longitude: default_reference_longitude(),
        }
    }
}

fn default_reference_name() -> String { "Casa Molin Bianco".to_string() }
fn default_reference_address() -> String { "Via Arturo Chiari 4".to_string() }
// 43°27'5.9"N 11°50'43.0"E
fn default_reference_latitude() -> f64 { dms_to_decimal(43.0, 27.0, 5.9) }
fn default_reference_longitude() -> f64 { dms_to_decimal(11.0, 50.0, 43.0) }

#[derive(Debug, Clone, Deserialize)]
pub struct MapSettings {
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,
    #[serde(default = "default_fit_padding")]
    pub fit_padding: f64,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl MapSettings {
    pub fn options(&self) -> MapOptions {
        MapOptions {
            default_zoom: self.default_zoom,
            focus_zoom: self.focus_zoom,
            fit_padding: self.fit_padding,
            list_limit: self.list_limit,
            tiles: TileLayer {
                url: self.tile_url.clone(),
                max_zoom: self.max_zoom,
                attribution: self.attribution.clone(),
            },
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            fit_padding: default_fit_padding(),
            list_limit: default_list_limit(),
            tile_url: default_tile_url(),
            max_zoom: default_max_zoom(),
            attribution: default_attribution(),
        }
    }
}

fn default_zoom() -> u8 { 13 }
fn default_focus_zoom() -> u8 { 17 }
fn default_fit_padding() -> f64 { 0.12 }
fn default_list_limit() -> usize { 200 }
fn default_tile_url() -> String { "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string() }
fn default_max_zoom() -> u8 { 19 }
fn default_attribution() -> String { "&copy; OpenStreetMap".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PARCHEGGI__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PARCHEGGI__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PARCHEGGI")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
