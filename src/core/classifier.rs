use serde::{Deserialize, Serialize};

/// Substrings identifying multi-level car parks
pub(crate) const MULTI_LEVEL_TERMS: &[&str] = &["multipiano"];

/// Substrings identifying open-air / street parking
pub(crate) const SURFACE_TERMS: &[&str] = &["raso", "parcheggio a raso", "strisce", "superficie"];

/// Substrings identifying private garages
pub(crate) const PRIVATE_TERMS: &[&str] = &["autorimessa", "privat"];

const STATION_TERMS: &[&str] = &["stazione"];

/// Display bucket derived from a free-text category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryBucket {
    MultiLevel,
    Surface,
    Private,
    Station,
    Unknown,
}

impl CategoryBucket {
    /// Marker color token
    pub fn color(self) -> &'static str {
        match self {
            Self::MultiLevel => "#005eff",
            Self::Surface => "#009d37",
            Self::Private => "#d90000",
            Self::Station => "#ff7f0e",
            Self::Unknown => "#6b7280",
        }
    }

    /// Legend caption
    pub fn label(self) -> &'static str {
        match self {
            Self::MultiLevel => "Multipiano",
            Self::Surface => "Superficie / Strisce",
            Self::Private => "Privato / Autorimessa",
            Self::Station => "Stazione",
            Self::Unknown => "Altro",
        }
    }
}

/// Lower-cased label, with a missing label treated as empty
#[inline]
pub(crate) fn normalize(label: Option<&str>) -> String {
    label.unwrap_or_default().to_lowercase()
}

#[inline]
pub(crate) fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

/// Classify a category label into its display bucket
///
/// Labels may match several vocabularies ("parcheggio a raso privato"), so
/// the first rule in this order wins: multi-level, surface, private, station.
pub fn classify(label: Option<&str>) -> CategoryBucket {
    let label = normalize(label);

    if contains_any(&label, MULTI_LEVEL_TERMS) {
        CategoryBucket::MultiLevel
    } else if contains_any(&label, SURFACE_TERMS) {
        CategoryBucket::Surface
    } else if contains_any(&label, PRIVATE_TERMS) {
        CategoryBucket::Private
    } else if contains_any(&label, STATION_TERMS) {
        CategoryBucket::Station
    } else {
        CategoryBucket::Unknown
    }
}
