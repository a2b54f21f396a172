use crate::core::classifier::{contains_any, normalize, MULTI_LEVEL_TERMS, SURFACE_TERMS};
use crate::models::{FilterState, LocationRecord};

/// Private filter vocabulary
///
/// Broader than the classifier's private rule: the generic "park" also
/// matches, so loosely labelled garages stay reachable from the toggle.
const PRIVATE_FILTER_TERMS: &[&str] = &["privat", "autorimessa", "park"];

/// Check whether a record with this label is visible under the filters
///
/// Only the three toggles exist, so station-only labels are never visible.
#[inline]
pub fn is_visible(label: Option<&str>, filters: &FilterState) -> bool {
    let label = normalize(label);

    (filters.multipiano && contains_any(&label, MULTI_LEVEL_TERMS))
        || (filters.superficie && contains_any(&label, SURFACE_TERMS))
        || (filters.privato && contains_any(&label, PRIVATE_FILTER_TERMS))
}

/// Records visible under the filters, in dataset order
pub fn visible_records<'a>(
    records: &'a [LocationRecord],
    filters: &FilterState,
) -> Vec<&'a LocationRecord> {
    records
        .iter()
        .filter(|record| is_visible(record.category_label(), filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::{classify, CategoryBucket};
    use crate::models::Coordinate;

    fn create_test_record(name: &str, category: &str) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            category: Some(category.to_string()),
            coordinate: Coordinate::new(43.46, 11.88),
            precomputed_distance_km: None,
            distance_km: 1.0,
            address: None,
            hours: None,
            source_url: None,
        }
    }

    #[test]
    fn test_each_toggle() {
        let only_multi = FilterState::new(true, false, false);
        let only_surface = FilterState::new(false, true, false);

        assert!(is_visible(Some("Parcheggio Multipiano Nord"), &only_multi));
        assert!(!is_visible(Some("Parcheggio Multipiano Nord"), &only_surface));
        assert!(is_visible(Some("Parcheggio a raso"), &only_surface));
        assert!(is_visible(Some("Superficie, strisce blu"), &only_surface));
    }

    #[test]
    fn test_private_filter_matches_park() {
        let only_private = FilterState::new(false, false, true);

        assert!(is_visible(Some("Park & Ride"), &only_private));
        assert_eq!(classify(Some("Park & Ride")), CategoryBucket::Unknown);
        // Italian "parcheggio" has no "park" in it
        assert!(!is_visible(Some("Area parcheggio"), &only_private));
        assert!(is_visible(Some("Garage privato"), &only_private));
    }

    #[test]
    fn test_no_filters_hides_everything() {
        let none = FilterState::none();
        for label in ["Parcheggio Multipiano", "raso", "Autorimessa", "Park & Ride", ""] {
            assert!(!is_visible(Some(label), &none), "{} should be hidden", label);
        }
        assert!(!is_visible(None, &none));
    }

    #[test]
    fn test_station_never_visible() {
        assert!(!is_visible(Some("Stazione FS"), &FilterState::all()));
        assert!(!is_visible(None, &FilterState::all()));
    }

    #[test]
    fn test_visible_records_is_idempotent() {
        let records = vec![
            create_test_record("A", "Multipiano"),
            create_test_record("B", "Stazione FS"),
            create_test_record("C", "Strisce blu"),
        ];
        let filters = FilterState::new(true, true, false);

        let first: Vec<&str> = visible_records(&records, &filters).iter().map(|r| r.name.as_str()).collect();
        let second: Vec<&str> = visible_records(&records, &filters).iter().map(|r| r.name.as_str()).collect();

        assert_eq!(first, vec!["A", "C"]);
        assert_eq!(first, second);
        assert_eq!(records.len(), 3);
    }
}
