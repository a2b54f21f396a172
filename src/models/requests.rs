use serde::{Deserialize, Serialize};
use crate::models::domain::FilterState;

/// Query string of the map endpoint
///
/// An omitted toggle counts as checked, matching the initial page state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapQuery {
    #[serde(default)]
    pub multipiano: Option<bool>,
    #[serde(default)]
    pub superficie: Option<bool>,
    #[serde(default)]
    pub privato: Option<bool>,
}

impl MapQuery {
    pub fn filters(&self) -> FilterState {
        FilterState {
            multipiano: self.multipiano.unwrap_or(true),
            superficie: self.superficie.unwrap_or(true),
            privato: self.privato.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_toggles_default_to_checked() {
        let query = MapQuery { privato: Some(false), ..Default::default() };
        assert_eq!(query.filters(), FilterState::new(true, true, false));
    }
}
