//! Starship catalog types

use serde::{Deserialize, Serialize};

/// A starship as served by the catalog.
///
/// Created from a listing entry with only `id`, `name` and `source_url`; the
/// manufacturer is attached once, in place, during enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    /// Upstream identifier (`uid`). Never empty inside an aggregate set.
    pub id: String,
    pub name: Option<String>,
    /// Canonical reference URL from the listing. Informational only.
    pub source_url: Option<String>,
    pub manufacturer: Option<String>,
}

impl Starship {
    /// Build a partial starship from a listing entry.
    pub fn listed(
        id: impl Into<String>,
        name: Option<String>,
        source_url: Option<String>,
    ) -> Self {
        Self { id: id.into(), name, source_url, manufacturer: None }
    }

    /// Attach a manufacturer. Blank values are ignored so an existing
    /// manufacturer is never replaced by an empty one.
    ///
    /// Returns whether the value was applied.
    pub fn set_manufacturer(&mut self, manufacturer: Option<&str>) -> bool {
        match manufacturer {
            Some(value) if !value.trim().is_empty() => {
                self.manufacturer = Some(value.to_string());
                true
            }
            _ => false,
        }
    }

    /// Exact, case-insensitive manufacturer match. Starships without a
    /// manufacturer never match.
    pub fn is_made_by(&self, manufacturer: &str) -> bool {
        self.manufacturer
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == manufacturer.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_wing() -> Starship {
        Starship::listed(
            "12",
            Some("X-wing".to_string()),
            Some("https://www.swapi.tech/api/starships/12".to_string()),
        )
    }

    #[test]
    fn listed_starship_has_no_manufacturer() {
        let ship = x_wing();
        assert_eq!(ship.id, "12");
        assert_eq!(ship.name.as_deref(), Some("X-wing"));
        assert!(ship.manufacturer.is_none());
    }

    #[test]
    fn blank_manufacturer_is_ignored() {
        let mut ship = x_wing();
        assert!(ship.set_manufacturer(Some("Incom Corporation")));
        assert!(!ship.set_manufacturer(Some("")));
        assert!(!ship.set_manufacturer(Some("   ")));
        assert!(!ship.set_manufacturer(None));
        assert_eq!(ship.manufacturer.as_deref(), Some("Incom Corporation"));
    }

    #[test]
    fn manufacturer_match_is_exact_and_case_insensitive() {
        let mut ship = x_wing();
        ship.set_manufacturer(Some("Incom Corporation"));

        assert!(ship.is_made_by("incom corporation"));
        assert!(ship.is_made_by("INCOM CORPORATION"));
        assert!(!ship.is_made_by("Incom"));
        assert!(!x_wing().is_made_by("Incom Corporation"));
    }
}
