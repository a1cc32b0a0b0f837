//! Hero identity records.
//!
//! An identity describes *how* a hero wants to play rather than what it counters: tempo,
//! playstyle, formation, pressure and win condition, plus free-form `provides`, `needs` and
//! `dislikes` tags.
//!
//! # JSON Layout
//!
//! ```json
//! {
//!   "id": "tracer",
//!   "name": "Tracer",
//!   "role": "dps",
//!   "tempo": "fast",
//!   "playstyle": { "primary": "dive", "subtypes": ["flank"] },
//!   "formation": "split",
//!   "pressure": "burst",
//!   "win_condition": "mid-fight",
//!   "provides": ["flank-pressure", "follow-up"],
//!   "needs": ["engage-window"],
//!   "dislikes": ["barriers"],
//!   "map_sensitivity": "medium",
//!   "map_preferences": { "favors": ["flank-heavy"], "avoids": ["long-sightlines"] }
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::attributes::{
    Formation, MapSensitivity, MapTrait, PlaystylePrimary, PlaystyleSubtype, PressureType, Tempo,
    WinCondition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityRole {
    #[display("tank")]
    Tank,
    #[display("dps")]
    Dps,
    #[display("support")]
    Support,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playstyle {
    pub primary: PlaystylePrimary,
    #[serde(default)]
    pub subtypes: Vec<PlaystyleSubtype>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPreferences {
    #[serde(default)]
    pub favors: Vec<MapTrait>,
    #[serde(default)]
    pub avoids: Vec<MapTrait>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroIdentity {
    /// Stable key; rosters tell heroes apart by id.
    pub id: String,
    pub name: String,
    pub role: IdentityRole,
    pub tempo: Tempo,
    pub playstyle: Playstyle,
    pub formation: Formation,
    pub pressure: PressureType,
    pub win_condition: WinCondition,
    #[serde(default)]
    pub provides: Vec<String>,
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_sensitivity: Option<MapSensitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_preferences: Option<MapPreferences>,
}

/// Duplicate id in an identity table.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("duplicate hero identity id '{id}'")]
pub struct DuplicateIdentityError {
    pub id: String,
}

/// On-disk list of identities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityTable {
    pub heroes: Vec<HeroIdentity>,
}

impl IdentityTable {
    /// Rejects tables where two identities share an id.
    pub fn validate(&self) -> Result<(), DuplicateIdentityError> {
        let mut seen = HashSet::new();
        for hero in &self.heroes {
            if !seen.insert(hero.id.as_str()) {
                return Err(DuplicateIdentityError {
                    id: hero.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Looks up an identity by id, falling back to a case-insensitive name match.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&HeroIdentity> {
        self.heroes
            .iter()
            .find(|h| h.id == key)
            .or_else(|| self.heroes.iter().find(|h| h.name.eq_ignore_ascii_case(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_deserialize_optional_fields() {
        let hero = fixtures::tracer();
        assert_eq!(hero.role, IdentityRole::Dps);
        assert_eq!(hero.win_condition, WinCondition::MidFight);
        assert!(hero.map_preferences.is_none());

        let json = serde_json::json!({
            "id": "pharah",
            "name": "Pharah",
            "role": "dps",
            "tempo": "medium",
            "playstyle": { "primary": "poke" },
            "formation": "fluid",
            "pressure": "poke",
            "win_condition": "ult-cycle",
            "map_sensitivity": "high",
            "map_preferences": { "favors": ["verticality", "open-space"] }
        });
        let hero: HeroIdentity = serde_json::from_value(json).unwrap();
        assert!(hero.playstyle.subtypes.is_empty());
        assert!(hero.needs.is_empty());
        assert_eq!(hero.map_sensitivity, Some(MapSensitivity::High));
        let prefs = hero.map_preferences.unwrap();
        assert_eq!(prefs.favors, [MapTrait::Verticality, MapTrait::OpenSpace]);
        assert!(prefs.avoids.is_empty());
    }

    #[test]
    fn test_table_lookup_and_validation() {
        let mut table = IdentityTable {
            heroes: vec![fixtures::tracer(), fixtures::wrecking_ball()],
        };
        assert!(table.validate().is_ok());
        assert_eq!(table.find("tracer").map(|h| h.name.as_str()), Some("Tracer"));
        assert_eq!(
            table.find("wrecking ball").map(|h| h.id.as_str()),
            Some("wreckingball")
        );
        assert!(table.find("genji").is_none());

        table.heroes.push(fixtures::tracer());
        let err = table.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate hero identity id 'tracer'");
    }
}
