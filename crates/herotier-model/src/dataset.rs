//! Read-only hero and map tables.
//!
//! A [`Dataset`] is built once by whoever loads the data (the CLI reads JSON files) and then
//! passed by reference to every scoring function. Construction validates the tables so that
//! downstream code can rely on unique names and resolvable friend references.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{hero::Hero, map::Map};

/// On-disk layout of a hero table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroTable {
    pub heroes: Vec<Hero>,
}

/// On-disk layout of a map table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapTable {
    pub maps: Vec<Map>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("duplicate hero name '{name}'")]
    DuplicateHero { name: String },
    #[display("duplicate map name '{name}'")]
    DuplicateMap { name: String },
    #[display("hero '{hero}' lists unknown friend '{friend}'")]
    UnknownFriend { hero: String, friend: String },
}

/// Validated hero and map tables.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    heroes: Vec<Hero>,
    maps: Vec<Map>,
}

impl Dataset {
    /// Validates and wraps the given tables.
    ///
    /// Hero and map order is preserved; map order is the tie-break order for map rankings.
    pub fn new(heroes: Vec<Hero>, maps: Vec<Map>) -> Result<Self, DatasetError> {
        let mut hero_names = HashSet::new();
        for hero in &heroes {
            if !hero_names.insert(hero.name.as_str()) {
                return Err(DatasetError::DuplicateHero {
                    name: hero.name.clone(),
                });
            }
        }
        for hero in &heroes {
            if let Some(friend) = hero
                .friends
                .iter()
                .find(|f| !hero_names.contains(f.as_str()))
            {
                return Err(DatasetError::UnknownFriend {
                    hero: hero.name.clone(),
                    friend: friend.clone(),
                });
            }
        }

        let mut map_names = HashSet::new();
        for map in &maps {
            if !map_names.insert(map.name.as_str()) {
                return Err(DatasetError::DuplicateMap {
                    name: map.name.clone(),
                });
            }
        }

        log::debug!("dataset: {} heroes, {} maps", heroes.len(), maps.len());
        Ok(Self { heroes, maps })
    }

    pub fn from_tables(heroes: HeroTable, maps: MapTable) -> Result<Self, DatasetError> {
        Self::new(heroes.heroes, maps.maps)
    }

    #[must_use]
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    #[must_use]
    pub fn maps(&self) -> &[Map] {
        &self.maps
    }

    #[must_use]
    pub fn hero(&self, name: &str) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.name == name)
    }

    #[must_use]
    pub fn map(&self, name: &str) -> Option<&Map> {
        self.maps.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hero::RoleNeeds, map::MapType};

    const NONE: [&str; 0] = [];

    fn tank(name: &str) -> Hero {
        Hero::new(name, RoleNeeds::tank(NONE, NONE))
    }

    #[test]
    fn test_rejects_duplicate_hero() {
        let err = Dataset::new(vec![tank("Sigma"), tank("Sigma")], vec![]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::DuplicateHero {
                name: "Sigma".into()
            }
        );
    }

    #[test]
    fn test_rejects_unknown_friend() {
        let heroes = vec![tank("Zarya").with_friends(["Mei"])];
        let err = Dataset::new(heroes, vec![]).unwrap_err();
        assert_eq!(err.to_string(), "hero 'Zarya' lists unknown friend 'Mei'");
    }

    #[test]
    fn test_rejects_duplicate_map() {
        let maps = vec![
            Map::new("Ilios", MapType::Control, NONE),
            Map::new("Ilios", MapType::Control, NONE),
        ];
        assert!(matches!(
            Dataset::new(vec![], maps),
            Err(DatasetError::DuplicateMap { .. })
        ));
    }

    #[test]
    fn test_lookup() {
        let heroes = vec![tank("Doomfist"), tank("Ramattra").with_friends(["Doomfist"])];
        let maps = vec![Map::new("Numbani", MapType::Hybrid, ["Flank Routes"])];
        let dataset = Dataset::new(heroes, maps).unwrap();
        assert_eq!(dataset.hero("Ramattra").unwrap().friends, ["Doomfist"]);
        assert!(dataset.hero("Mauga").is_none());
        assert_eq!(dataset.map("Numbani").unwrap().map_type, MapType::Hybrid);
    }
}
