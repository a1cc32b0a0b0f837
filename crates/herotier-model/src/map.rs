use serde::{Deserialize, Serialize};

/// Game-mode category of a map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum MapType {
    Control,
    Escort,
    Hybrid,
    Push,
    Flashpoint,
    Clash,
}

/// A map and its trait tags.
///
/// `properties` is ordered and may repeat a tag; a repeated tag marks a trait that dominates
/// the map and counts once per occurrence when scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub name: String,
    pub map_type: MapType,
    #[serde(default)]
    pub properties: Vec<String>,
}

impl Map {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, map_type: MapType, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            map_type,
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}
