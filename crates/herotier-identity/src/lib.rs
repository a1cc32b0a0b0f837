//! Team-identity fit scoring.
//!
//! An alternative to the trait-tag synergy model in `herotier-evaluator`: heroes carry an
//! *identity* (tempo, playstyle, formation, pressure, win condition) and a roster's identity is
//! the consensus of its seated heroes. Candidates are scored by how well they match that
//! consensus and how many of the roster's unmet needs they cover.
//!
//! - [`attributes`] - closed vocabularies for identity fields
//! - [`hero`] - per-hero identity records and the identity table
//! - [`team`] - folding seated heroes into a [`TeamIdentity`]
//! - [`fit`] - scoring one candidate against a team, with reasons
//! - [`simulation`] - add and replace-at-slot what-if evaluations
//!
//! # Example
//!
//! ```
//! use herotier_identity::{IdentityTable, TeamIdentity, simulation::generate_fit_evaluations};
//!
//! let table: IdentityTable = serde_json::from_str(r#"{"heroes": [
//!     {"id": "winston", "name": "Winston", "role": "tank", "tempo": "fast",
//!      "playstyle": {"primary": "dive", "subtypes": ["rush"]}, "formation": "tight",
//!      "pressure": "disruption", "win_condition": "engage", "needs": ["follow-up"]},
//!     {"id": "genji", "name": "Genji", "role": "dps", "tempo": "fast",
//!      "playstyle": {"primary": "dive", "subtypes": ["flank"]}, "formation": "split",
//!      "pressure": "burst", "win_condition": "mid-fight", "provides": ["follow-up"]}
//! ]}"#).unwrap();
//!
//! let team = TeamIdentity::from_slots([table.find("winston"), None]);
//! let evaluations = generate_fit_evaluations(&team, &table.heroes);
//!
//! assert_eq!(evaluations.len(), 1);
//! assert_eq!(evaluations[0].hero.id, "genji");
//! // tempo, playstyle, subtype and pressure match. The formation tie goes to Winston's
//! // "tight", and Genji's own "follow-up" already counts as provided once seated.
//! assert_eq!(evaluations[0].add_score, Some(20 + 20 + 5 + 10));
//! ```

pub use self::{
    hero::{DuplicateIdentityError, HeroIdentity, IdentityTable},
    team::TeamIdentity,
};

pub mod attributes;
pub mod fit;
pub mod hero;
pub mod simulation;
pub mod team;

#[cfg(test)]
mod fixtures;
