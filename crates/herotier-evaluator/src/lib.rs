//! Map, synergy and tier scoring for heroes.
//!
//! This crate turns the reference data of [`herotier_model`] into rankings. Everything here is
//! a pure function of its inputs: no I/O, no global state, and identical inputs always produce
//! identical outputs.
//!
//! # Pipeline
//!
//! ```text
//! Map traits ─→ map_affinity ─→ hero_rank ──────────────┐  bell-curved score on a map
//!                                                       ↓
//! Roster ────→ aggregate ────→ synergy (SynergyBoard) ─→ evaluation ─→ tier
//!                                                          (policy)     (S..F, promotion)
//! ```
//!
//! 1. [`map_affinity`] scores a map's trait tags against a hero's likes and hates
//! 2. [`hero_rank`] ranks every map per hero, turns ranks into raw scores and fits a bell curve
//! 3. [`aggregate`] folds a roster's needs, drawbacks, hates and friends into one bag of tags
//! 4. [`synergy`] scores each hero against that bag and normalizes the batch
//! 5. [`evaluation`] combines the bell-curved map score with synergy under a
//!    [`CombinationPolicy`](evaluation::CombinationPolicy)
//! 6. [`tier`] buckets the combined scores and promotes lower tiers into empty upper ones
//!
//! [`team_analysis`] is a side view over a roster: per-role totals and how well the members
//! cover each other's needs.
//!
//! # Example
//!
//! ```
//! use herotier_evaluator::{
//!     evaluation::{CombinationPolicy, evaluate_heroes},
//!     hero_rank::compute_hero_map_scores,
//!     synergy::SynergyBoard,
//!     tier::{Tier, classify_tiers},
//! };
//! use herotier_model::{Hero, Map, MapType, RoleNeeds};
//!
//! let none: [&str; 0] = [];
//! let heroes = vec![
//!     Hero::new("Winston", RoleNeeds::tank(none, none)).with_provides(["Dive"])
//!         .with_map_affinity(["High Mobility Paths"], none),
//!     Hero::new("Genji", RoleNeeds::damage(["Dive"], none, none))
//!         .with_map_affinity(["High Mobility Paths"], ["Choke-Heavy Maps"]),
//! ];
//! let maps = vec![
//!     Map::new("Nepal", MapType::Control, ["High Mobility Paths"]),
//!     Map::new("Hanamura", MapType::Hybrid, ["Choke-Heavy Maps"]),
//! ];
//!
//! let records = compute_hero_map_scores(&heroes, &maps);
//! let synergy = SynergyBoard::build(&heroes, [&heroes[1]]);
//! let evaluations = evaluate_heroes(&records, &synergy, Some("Nepal"), CombinationPolicy::Averaged);
//! let tiers = classify_tiers(evaluations);
//!
//! assert_eq!(tiers.get(Tier::S)[0].hero, "Winston");
//! ```

pub mod aggregate;
pub mod evaluation;
pub mod hero_rank;
pub mod map_affinity;
pub mod synergy;
pub mod team_analysis;
pub mod tier;
