//! Synergy scoring against an aggregated roster.
//!
//! # Scoring
//!
//! | Term          | Matches                                        | Points |
//! |---------------|------------------------------------------------|--------|
//! | team need     | each `provides` entry found in the team needs   | +4     |
//! | own need      | each of the hero's needs found in the team needs| +3     |
//! | hate          | each `hates` entry found in the roster's hates  | -2     |
//! | drawback      | each `drawbacks` entry found in the roster's drawbacks | -3 |
//!
//! "Team needs" is the union of the roster's three need groups, so a need listed by several
//! members is matched once; the hero's own lists are walked with multiplicity, so a hero that
//! provides `"Shields"` twice is credited twice.
//!
//! The aggregate usually includes the scored hero itself. Its own hates and drawbacks then
//! always find themselves in the aggregate, so a seated hero pays for them. Callers that want
//! a leave-one-out score aggregate the roster without the hero.
//!
//! # Normalization
//!
//! [`normalize_synergy_scores`] rescales a batch of raw scores against the batch maximum:
//!
//! ```text
//! normalized = round(raw / max(max_raw, 1) * 100)
//! ```
//!
//! Negative raw scores stay negative.

use std::collections::HashSet;

use herotier_model::{Hero, Role};
use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregate::{AggregatedTeamData, aggregate_roster};

pub const TEAM_NEED_POINTS: i32 = 4;
pub const OWN_NEED_POINTS: i32 = 3;
pub const HATE_PENALTY: i32 = -2;
pub const DRAWBACK_PENALTY: i32 = -3;

/// Match counts behind a synergy score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SynergyBreakdown {
    pub team_needs_met: usize,
    pub own_needs_met: usize,
    pub hate_conflicts: usize,
    pub drawback_conflicts: usize,
}

impl SynergyBreakdown {
    #[must_use]
    pub fn compute(hero: &Hero, aggregated: &AggregatedTeamData) -> Self {
        let team_needs = aggregated.team_needs();
        let hates = aggregated.hates.iter().map(String::as_str).collect::<HashSet<_>>();
        let drawbacks = aggregated
            .drawbacks
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>();

        let count = |tags: &[String], set: &HashSet<&str>| {
            tags.iter().filter(|t| set.contains(t.as_str())).count()
        };

        Self {
            team_needs_met: count(&hero.provides, &team_needs),
            own_needs_met: hero.own_needs().filter(|n| team_needs.contains(n)).count(),
            hate_conflicts: count(&hero.hates, &hates),
            drawback_conflicts: count(&hero.drawbacks, &drawbacks),
        }
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn total(&self) -> i32 {
        self.team_needs_met as i32 * TEAM_NEED_POINTS
            + self.own_needs_met as i32 * OWN_NEED_POINTS
            + self.hate_conflicts as i32 * HATE_PENALTY
            + self.drawback_conflicts as i32 * DRAWBACK_PENALTY
    }
}

/// Raw synergy of `hero` against `aggregated`.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::{aggregate::aggregate_roster, synergy::compute_synergy_score};
/// use herotier_model::{Hero, RoleNeeds};
///
/// let none: [&str; 0] = [];
/// let orisa = Hero::new("Orisa", RoleNeeds::tank(none, none)).with_provides(["Frontline"]);
/// let ashe = Hero::new("Ashe", RoleNeeds::damage(["Frontline"], none, none));
///
/// let team = aggregate_roster([&ashe]);
/// assert_eq!(compute_synergy_score(&orisa, &team), 4);
/// ```
#[must_use]
pub fn compute_synergy_score(hero: &Hero, aggregated: &AggregatedTeamData) -> i32 {
    SynergyBreakdown::compute(hero, aggregated).total()
}

// Halves round toward positive infinity.
#[expect(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Rescales raw scores to at most 100 against the batch maximum.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::synergy::normalize_synergy_scores;
///
/// assert_eq!(normalize_synergy_scores(&[8, 4, -3]), [100, 50, -37]);
/// assert_eq!(normalize_synergy_scores(&[0, -2]), [0, -200]);
/// ```
#[must_use]
pub fn normalize_synergy_scores(raw: &[i32]) -> Vec<i32> {
    let max = raw.iter().copied().max().unwrap_or(0).max(1);
    raw.iter()
        .map(|&r| round_half_up(f64::from(r) / f64::from(max) * 100.0))
        .collect()
}

/// One hero's synergy with a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynergyEntry {
    pub role: Role,
    pub raw: i32,
    pub normalized: i32,
    pub breakdown: SynergyBreakdown,
}

/// Synergy of every hero in a table against one roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynergyBoard {
    pub aggregated: AggregatedTeamData,
    /// Hero name to entry, in hero-table order.
    pub entries: IndexMap<String, SynergyEntry>,
}

impl SynergyBoard {
    /// Scores `heroes` against the aggregate of `members`.
    #[must_use]
    pub fn build<'a, I>(heroes: &[Hero], members: I) -> Self
    where
        I: IntoIterator<Item = &'a Hero>,
    {
        let aggregated = aggregate_roster(members);
        let breakdowns = heroes
            .iter()
            .map(|hero| SynergyBreakdown::compute(hero, &aggregated))
            .collect::<Vec<_>>();
        let raw = breakdowns.iter().map(SynergyBreakdown::total).collect::<Vec<_>>();
        let normalized = normalize_synergy_scores(&raw);

        let entries = heroes
            .iter()
            .zip(breakdowns)
            .zip(raw.into_iter().zip(normalized))
            .map(|((hero, breakdown), (raw, normalized))| {
                let entry = SynergyEntry {
                    role: hero.role(),
                    raw,
                    normalized,
                    breakdown,
                };
                (hero.name.clone(), entry)
            })
            .collect::<IndexMap<_, _>>();
        log::debug!("synergy board: {} heroes scored", entries.len());

        Self {
            aggregated,
            entries,
        }
    }

    /// Normalized synergy of `hero`, or 0 for a hero not on the board.
    #[must_use]
    pub fn normalized(&self, hero: &str) -> i32 {
        self.entries.get(hero).map_or(0, |e| e.normalized)
    }
}
