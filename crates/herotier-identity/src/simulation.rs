//! Slot-level what-if simulation.
//!
//! For each candidate not already seated, [`generate_fit_evaluations`] answers two questions:
//!
//! - **add** - if the roster has an empty slot, how well does the candidate fit once seated in
//!   the first one?
//! - **replace** - for every slot, occupied or not, how well does the candidate fit once seated
//!   there instead of the current occupant?
//!
//! Each answer seats the candidate, folds the whole resulting roster into a fresh
//! [`TeamIdentity`] and scores the candidate against it. The candidate is therefore scored
//! against an identity that already includes itself.
//!
//! Rosters shorter than [`ROSTER_SLOTS`] are padded with empty slots, so every evaluation
//! carries at least [`ROSTER_SLOTS`] replace entries.
//!
//! Filling any empty slot seats the same heroes, so every empty slot shares the add
//! simulation and its replace entry always equals the add score.

use serde::Serialize;

use crate::{
    fit::{FitReason, FitScore, score_hero_fit, serialize_hero_id},
    hero::HeroIdentity,
    team::TeamIdentity,
};

/// Roster size used when the team has fewer slots.
pub const ROSTER_SLOTS: usize = 6;

/// Candidate's fit when seated in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceScore<'a> {
    pub slot_index: usize,
    /// Occupant being replaced; `None` for an empty slot.
    #[serde(serialize_with = "serialize_optional_hero_id")]
    pub replacing: Option<&'a HeroIdentity>,
    pub score: i32,
    pub reasons: Vec<FitReason>,
}

fn serialize_optional_hero_id<S>(
    hero: &Option<&HeroIdentity>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match hero {
        Some(hero) => serializer.serialize_some(&hero.id),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroFitEvaluation<'a> {
    #[serde(serialize_with = "serialize_hero_id")]
    pub hero: &'a HeroIdentity,
    /// `None` when the roster is full.
    pub add_score: Option<i32>,
    /// One entry per slot, in slot order.
    pub replace_scores: Vec<ReplaceScore<'a>>,
}

impl HeroFitEvaluation<'_> {
    /// Best replace entry; the earliest slot wins ties.
    #[must_use]
    pub fn best_replacement(&self) -> Option<&ReplaceScore<'_>> {
        self.replace_scores
            .iter()
            .reduce(|best, r| if r.score > best.score { r } else { best })
    }
}

fn simulate<'a>(
    slots: &[Option<&'a HeroIdentity>],
    index: usize,
    candidate: &'a HeroIdentity,
) -> FitScore {
    let mut seated = slots.to_vec();
    seated[index] = Some(candidate);
    let team = TeamIdentity::from_slots(seated);
    score_hero_fit(&team, candidate)
}

fn evaluate<'a>(slots: &[Option<&'a HeroIdentity>], candidate: &'a HeroIdentity) -> HeroFitEvaluation<'a> {
    let add = slots
        .iter()
        .position(Option::is_none)
        .map(|index| simulate(slots, index, candidate));

    let replace_scores = slots
        .iter()
        .enumerate()
        .map(|(slot_index, &replacing)| {
            let fit = match (&add, replacing) {
                (Some(add), None) => add.clone(),
                _ => simulate(slots, slot_index, candidate),
            };
            ReplaceScore {
                slot_index,
                replacing,
                score: fit.score,
                reasons: fit.reasons,
            }
        })
        .collect();

    HeroFitEvaluation {
        hero: candidate,
        add_score: add.map(|fit| fit.score),
        replace_scores,
    }
}

/// Evaluates add and replace options for every candidate not already seated on `team`.
///
/// # Examples
///
/// ```
/// use herotier_identity::{hero::HeroIdentity, simulation::generate_fit_evaluations, team::TeamIdentity};
///
/// # let identity = |id: &str| -> HeroIdentity {
/// #     serde_json::from_value(serde_json::json!({
/// #         "id": id, "name": id, "role": "dps", "tempo": "fast",
/// #         "playstyle": { "primary": "dive" }, "formation": "split",
/// #         "pressure": "burst", "win_condition": "engage",
/// #     })).unwrap()
/// # };
/// let genji = identity("genji");
/// let tracer = identity("tracer");
/// let team = TeamIdentity::from_slots([Some(&genji), None]);
///
/// let evaluations = generate_fit_evaluations(&team, [&genji, &tracer]);
/// assert_eq!(evaluations.len(), 1);
/// assert_eq!(evaluations[0].replace_scores.len(), 6);
/// assert_eq!(evaluations[0].add_score, Some(evaluations[0].replace_scores[1].score));
/// ```
#[must_use]
pub fn generate_fit_evaluations<'a, I>(
    team: &TeamIdentity<'a>,
    candidates: I,
) -> Vec<HeroFitEvaluation<'a>>
where
    I: IntoIterator<Item = &'a HeroIdentity>,
{
    let mut slots = team.current_heroes.clone();
    if slots.len() < ROSTER_SLOTS {
        slots.resize(ROSTER_SLOTS, None);
    }

    let evaluations = candidates
        .into_iter()
        .filter(|candidate| !team.is_seated(&candidate.id))
        .map(|candidate| evaluate(&slots, candidate))
        .collect::<Vec<_>>();
    log::debug!(
        "simulated {} candidates over {} slots",
        evaluations.len(),
        slots.len()
    );
    evaluations
}
