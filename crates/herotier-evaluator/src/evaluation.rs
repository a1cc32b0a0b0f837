//! Combining map and synergy scores into one overall score per hero.
//!
//! # Combination Policies
//!
//! Two policies exist and are kept apart on purpose, since they rank heroes differently:
//!
//! - [`CombinationPolicy::Averaged`]: `overall = (1.5 * map + synergy) / 2`
//! - [`CombinationPolicy::Weighted`]: `overall = 0.6 * map + 0.4 * synergy` when synergy is
//!   positive, otherwise `overall = map`
//!
//! `map` is the hero's bell-curved score on the selected map (0 without a selected map) and
//! `synergy` the hero's normalized synergy from a [`SynergyBoard`].
//!
//! # Weighted Score
//!
//! Tiers are cut on a 0-100 scale. After combination, each overall score is rescaled against
//! the best one in the batch:
//!
//! ```text
//! weighted = overall / max(max_overall, 1) * 100
//! ```

use herotier_model::Role;
use serde::{Deserialize, Serialize};

use crate::{hero_rank::HeroScoreRecord, synergy::SynergyBoard, tier::TierScored};

/// How bell-curved map score and synergy are combined.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum CombinationPolicy {
    /// `(1.5 * map + synergy) / 2`
    #[default]
    Averaged,
    /// `0.6 * map + 0.4 * synergy` when synergy is positive, else `map`
    Weighted,
}

impl CombinationPolicy {
    #[must_use]
    pub fn overall_score(self, map_score: f32, synergy: f32) -> f32 {
        match self {
            CombinationPolicy::Averaged => (map_score * 1.5 + synergy) / 2.0,
            CombinationPolicy::Weighted => {
                if synergy > 0.0 {
                    map_score * 0.6 + synergy * 0.4
                } else {
                    map_score
                }
            }
        }
    }
}

/// One hero's combined score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroEvaluation {
    pub hero: String,
    pub role: Role,
    pub bell_curved: f32,
    pub synergy: i32,
    pub overall: f32,
    /// `overall` rescaled to the batch maximum; tiers are cut on this.
    pub weighted: f32,
}

impl TierScored for HeroEvaluation {
    fn tier_score(&self) -> f32 {
        self.weighted
    }

    fn rank_score(&self) -> f32 {
        self.overall
    }
}

/// Evaluates every hero record on `map_name` with the given synergy and policy.
///
/// Output follows record order.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn evaluate_heroes(
    records: &[HeroScoreRecord],
    synergy: &SynergyBoard,
    map_name: Option<&str>,
    policy: CombinationPolicy,
) -> Vec<HeroEvaluation> {
    let mut evaluations = records
        .iter()
        .map(|record| {
            let bell_curved = map_name
                .and_then(|map| record.bell_curved_score(map))
                .unwrap_or(0.0);
            let synergy = synergy.normalized(&record.hero);
            HeroEvaluation {
                hero: record.hero.clone(),
                role: record.role,
                bell_curved,
                synergy,
                overall: policy.overall_score(bell_curved, synergy as f32),
                weighted: 0.0,
            }
        })
        .collect::<Vec<_>>();

    let max_overall = evaluations
        .iter()
        .map(|e| e.overall)
        .fold(1.0_f32, f32::max);
    for evaluation in &mut evaluations {
        evaluation.weighted = evaluation.overall / max_overall * 100.0;
    }
    log::debug!(
        "evaluated {} heroes with {policy} policy (map: {})",
        evaluations.len(),
        map_name.unwrap_or("none")
    );
    evaluations
}
