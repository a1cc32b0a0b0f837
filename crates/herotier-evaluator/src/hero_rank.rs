//! Per-hero map ranking and bell-curve normalization.
//!
//! # How It Works
//!
//! Each hero is ranked independently against every map:
//!
//! 1. **Score** - compute the [map affinity](crate::map_affinity) of every map
//! 2. **Rank** - stable-sort maps by descending affinity; ties keep map-table order
//! 3. **Raw score** - `raw = 100 - rank`, so the best of N maps scores 99 and the worst `100 - N`
//! 4. **Spread** - population mean and standard deviation of the N raw scores
//!
//! The raw scores only say how a hero's maps compare *to each other*; the
//! [bell-curve transform](herotier_stats::bell_curve) rescales them around 75 so that scores
//! from different heroes can be compared on one axis.
//!
//! # Invariants
//!
//! For every record, `map_scores` holds exactly one entry per map, ranks form the permutation
//! `1..=N`, and `score == 100 - rank` for each entry.

use herotier_model::{Hero, Map, Role};
use herotier_stats::bell_curve::BellCurve;
use indexmap::IndexMap;
use serde::Serialize;

use crate::map_affinity::AffinityWeights;

/// Raw score assigned to rank 0 (never produced; rank 1 scores one less).
pub const RAW_SCORE_BASE: i32 = 100;

/// A hero's standing on one map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapScore {
    /// Raw score, `100 - rank`.
    pub score: i32,
    /// 1-based rank among the hero's maps.
    pub rank: usize,
    /// Map affinity in \[-1.0, 1.0\].
    pub normalized_score: f32,
}

/// Map scores and their distribution for one hero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroScoreRecord {
    pub hero: String,
    pub role: Role,
    /// Raw scores in rank order.
    pub raw_scores: Vec<i32>,
    /// Map name to score, in rank order.
    pub map_scores: IndexMap<String, MapScore>,
    pub mean: f32,
    pub std_dev: f32,
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn raw_score_for_rank(rank: usize) -> i32 {
    RAW_SCORE_BASE - rank as i32
}

impl HeroScoreRecord {
    /// Ranks every map for `hero`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn compute(hero: &Hero, maps: &[Map], weights: &AffinityWeights) -> Self {
        let mut entries = maps
            .iter()
            .map(|map| (map.name.as_str(), weights.score(&map.properties, hero)))
            .collect::<Vec<_>>();
        // `sort_by` is stable, which keeps map-table order among equal affinities
        entries.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        let map_scores = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, normalized_score))| {
                let rank = index + 1;
                let score = MapScore {
                    score: raw_score_for_rank(rank),
                    rank,
                    normalized_score,
                };
                (name.to_owned(), score)
            })
            .collect::<IndexMap<_, _>>();
        let raw_scores = map_scores.values().map(|s| s.score).collect::<Vec<_>>();
        let curve = BellCurve::from_values(raw_scores.iter().map(|&s| s as f32));

        Self {
            hero: hero.name.clone(),
            role: hero.role(),
            raw_scores,
            map_scores,
            mean: curve.mean,
            std_dev: curve.std_dev,
        }
    }

    #[must_use]
    pub fn bell_curve(&self) -> BellCurve {
        BellCurve::new(self.mean, self.std_dev)
    }

    /// Bell-curved score on `map_name`, or `None` for an unknown map.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bell_curved_score(&self, map_name: &str) -> Option<f32> {
        let score = self.map_scores.get(map_name)?;
        Some(self.bell_curve().transform(score.score as f32))
    }
}

/// Ranks every map for every hero, using unit affinity weights.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::hero_rank::compute_hero_map_scores;
/// use herotier_model::{Hero, Map, MapType, RoleNeeds};
///
/// let none: [&str; 0] = [];
/// let heroes = [Hero::new("Sojourn", RoleNeeds::damage(none, none, none))
///     .with_map_affinity(["Long Sightlines"], none)];
/// let maps = [
///     Map::new("Busan", MapType::Control, ["Enclosed Spaces"]),
///     Map::new("Havana", MapType::Escort, ["Long Sightlines"]),
/// ];
///
/// let records = compute_hero_map_scores(&heroes, &maps);
/// assert_eq!(records[0].map_scores["Havana"].rank, 1);
/// assert_eq!(records[0].map_scores["Busan"].score, 98);
/// assert_eq!(records[0].mean, 98.5);
/// ```
#[must_use]
pub fn compute_hero_map_scores(heroes: &[Hero], maps: &[Map]) -> Vec<HeroScoreRecord> {
    let weights = AffinityWeights::default();
    let records = heroes
        .iter()
        .map(|hero| HeroScoreRecord::compute(hero, maps, &weights))
        .collect::<Vec<_>>();
    log::debug!(
        "ranked {} maps for {} heroes",
        maps.len(),
        records.len()
    );
    records
}

/// One hero's line in a per-map ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRankingEntry {
    pub hero: String,
    pub role: Role,
    pub score: i32,
    pub rank: usize,
    pub bell_curved: f32,
}

/// Lists heroes on `map_name` by descending raw score, optionally restricted to one role.
///
/// Heroes with equal raw scores keep record order.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn rank_heroes_on_map(
    records: &[HeroScoreRecord],
    map_name: &str,
    role: Option<Role>,
) -> Vec<MapRankingEntry> {
    let mut entries = records
        .iter()
        .filter(|record| role.is_none_or(|role| record.role == role))
        .filter_map(|record| {
            let score = record.map_scores.get(map_name)?;
            Some(MapRankingEntry {
                hero: record.hero.clone(),
                role: record.role,
                score: score.score,
                rank: score.rank,
                bell_curved: record.bell_curve().transform(score.score as f32),
            })
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

#[cfg(test)]
mod tests {
    use herotier_model::{MapType, RoleNeeds};
    use proptest::prelude::*;

    use super::*;

    const NONE: [&str; 0] = [];
    const TAGS: [&str; 5] = [
        "Flank Routes",
        "Long Sightlines",
        "Enclosed Spaces",
        "Open Skybox",
        "Choke-Heavy Maps",
    ];

    fn hero(name: &str, likes: &[&str], hates: &[&str]) -> Hero {
        Hero::new(name, RoleNeeds::damage(NONE, NONE, NONE))
            .with_map_affinity(likes.iter().copied(), hates.iter().copied())
    }

    fn maps() -> Vec<Map> {
        vec![
            Map::new("Ilios", MapType::Control, ["Open Skybox", "Flank Routes"]),
            Map::new("Dorado", MapType::Escort, ["Long Sightlines"]),
            Map::new("Midtown", MapType::Hybrid, ["Enclosed Spaces"]),
            Map::new("Esperanca", MapType::Push, ["Flank Routes"]),
        ]
    }

    #[test]
    fn test_rank_and_raw_score() {
        let records =
            compute_hero_map_scores(&[hero("Tracer", &["Flank Routes"], &["Long Sightlines"])], &maps());
        let record = &records[0];

        // Esperanca 1.0, Ilios 0.5, Midtown 0.0, Dorado -1.0
        let order = record.map_scores.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(order, ["Esperanca", "Ilios", "Midtown", "Dorado"]);
        assert_eq!(record.raw_scores, [99, 98, 97, 96]);
        assert_eq!(record.map_scores["Dorado"].rank, 4);
        assert_eq!(record.map_scores["Dorado"].normalized_score, -1.0);
        assert_eq!(record.mean, 97.5);
    }

    #[test]
    fn test_ties_keep_map_order() {
        let records = compute_hero_map_scores(&[hero("Neutral", &[], &[])], &maps());
        let order = records[0].map_scores.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(order, ["Ilios", "Dorado", "Midtown", "Esperanca"]);
    }

    #[test]
    fn test_no_maps() {
        let records = compute_hero_map_scores(&[hero("Lonely", &[], &[])], &[]);
        assert!(records[0].map_scores.is_empty());
        assert_eq!(records[0].mean, 0.0);
        assert_eq!(records[0].std_dev, 0.0);
    }

    #[test]
    fn test_single_map_is_neutral() {
        let maps = &maps()[..1];
        let records = compute_hero_map_scores(&[hero("Solo", &["Open Skybox"], &[])], maps);
        assert_eq!(records[0].std_dev, 0.0);
        assert_eq!(records[0].bell_curved_score("Ilios"), Some(75.0));
        assert_eq!(records[0].bell_curved_score("Dorado"), None);
    }

    #[test]
    fn test_rank_heroes_on_map() {
        let heroes = [
            hero("Widowmaker", &["Long Sightlines"], &[]),
            hero("Reaper", &["Enclosed Spaces"], &["Long Sightlines"]),
            Hero::new("Ana", RoleNeeds::support(NONE, NONE, NONE))
                .with_map_affinity(["Long Sightlines"], NONE),
        ];
        let records = compute_hero_map_scores(&heroes, &maps());

        let all = rank_heroes_on_map(&records, "Dorado", None);
        let names = all.iter().map(|e| e.hero.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Widowmaker", "Ana", "Reaper"]);
        assert!(all[0].bell_curved > 75.0);
        assert!(all[2].bell_curved < 75.0);

        let supports = rank_heroes_on_map(&records, "Dorado", Some(Role::Support));
        assert_eq!(supports.len(), 1);
        assert!(rank_heroes_on_map(&records, "Nowhere", None).is_empty());
    }

    fn arb_tags() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..6)
            .prop_map(|tags| tags.into_iter().map(str::to_owned).collect())
    }

    fn arb_maps() -> impl Strategy<Value = Vec<Map>> {
        prop::collection::vec(arb_tags(), 0..40).prop_map(|maps| {
            maps.into_iter()
                .enumerate()
                .map(|(i, tags)| Map::new(format!("map-{i}"), MapType::Control, tags))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn ranks_are_a_permutation(maps in arb_maps(), likes in arb_tags(), hates in arb_tags()) {
            let hero = Hero::new("Prop", RoleNeeds::tank(NONE, NONE)).with_map_affinity(likes, hates);
            let record = HeroScoreRecord::compute(&hero, &maps, &AffinityWeights::default());

            prop_assert_eq!(record.map_scores.len(), maps.len());
            for map in &maps {
                prop_assert!(record.map_scores.contains_key(&map.name));
            }
            let mut ranks = record.map_scores.values().map(|s| s.rank).collect::<Vec<_>>();
            ranks.sort_unstable();
            prop_assert_eq!(ranks, (1..=maps.len()).collect::<Vec<_>>());
            for score in record.map_scores.values() {
                prop_assert_eq!(score.score, 100 - score.rank as i32);
            }
        }

        #[test]
        fn bell_curve_is_centered(maps in arb_maps(), likes in arb_tags()) {
            let hero = Hero::new("Prop", RoleNeeds::tank(NONE, NONE)).with_map_affinity(likes, Vec::<String>::new());
            let record = HeroScoreRecord::compute(&hero, &maps, &AffinityWeights::default());
            let scores = maps
                .iter()
                .filter_map(|m| record.bell_curved_score(&m.name))
                .collect::<Vec<_>>();
            let above = scores.iter().filter(|&&s| s > 75.0 + 1e-3).count();
            let below = scores.iter().filter(|&&s| s < 75.0 - 1e-3).count();
            // rank-derived raw scores are symmetric around their mean
            prop_assert_eq!(above, below);
        }
    }
}
