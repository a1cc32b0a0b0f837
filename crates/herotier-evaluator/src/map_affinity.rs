//! Map affinity: how well a map's traits suit a hero.
//!
//! ```text
//! affinity = (like_weight * likes - hate_weight * hates) / total_traits
//! ```
//!
//! `likes` and `hates` count map traits found in the hero's `map_likes` / `map_hates`. Every
//! occurrence of a trait counts, so a trait listed twice on a map weighs twice as much, both
//! as a like and as a hate. With unit weights the result lies in \[-1.0, 1.0\]. A map with no
//! traits scores 0.

use herotier_model::Hero;

/// Weights applied to liked and hated map traits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffinityWeights {
    pub like: f32,
    pub hate: f32,
}

impl Default for AffinityWeights {
    fn default() -> Self {
        Self {
            like: 1.0,
            hate: 1.0,
        }
    }
}

impl AffinityWeights {
    /// Scores a map's traits for `hero` with these weights.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn score(&self, map_traits: &[String], hero: &Hero) -> f32 {
        if map_traits.is_empty() {
            return 0.0;
        }

        let mut likes = 0_usize;
        let mut hates = 0_usize;
        for property in map_traits {
            if hero.map_likes.contains(property) {
                likes += 1;
            }
            if hero.map_hates.contains(property) {
                hates += 1;
            }
        }

        (self.like * likes as f32 - self.hate * hates as f32) / map_traits.len() as f32
    }
}

/// Scores a map's traits for `hero` with unit weights.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::map_affinity::score_map_affinity;
/// use herotier_model::{Hero, RoleNeeds};
///
/// let none: [&str; 0] = [];
/// let hero = Hero::new("Pharah", RoleNeeds::damage(none, none, none))
///     .with_map_affinity(["Open Skybox"], ["Enclosed Spaces"]);
/// let traits = ["Open Skybox", "Open Skybox", "Enclosed Spaces", "Flank Routes"].map(String::from);
///
/// assert_eq!(score_map_affinity(&traits, &hero), 0.25);
/// assert_eq!(score_map_affinity(&[], &hero), 0.0);
/// ```
#[must_use]
pub fn score_map_affinity(map_traits: &[String], hero: &Hero) -> f32 {
    AffinityWeights::default().score(map_traits, hero)
}
