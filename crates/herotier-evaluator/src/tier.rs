//! Tier classification with empty-tier promotion.
//!
//! # Bucketing
//!
//! Each item lands in the first tier whose threshold its [tier score](TierScored::tier_score)
//! strictly exceeds:
//!
//! | Tier | Threshold |
//! |------|-----------|
//! | S    | > 95      |
//! | A    | > 88      |
//! | B    | > 80      |
//! | C    | > 70      |
//! | D    | > 60      |
//! | F    | otherwise |
//!
//! # Promotion
//!
//! A list whose best item falls short of S would show an empty top tier. While S is empty,
//! tiers are scanned from S down to D; whenever a tier is empty and the tier below it is not,
//! the lower tier's contents move up. Scanning repeats until S is filled or a full pass moves
//! nothing. Moves within one pass cascade: after A takes B's items, the now-empty B can take
//! C's in the same pass.
//!
//! ```text
//! before:   S []   A []   B [x]  C []   D []   F [y]
//! pass 1:   S []   A [x]  B []   C []   D [y]  F []
//! pass 2:   S [x]  A []   B []   C [y]  D []   F []
//! ```
//!
//! Within each tier, items are ordered by descending [rank score](TierScored::rank_score);
//! equal scores keep input order.

use std::fmt;

use serde::{Serialize, ser::SerializeMap};

/// Ordinal score buckets, best first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    derive_more::Display,
)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Tier {
    pub const ALL: [Tier; 6] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D, Tier::F];

    /// Tier for a score, before promotion.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        match score {
            s if s > 95.0 => Tier::S,
            s if s > 88.0 => Tier::A,
            s if s > 80.0 => Tier::B,
            s if s > 70.0 => Tier::C,
            s if s > 60.0 => Tier::D,
            _ => Tier::F,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Something that can be placed in a tier.
pub trait TierScored {
    /// Score compared against the tier thresholds.
    fn tier_score(&self) -> f32;

    /// Score used to order items within a tier.
    fn rank_score(&self) -> f32 {
        self.tier_score()
    }
}

impl TierScored for f32 {
    fn tier_score(&self) -> f32 {
        *self
    }
}

/// Items bucketed by tier.
#[derive(Clone, PartialEq)]
pub struct TierList<T> {
    tiers: [Vec<T>; 6],
}

impl<T> Default for TierList<T> {
    fn default() -> Self {
        Self {
            tiers: Default::default(),
        }
    }
}

impl<T> TierList<T> {
    #[must_use]
    pub fn get(&self, tier: Tier) -> &[T] {
        &self.tiers[tier.index()]
    }

    /// Tiers best first, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[T])> {
        Tier::ALL.into_iter().zip(self.tiers.iter().map(Vec::as_slice))
    }

    /// Tier holding the first item that matches `pred`.
    pub fn find<F>(&self, mut pred: F) -> Option<Tier>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|(_, items)| items.iter().any(&mut pred))
            .map(|(tier, _)| tier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn promote(&mut self) {
        let mut moved = true;
        while moved && self.tiers[0].is_empty() {
            moved = false;
            for i in 0..self.tiers.len() - 1 {
                if self.tiers[i].is_empty() && !self.tiers[i + 1].is_empty() {
                    log::trace!("promoting tier {} into {}", Tier::ALL[i + 1], Tier::ALL[i]);
                    self.tiers.swap(i, i + 1);
                    moved = true;
                }
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TierList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for TierList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.tiers.len()))?;
        for (tier, items) in self.iter() {
            map.serialize_entry(&tier, items)?;
        }
        map.end()
    }
}

/// Buckets items into tiers, sorts each tier and applies promotion.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::tier::{Tier, classify_tiers};
///
/// let tiers = classify_tiers(vec![82.0_f32, 50.0, 85.0]);
/// assert_eq!(tiers.get(Tier::S), [85.0, 82.0]);
/// assert_eq!(tiers.get(Tier::C), [50.0]);
/// ```
#[must_use]
pub fn classify_tiers<T: TierScored>(items: Vec<T>) -> TierList<T> {
    let mut list = TierList::default();
    for item in items {
        list.tiers[Tier::from_score(item.tier_score()).index()].push(item);
    }
    for tier in &mut list.tiers {
        tier.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
    }
    list.promote();
    log::debug!(
        "classified {} items into tiers {:?}",
        list.len(),
        list.tiers.iter().map(Vec::len).collect::<Vec<_>>()
    );
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(Tier::from_score(95.01), Tier::S);
        assert_eq!(Tier::from_score(95.0), Tier::A);
        assert_eq!(Tier::from_score(88.0), Tier::B);
        assert_eq!(Tier::from_score(80.0), Tier::C);
        assert_eq!(Tier::from_score(70.0), Tier::D);
        assert_eq!(Tier::from_score(60.0), Tier::F);
        assert_eq!(Tier::from_score(-10.0), Tier::F);
    }

    #[test]
    fn test_no_promotion_when_s_filled() {
        let tiers = classify_tiers(vec![99.0_f32, 65.0]);
        assert_eq!(tiers.get(Tier::S), [99.0]);
        assert_eq!(tiers.get(Tier::D), [65.0]);
        assert!(tiers.get(Tier::A).is_empty());
    }

    #[test]
    fn test_promotes_b_and_f_only() {
        let tiers = classify_tiers(vec![10.0_f32, 84.0, 81.0, 30.0, 86.0]);
        assert_eq!(tiers.get(Tier::S), [86.0, 84.0, 81.0]);
        assert!(tiers.get(Tier::A).is_empty());
        assert!(tiers.get(Tier::B).is_empty());
        assert_eq!(tiers.get(Tier::C), [30.0, 10.0]);
        assert!(tiers.get(Tier::D).is_empty());
        assert!(tiers.get(Tier::F).is_empty());
    }

    #[test]
    fn test_only_f() {
        let tiers = classify_tiers(vec![5.0_f32]);
        assert_eq!(tiers.get(Tier::S), [5.0]);
        assert_eq!(tiers.len(), 1);
    }

    #[test]
    fn test_empty() {
        let tiers = classify_tiers(Vec::<f32>::new());
        assert!(tiers.is_empty());
        assert_eq!(tiers.iter().count(), 6);
    }

    #[derive(Debug, PartialEq)]
    struct Scored {
        name: &'static str,
        tier: f32,
        rank: f32,
    }

    impl TierScored for Scored {
        fn tier_score(&self) -> f32 {
            self.tier
        }
        fn rank_score(&self) -> f32 {
            self.rank
        }
    }

    #[test]
    fn test_sort_within_tier_by_rank_score() {
        let item = |name, tier, rank| Scored { name, tier, rank };
        let tiers = classify_tiers(vec![
            item("low", 99.0, 10.0),
            item("high", 96.0, 30.0),
            item("tie", 97.0, 10.0),
        ]);
        let names = tiers.get(Tier::S).iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(names, ["high", "low", "tie"]);
        assert_eq!(tiers.find(|s| s.name == "tie"), Some(Tier::S));
        assert_eq!(tiers.find(|s| s.name == "none"), None);
    }
}
