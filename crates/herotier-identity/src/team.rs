//! Team identity, folded one hero at a time.
//!
//! # Folding
//!
//! A team identity is never edited in place: [`add_hero_to_team`] returns a fresh identity
//! recomputed from every seated hero.
//!
//! - **tempo, playstyle primary, formation, win condition** - the most common value among the
//!   seated heroes; ties go to the value seen first
//! - **pressure, playstyle subtypes, provides, dislikes** - unions in first-seen order
//! - **unmet needs** - every seated hero's needs, duplicates kept, minus the ones some seated
//!   hero provides
//!
//! Because ties resolve by encounter order, folding the same heroes in a different order can
//! produce a different identity.
//!
//! # Examples
//!
//! ```
//! use herotier_identity::{
//!     attributes::Tempo,
//!     hero::HeroIdentity,
//!     team::{add_hero_to_team, initialize_team},
//! };
//!
//! # let identity = |id: &str, tempo: &str| -> HeroIdentity {
//! #     serde_json::from_value(serde_json::json!({
//! #         "id": id, "name": id, "role": "dps", "tempo": tempo,
//! #         "playstyle": { "primary": "dive" }, "formation": "split",
//! #         "pressure": "burst", "win_condition": "engage",
//! #     })).unwrap()
//! # };
//! let genji = identity("genji", "fast");
//! let ashe = identity("ashe", "slow");
//!
//! let team = add_hero_to_team(&initialize_team(), &genji);
//! let team = add_hero_to_team(&team, &ashe);
//! assert_eq!(team.tempo, Some(Tempo::Fast));
//! assert_eq!(team.seated().count(), 2);
//! ```

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

use crate::{
    attributes::{Formation, PlaystylePrimary, PlaystyleSubtype, PressureType, Tempo, WinCondition},
    hero::HeroIdentity,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamPlaystyle {
    pub primary: Option<PlaystylePrimary>,
    pub subtypes: Vec<PlaystyleSubtype>,
}

/// Aggregate identity of the heroes seated on a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamIdentity<'a> {
    pub tempo: Option<Tempo>,
    pub playstyle: TeamPlaystyle,
    pub formation: Option<Formation>,
    pub pressure: Vec<PressureType>,
    pub win_condition: Option<WinCondition>,
    pub accumulated_provides: Vec<String>,
    pub unmet_needs: Vec<String>,
    pub dislikes: Vec<String>,
    /// Roster slots in order; `None` is an empty slot.
    #[serde(serialize_with = "serialize_slot_ids")]
    pub current_heroes: Vec<Option<&'a HeroIdentity>>,
}

fn serialize_slot_ids<S>(slots: &[Option<&HeroIdentity>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(slots.iter().map(|slot| slot.map(|h| h.id.as_str())))
}

/// Most common value; ties go to the value seen first.
fn most_common<T, I>(values: I) -> Option<T>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::<T, usize>::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

fn union<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

impl<'a> TeamIdentity<'a> {
    /// Builds the identity of a roster, folding seated heroes in slot order.
    #[must_use]
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a HeroIdentity>>,
    {
        let current_heroes = slots.into_iter().collect::<Vec<_>>();
        let seated = current_heroes.iter().copied().flatten().collect::<Vec<_>>();

        let accumulated_provides = union(seated.iter().flat_map(|h| h.provides.iter().cloned()));
        let provided = accumulated_provides
            .iter()
            .map(String::as_str)
            .collect::<IndexSet<_>>();
        let unmet_needs = seated
            .iter()
            .flat_map(|h| &h.needs)
            .filter(|need| !provided.contains(need.as_str()))
            .cloned()
            .collect();

        let team = Self {
            tempo: most_common(seated.iter().map(|h| h.tempo)),
            playstyle: TeamPlaystyle {
                primary: most_common(seated.iter().map(|h| h.playstyle.primary)),
                subtypes: union(seated.iter().flat_map(|h| h.playstyle.subtypes.iter().copied())),
            },
            formation: most_common(seated.iter().map(|h| h.formation)),
            pressure: union(seated.iter().map(|h| h.pressure)),
            win_condition: most_common(seated.iter().map(|h| h.win_condition)),
            accumulated_provides,
            unmet_needs,
            dislikes: union(seated.iter().flat_map(|h| h.dislikes.iter().cloned())),
            current_heroes,
        };
        log::trace!(
            "folded team identity of {} heroes: tempo {:?}, formation {:?}",
            seated.len(),
            team.tempo,
            team.formation
        );
        team
    }

    /// Returns a new identity with `hero` appended as a new slot.
    #[must_use]
    pub fn with_hero(&self, hero: &'a HeroIdentity) -> Self {
        Self::from_slots(self.current_heroes.iter().copied().chain([Some(hero)]))
    }

    /// Seated heroes in slot order.
    pub fn seated(&self) -> impl Iterator<Item = &'a HeroIdentity> + '_ {
        self.current_heroes.iter().copied().flatten()
    }

    /// Whether a hero with `id` is seated.
    #[must_use]
    pub fn is_seated(&self, id: &str) -> bool {
        self.seated().any(|h| h.id == id)
    }
}

/// An empty identity with no slots.
#[must_use]
pub fn initialize_team<'a>() -> TeamIdentity<'a> {
    TeamIdentity::default()
}

/// Folds `hero` into `team`, returning the new identity.
#[must_use]
pub fn add_hero_to_team<'a>(team: &TeamIdentity<'a>, hero: &'a HeroIdentity) -> TeamIdentity<'a> {
    team.with_hero(hero)
}
