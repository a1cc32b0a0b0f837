//! Roster aggregation.
//!
//! Folds the seated members of a roster into one bag of tags. Lists are concatenated in member
//! order and keep duplicates; consumers that want set semantics use [`AggregatedTeamData::team_needs`].
//!
//! Tank needs are special: a tank never lists needs toward tanks, so only damage and support
//! members contribute to [`AggregatedTeamData::tank_needs`].

use std::collections::HashSet;

use herotier_model::{Hero, RoleNeeds};
use serde::Serialize;

/// Combined needs, drawbacks, hates and friends of a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregatedTeamData {
    pub tank_needs: Vec<String>,
    pub support_needs: Vec<String>,
    pub damage_needs: Vec<String>,
    pub drawbacks: Vec<String>,
    pub hates: Vec<String>,
    /// Friend names, not hero records.
    pub friends: Vec<String>,
}

impl AggregatedTeamData {
    /// Adds one member's tags.
    pub fn add(&mut self, hero: &Hero) {
        match &hero.needs {
            RoleNeeds::Tank { .. } => {}
            RoleNeeds::Damage { tank_needs, .. } | RoleNeeds::Support { tank_needs, .. } => {
                self.tank_needs.extend_from_slice(tank_needs);
            }
        }
        self.support_needs.extend_from_slice(hero.support_needs());
        self.damage_needs.extend_from_slice(hero.damage_needs());
        self.drawbacks.extend_from_slice(&hero.drawbacks);
        self.hates.extend_from_slice(&hero.hates);
        self.friends.extend_from_slice(&hero.friends);
    }

    /// Union of the three need groups.
    #[must_use]
    pub fn team_needs(&self) -> HashSet<&str> {
        self.tank_needs
            .iter()
            .chain(&self.support_needs)
            .chain(&self.damage_needs)
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Aggregates the given members.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::aggregate::aggregate_roster;
/// use herotier_model::{Hero, RoleNeeds};
///
/// let none: [&str; 0] = [];
/// let tank = Hero::new("Sigma", RoleNeeds::tank(["Shields"], none));
/// let dps = Hero::new("Sombra", RoleNeeds::damage(["Disruption"], none, none));
///
/// let data = aggregate_roster([&tank, &dps]);
/// assert_eq!(data.tank_needs, ["Disruption"]);
/// assert_eq!(data.support_needs, ["Shields"]);
/// ```
#[must_use]
pub fn aggregate_roster<'a, I>(members: I) -> AggregatedTeamData
where
    I: IntoIterator<Item = &'a Hero>,
{
    let mut data = AggregatedTeamData::default();
    for hero in members {
        data.add(hero);
    }
    data
}

#[cfg(test)]
mod tests {
    use herotier_model::{Roster, TeamComp};

    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_tank_needs_only_from_non_tanks() {
        let tank = Hero::new("Ramattra", RoleNeeds::tank(["Shields"], NONE));
        let dps = Hero::new("Echo", RoleNeeds::damage(["Disruption"], NONE, NONE));
        let data = aggregate_roster([&tank, &dps]);
        assert_eq!(data.tank_needs, ["Disruption"]);
        assert_eq!(data.support_needs, ["Shields"]);
        assert!(data.damage_needs.is_empty());
    }

    #[test]
    fn test_keeps_duplicates_in_member_order() {
        let a = Hero::new("Ana", RoleNeeds::support(NONE, NONE, ["Peel"]))
            .with_drawbacks(["Limited Mobility"])
            .with_hates(["Dive"])
            .with_friends(["Genji"]);
        let b = Hero::new("Baptiste", RoleNeeds::support(NONE, NONE, ["Peel"]))
            .with_drawbacks(["Limited Mobility"])
            .with_friends(["Ana"]);
        let data = aggregate_roster([&a, &b]);
        assert_eq!(data.damage_needs, ["Peel", "Peel"]);
        assert_eq!(data.drawbacks, ["Limited Mobility", "Limited Mobility"]);
        assert_eq!(data.hates, ["Dive"]);
        assert_eq!(data.friends, ["Genji", "Ana"]);
        assert_eq!(data.team_needs().len(), 1);
    }

    #[test]
    fn test_empty_roster() {
        let team = TeamComp::new();
        let data = aggregate_roster(team.members());
        assert!(data.is_empty());
        assert!(data.team_needs().is_empty());
    }
}
