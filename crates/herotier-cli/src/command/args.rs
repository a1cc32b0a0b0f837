use std::path::PathBuf;

use anyhow::{Context as _, bail, ensure};
use herotier_evaluator::evaluation::CombinationPolicy;
use herotier_model::{Dataset, Hero, Role, Roster as _, SixStack, TeamComp};

use crate::util;

/// Slot value that leaves a slot empty.
pub(crate) const EMPTY_SLOT: &str = "-";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DataArg {
    /// Hero table JSON file
    #[arg(long, default_value = "data/heroes.json")]
    pub heroes: PathBuf,
    /// Map table JSON file
    #[arg(long, default_value = "data/maps.json")]
    pub maps: PathBuf,
}

impl DataArg {
    pub fn load(&self) -> anyhow::Result<Dataset> {
        util::read_dataset(&self.heroes, &self.maps)
    }
}

/// Roster selection: either the five role slots or a six-stack.
#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct RosterArg {
    /// Tank slot
    #[arg(long)]
    pub tank: Option<String>,
    /// Damage slots (up to 2)
    #[arg(long)]
    pub damage: Vec<String>,
    /// Support slots (up to 2)
    #[arg(long)]
    pub support: Vec<String>,
    /// Six-stack slots in order; the first two accept tanks. Use `-` for an empty slot
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["tank", "damage", "support"])]
    pub six: Vec<String>,
}

fn lookup<'a>(dataset: &'a Dataset, name: &str) -> anyhow::Result<Option<&'a Hero>> {
    if name == EMPTY_SLOT {
        return Ok(None);
    }
    let hero = dataset
        .hero(name)
        .with_context(|| format!("Unknown hero: {name}"))?;
    Ok(Some(hero))
}

impl RosterArg {
    /// Seated heroes, in slot order.
    pub fn members<'a>(&self, dataset: &'a Dataset) -> anyhow::Result<Vec<&'a Hero>> {
        if !self.six.is_empty() {
            return self.six_stack(dataset);
        }

        let mut team = TeamComp::new();
        if let Some(name) = &self.tank {
            team.set_tank(lookup(dataset, name)?)?;
        }
        ensure!(self.damage.len() <= 2, "At most 2 damage heroes can be selected");
        for (index, name) in self.damage.iter().enumerate() {
            team.set_damage(index, lookup(dataset, name)?)?;
        }
        ensure!(self.support.len() <= 2, "At most 2 support heroes can be selected");
        for (index, name) in self.support.iter().enumerate() {
            team.set_support(index, lookup(dataset, name)?)?;
        }
        Ok(team.members().collect())
    }

    fn six_stack<'a>(&self, dataset: &'a Dataset) -> anyhow::Result<Vec<&'a Hero>> {
        if self.six.len() > SixStack::SLOTS {
            bail!("At most {} six-stack slots can be selected", SixStack::SLOTS);
        }
        let mut stack = SixStack::new();
        for (index, name) in self.six.iter().enumerate() {
            stack.set(index, lookup(dataset, name)?)?;
        }
        Ok(stack.members().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.tank.is_none() && self.damage.is_empty() && self.support.is_empty() && self.six.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum RoleArg {
    Tank,
    Damage,
    Support,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Tank => Role::Tank,
            RoleArg::Damage => Role::Damage,
            RoleArg::Support => Role::Support,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum PolicyArg {
    /// (1.5 * map + synergy) / 2
    #[default]
    Averaged,
    /// 0.6 * map + 0.4 * synergy, or map alone without synergy
    Weighted,
}

impl From<PolicyArg> for CombinationPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Averaged => CombinationPolicy::Averaged,
            PolicyArg::Weighted => CombinationPolicy::Weighted,
        }
    }
}

#[cfg(test)]
mod tests {
    use herotier_model::{Map, MapType, RoleNeeds};

    use super::*;

    const NONE: [&str; 0] = [];

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Hero::new("Winston", RoleNeeds::tank(NONE, NONE)),
                Hero::new("D.Va", RoleNeeds::tank(NONE, NONE)),
                Hero::new("Genji", RoleNeeds::damage(NONE, NONE, NONE)),
                Hero::new("Ana", RoleNeeds::support(NONE, NONE, NONE)),
            ],
            vec![Map::new("Ilios", MapType::Control, NONE)],
        )
        .unwrap()
    }

    fn names(heroes: &[&Hero]) -> Vec<String> {
        heroes.iter().map(|h| h.name.clone()).collect()
    }

    #[test]
    fn test_team_comp_roster() {
        let dataset = dataset();
        let arg = RosterArg {
            tank: Some("Winston".to_owned()),
            damage: vec!["Genji".to_owned()],
            support: vec![EMPTY_SLOT.to_owned(), "Ana".to_owned()],
            six: vec![],
        };
        let members = arg.members(&dataset).unwrap();
        assert_eq!(names(&members), ["Winston", "Genji", "Ana"]);
    }

    #[test]
    fn test_wrong_role_is_rejected() {
        let dataset = dataset();
        let arg = RosterArg {
            damage: vec!["Ana".to_owned()],
            ..RosterArg::default()
        };
        let err = arg.members(&dataset).unwrap_err();
        assert!(err.to_string().contains("does not accept"));
    }

    #[test]
    fn test_six_stack_roster() {
        let dataset = dataset();
        let arg = RosterArg {
            six: ["Winston", "D.Va", "-", "Genji"].map(String::from).to_vec(),
            ..RosterArg::default()
        };
        let members = arg.members(&dataset).unwrap();
        assert_eq!(names(&members), ["Winston", "D.Va", "Genji"]);

        let arg = RosterArg {
            six: ["Genji", "Ana", "Winston"].map(String::from).to_vec(),
            ..RosterArg::default()
        };
        assert!(arg.members(&dataset).is_err());
    }

    #[test]
    fn test_unknown_hero() {
        let dataset = dataset();
        let arg = RosterArg {
            tank: Some("Nobody".to_owned()),
            ..RosterArg::default()
        };
        let err = arg.members(&dataset).unwrap_err();
        assert_eq!(err.to_string(), "Unknown hero: Nobody");
    }
}
