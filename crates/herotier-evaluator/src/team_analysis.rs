//! Per-role breakdown of a roster.
//!
//! Complements the [synergy board](crate::synergy): instead of scoring the whole hero table
//! against a roster, it looks inside the roster and reports, per member, how many of that
//! member's needs the *other* members cover.
//!
//! Individual synergy is +10 for every own need some other member provides and -5 for every
//! need nobody else provides. A member alone on the roster scores 0. Members are told apart by
//! name.

use herotier_model::{Hero, Role};
use indexmap::IndexMap;
use serde::Serialize;

pub const NEED_COVERED_POINTS: i32 = 10;
pub const NEED_UNCOVERED_PENALTY: i32 = -5;

/// Needs, provides and hates of the members of one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleBreakdown {
    pub needs: Vec<String>,
    pub provides: Vec<String>,
    pub hates: Vec<String>,
}

impl RoleBreakdown {
    fn add(&mut self, hero: &Hero) {
        self.needs.extend(hero.own_needs().map(str::to_owned));
        self.provides.extend_from_slice(&hero.provides);
        self.hates.extend_from_slice(&hero.hates);
    }
}

/// Roster-wide totals, per-role breakdowns and per-member synergy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamAnalysis {
    pub total: RoleBreakdown,
    pub tank: RoleBreakdown,
    pub damage: RoleBreakdown,
    pub support: RoleBreakdown,
    /// Member name to individual synergy, in roster order.
    pub individual_synergy: IndexMap<String, i32>,
}

impl TeamAnalysis {
    #[must_use]
    pub fn role(&self, role: Role) -> &RoleBreakdown {
        match role {
            Role::Tank => &self.tank,
            Role::Damage => &self.damage,
            Role::Support => &self.support,
        }
    }

    fn role_mut(&mut self, role: Role) -> &mut RoleBreakdown {
        match role {
            Role::Tank => &mut self.tank,
            Role::Damage => &mut self.damage,
            Role::Support => &mut self.support,
        }
    }
}

fn individual_synergy(hero: &Hero, members: &[&Hero]) -> i32 {
    let others = members
        .iter()
        .filter(|other| other.name != hero.name)
        .collect::<Vec<_>>();
    if others.is_empty() {
        return 0;
    }
    hero.own_needs()
        .map(|need| {
            let covered = others
                .iter()
                .any(|other| other.provides.iter().any(|p| p == need));
            if covered {
                NEED_COVERED_POINTS
            } else {
                NEED_UNCOVERED_PENALTY
            }
        })
        .sum()
}

/// Analyzes the seated members of a roster.
///
/// # Examples
///
/// ```
/// use herotier_evaluator::team_analysis::analyze_team;
/// use herotier_model::{Hero, RoleNeeds};
///
/// let none: [&str; 0] = [];
/// let lucio = Hero::new("Lucio", RoleNeeds::support(none, none, none)).with_provides(["Speed"]);
/// let rein = Hero::new("Reinhardt", RoleNeeds::tank(["Speed", "Healing"], none));
///
/// let analysis = analyze_team([&rein, &lucio]);
/// assert_eq!(analysis.individual_synergy["Reinhardt"], 5);
/// assert_eq!(analysis.individual_synergy["Lucio"], 0);
/// assert_eq!(analysis.total.needs, ["Speed", "Healing"]);
/// ```
#[must_use]
pub fn analyze_team<'a, I>(members: I) -> TeamAnalysis
where
    I: IntoIterator<Item = &'a Hero>,
{
    let members = members.into_iter().collect::<Vec<_>>();
    let mut analysis = TeamAnalysis::default();
    for hero in &members {
        analysis.total.add(hero);
        analysis.role_mut(hero.role()).add(hero);
    }
    for hero in &members {
        let score = individual_synergy(hero, &members);
        analysis.individual_synergy.insert(hero.name.clone(), score);
    }
    log::trace!("analyzed roster of {} members", members.len());
    analysis
}
