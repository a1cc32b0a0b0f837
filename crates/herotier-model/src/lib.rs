//! Hero, map and roster data model.
//!
//! The scoring crates never own reference data: heroes and maps live in a [`Dataset`] built by
//! the data-loading side (the CLI reads JSON tables), and rosters borrow heroes from it.
//!
//! - [`hero`] - hero records with role-tagged needs
//! - [`map`] - maps and their trait tags
//! - [`dataset`] - validated read-only tables
//! - [`roster`] - five- and six-member team selections
//! - [`audit`] - drawback/hate vocabulary check

pub use self::{
    dataset::{Dataset, DatasetError, HeroTable, MapTable},
    hero::{Hero, Role, RoleNeeds},
    map::{Map, MapType},
    roster::{Roster, SixStack, SlotRoleError, TeamComp},
};

pub mod audit;
pub mod dataset;
pub mod hero;
pub mod map;
pub mod roster;
