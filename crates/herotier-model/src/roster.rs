//! Team selections.
//!
//! A roster owns only the *selection*: which hero sits in which slot. Heroes are borrowed from
//! the [`Dataset`](crate::dataset::Dataset) for the lifetime `'a`.
//!
//! Two layouts are supported:
//!
//! - [`TeamComp`] - five members: one tank, two damage, two support
//! - [`SixStack`] - six slots: the first two accept any role, the remaining four reject tanks
//!
//! Both implement [`Roster`], which is all the aggregation code needs.

use crate::hero::{Hero, Role};

/// A set of optionally filled hero slots.
pub trait Roster<'a> {
    /// Every slot in order, filled or not.
    fn slots(&self) -> impl Iterator<Item = Option<&'a Hero>>;

    /// The seated heroes, in slot order.
    fn members(&self) -> impl Iterator<Item = &'a Hero> {
        self.slots().flatten()
    }
}

/// A hero was offered to a slot that does not accept its role.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("slot {slot} does not accept {role} hero '{hero}'")]
pub struct SlotRoleError {
    pub slot: String,
    pub role: Role,
    pub hero: String,
}

fn check_role(
    slot: impl Into<String>,
    accepts: impl Fn(Role) -> bool,
    hero: Option<&Hero>,
) -> Result<(), SlotRoleError> {
    match hero {
        Some(hero) if !accepts(hero.role()) => Err(SlotRoleError {
            slot: slot.into(),
            role: hero.role(),
            hero: hero.name.clone(),
        }),
        _ => Ok(()),
    }
}

/// Five-member roster with role-typed slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamComp<'a> {
    tank: Option<&'a Hero>,
    damage: [Option<&'a Hero>; 2],
    support: [Option<&'a Hero>; 2],
}

impl<'a> TeamComp<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tank(&mut self, hero: Option<&'a Hero>) -> Result<(), SlotRoleError> {
        check_role("tank", |r| r == Role::Tank, hero)?;
        self.tank = hero;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    pub fn set_damage(
        &mut self,
        index: usize,
        hero: Option<&'a Hero>,
    ) -> Result<(), SlotRoleError> {
        assert!(index < self.damage.len(), "damage slot {index} out of range");
        check_role(format!("damage {}", index + 1), |r| r == Role::Damage, hero)?;
        self.damage[index] = hero;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    pub fn set_support(
        &mut self,
        index: usize,
        hero: Option<&'a Hero>,
    ) -> Result<(), SlotRoleError> {
        assert!(index < self.support.len(), "support slot {index} out of range");
        check_role(format!("support {}", index + 1), |r| r == Role::Support, hero)?;
        self.support[index] = hero;
        Ok(())
    }

    #[must_use]
    pub fn tank(&self) -> Option<&'a Hero> {
        self.tank
    }

    #[must_use]
    pub fn damage(&self) -> [Option<&'a Hero>; 2] {
        self.damage
    }

    #[must_use]
    pub fn support(&self) -> [Option<&'a Hero>; 2] {
        self.support
    }
}

impl<'a> Roster<'a> for TeamComp<'a> {
    fn slots(&self) -> impl Iterator<Item = Option<&'a Hero>> {
        [self.tank]
            .into_iter()
            .chain(self.damage)
            .chain(self.support)
    }
}

/// Number of slots in a [`SixStack`].
pub const SIX_STACK_SLOTS: usize = 6;

/// Six-member roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SixStack<'a> {
    slots: [Option<&'a Hero>; SIX_STACK_SLOTS],
}

impl<'a> SixStack<'a> {
    pub const SLOTS: usize = SIX_STACK_SLOTS;
    /// Slots before this index accept tanks.
    pub const OPEN_SLOTS: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn accepts(index: usize, role: Role) -> bool {
        index < Self::OPEN_SLOTS || role != Role::Tank
    }

    /// # Panics
    ///
    /// Panics if `index >= SixStack::SLOTS`.
    pub fn set(&mut self, index: usize, hero: Option<&'a Hero>) -> Result<(), SlotRoleError> {
        assert!(index < Self::SLOTS, "slot {index} out of range");
        check_role(format!("{}", index + 1), |r| Self::accepts(index, r), hero)?;
        self.slots[index] = hero;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Hero> {
        self.slots.get(index).copied().flatten()
    }
}

impl<'a> Roster<'a> for SixStack<'a> {
    fn slots(&self) -> impl Iterator<Item = Option<&'a Hero>> {
        self.slots.into_iter()
    }
}

impl<'a> Roster<'a> for [&'a Hero] {
    fn slots(&self) -> impl Iterator<Item = Option<&'a Hero>> {
        self.iter().copied().map(Some)
    }
}
