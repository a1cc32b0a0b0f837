//! Hero records and their role-dependent needs.
//!
//! A hero's role decides which need lists it carries: tanks never list tank needs, while
//! damage and support heroes list needs toward all three roles. [`RoleNeeds`] encodes that as a
//! tagged enum so that the shape of a record always matches its role; accessors such as
//! [`Hero::tank_needs`] return an empty slice for fields the role does not have.
//!
//! # JSON Layout
//!
//! The role tag is flattened into the hero object:
//!
//! ```json
//! {
//!   "name": "Reinhardt",
//!   "role": "Tank",
//!   "provides": ["Shields", "Damage Mitigation"],
//!   "support_needs": ["Sustained Healing"],
//!   "damage_needs": [],
//!   "drawbacks": ["Limited Mobility"],
//!   "hates": ["Passive Play"],
//!   "friends": ["Brigitte"],
//!   "map_likes": ["Choke-Heavy Maps"],
//!   "map_hates": ["Long Sightlines"]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// The three hero roles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Damage, Role::Support];
}

/// Role tag together with the need lists that role carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "role")]
pub enum RoleNeeds {
    Tank {
        #[serde(default)]
        support_needs: Vec<String>,
        #[serde(default)]
        damage_needs: Vec<String>,
    },
    Damage {
        #[serde(default)]
        tank_needs: Vec<String>,
        #[serde(default)]
        support_needs: Vec<String>,
        #[serde(default)]
        damage_needs: Vec<String>,
    },
    Support {
        #[serde(default)]
        tank_needs: Vec<String>,
        #[serde(default)]
        support_needs: Vec<String>,
        #[serde(default)]
        damage_needs: Vec<String>,
    },
}

impl RoleNeeds {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            RoleNeeds::Tank { .. } => Role::Tank,
            RoleNeeds::Damage { .. } => Role::Damage,
            RoleNeeds::Support { .. } => Role::Support,
        }
    }
}

/// A selectable character and its trait profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    #[serde(flatten)]
    pub needs: RoleNeeds,
    #[serde(default)]
    pub provides: Vec<String>,
    #[serde(default)]
    pub drawbacks: Vec<String>,
    #[serde(default)]
    pub hates: Vec<String>,
    /// Names of heroes this hero pairs well with.
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub map_likes: Vec<String>,
    #[serde(default)]
    pub map_hates: Vec<String>,
}

impl Hero {
    /// Creates a hero with the given needs and no other traits.
    #[must_use]
    pub fn new(name: impl Into<String>, needs: RoleNeeds) -> Self {
        Self {
            name: name.into(),
            needs,
            provides: vec![],
            drawbacks: vec![],
            hates: vec![],
            friends: vec![],
            map_likes: vec![],
            map_hates: vec![],
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.needs.role()
    }

    /// Needs this hero has toward tanks. Always empty for tanks.
    #[must_use]
    pub fn tank_needs(&self) -> &[String] {
        match &self.needs {
            RoleNeeds::Tank { .. } => &[],
            RoleNeeds::Damage { tank_needs, .. } | RoleNeeds::Support { tank_needs, .. } => {
                tank_needs
            }
        }
    }

    #[must_use]
    pub fn support_needs(&self) -> &[String] {
        match &self.needs {
            RoleNeeds::Tank { support_needs, .. }
            | RoleNeeds::Damage { support_needs, .. }
            | RoleNeeds::Support { support_needs, .. } => support_needs,
        }
    }

    #[must_use]
    pub fn damage_needs(&self) -> &[String] {
        match &self.needs {
            RoleNeeds::Tank { damage_needs, .. }
            | RoleNeeds::Damage { damage_needs, .. }
            | RoleNeeds::Support { damage_needs, .. } => damage_needs,
        }
    }

    /// All of this hero's needs, in role order.
    ///
    /// Tanks list support then damage needs; damage heroes list tank, support, damage;
    /// supports list tank, damage, support.
    pub fn own_needs(&self) -> impl Iterator<Item = &str> {
        let groups: [&[String]; 3] = match &self.needs {
            RoleNeeds::Tank {
                support_needs,
                damage_needs,
            } => [support_needs, damage_needs, &[]],
            RoleNeeds::Damage {
                tank_needs,
                support_needs,
                damage_needs,
            } => [tank_needs, support_needs, damage_needs],
            RoleNeeds::Support {
                tank_needs,
                support_needs,
                damage_needs,
            } => [tank_needs, damage_needs, support_needs],
        };
        groups.into_iter().flatten().map(String::as_str)
    }

    /// Builder-style setter used by data tables and tests.
    #[must_use]
    pub fn with_provides<I, S>(mut self, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provides = provides.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_drawbacks<I, S>(mut self, drawbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drawbacks = drawbacks.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_hates<I, S>(mut self, hates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hates = hates.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_friends<I, S>(mut self, friends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.friends = friends.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_map_affinity<L, H, S>(mut self, likes: L, hates: H) -> Self
    where
        L: IntoIterator<Item = S>,
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map_likes = likes.into_iter().map(Into::into).collect();
        self.map_hates = hates.into_iter().map(Into::into).collect();
        self
    }
}

/// Shorthand constructors for [`RoleNeeds`].
impl RoleNeeds {
    #[must_use]
    pub fn tank<S, D>(support_needs: S, damage_needs: D) -> Self
    where
        S: IntoIterator<Item: Into<String>>,
        D: IntoIterator<Item: Into<String>>,
    {
        RoleNeeds::Tank {
            support_needs: support_needs.into_iter().map(Into::into).collect(),
            damage_needs: damage_needs.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn damage<T, S, D>(tank_needs: T, support_needs: S, damage_needs: D) -> Self
    where
        T: IntoIterator<Item: Into<String>>,
        S: IntoIterator<Item: Into<String>>,
        D: IntoIterator<Item: Into<String>>,
    {
        RoleNeeds::Damage {
            tank_needs: tank_needs.into_iter().map(Into::into).collect(),
            support_needs: support_needs.into_iter().map(Into::into).collect(),
            damage_needs: damage_needs.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn support<T, S, D>(tank_needs: T, support_needs: S, damage_needs: D) -> Self
    where
        T: IntoIterator<Item: Into<String>>,
        S: IntoIterator<Item: Into<String>>,
        D: IntoIterator<Item: Into<String>>,
    {
        RoleNeeds::Support {
            tank_needs: tank_needs.into_iter().map(Into::into).collect(),
            support_needs: support_needs.into_iter().map(Into::into).collect(),
            damage_needs: damage_needs.into_iter().map(Into::into).collect(),
        }
    }
}
