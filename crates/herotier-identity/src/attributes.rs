//! Identity attribute vocabularies.
//!
//! Every attribute is a closed set and serializes in kebab-case (`"mid-fight"`,
//! `"long-sightlines"`). [`Tempo`], [`PlaystylePrimary`] and [`Formation`] also expose
//! [`as_str`](Tempo::as_str), since dislikes are free-form strings compared against those three
//! values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum Tempo {
    #[display("fast")]
    Fast,
    #[display("medium")]
    Medium,
    #[display("slow")]
    Slow,
}

impl Tempo {
    pub const ALL: [Tempo; 3] = [Tempo::Fast, Tempo::Medium, Tempo::Slow];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tempo::Fast => "fast",
            Tempo::Medium => "medium",
            Tempo::Slow => "slow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum PlaystylePrimary {
    #[display("dive")]
    Dive,
    #[display("brawl")]
    Brawl,
    #[display("poke")]
    Poke,
}

impl PlaystylePrimary {
    pub const ALL: [PlaystylePrimary; 3] = [
        PlaystylePrimary::Dive,
        PlaystylePrimary::Brawl,
        PlaystylePrimary::Poke,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlaystylePrimary::Dive => "dive",
            PlaystylePrimary::Brawl => "brawl",
            PlaystylePrimary::Poke => "poke",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum PlaystyleSubtype {
    #[display("flank")]
    Flank,
    #[display("rush")]
    Rush,
    #[display("anchor")]
    Anchor,
    #[display("disrupt")]
    Disrupt,
    #[display("split")]
    Split,
    #[display("hold")]
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum Formation {
    #[display("tight")]
    Tight,
    #[display("split")]
    Split,
    #[display("fluid")]
    Fluid,
}

impl Formation {
    pub const ALL: [Formation; 3] = [Formation::Tight, Formation::Split, Formation::Fluid];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Formation::Tight => "tight",
            Formation::Split => "split",
            Formation::Fluid => "fluid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum PressureType {
    #[display("burst")]
    Burst,
    #[display("sustain")]
    Sustain,
    #[display("poke")]
    Poke,
    #[display("disruption")]
    Disruption,
}

impl PressureType {
    pub const ALL: [PressureType; 4] = [
        PressureType::Burst,
        PressureType::Sustain,
        PressureType::Poke,
        PressureType::Disruption,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum WinCondition {
    #[display("engage")]
    Engage,
    #[display("mid-fight")]
    MidFight,
    #[display("ult-cycle")]
    UltCycle,
    #[display("attrition")]
    Attrition,
}

/// Map traits an identity can favor or avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum MapTrait {
    #[display("verticality")]
    Verticality,
    #[display("long-sightlines")]
    LongSightlines,
    #[display("flank-heavy")]
    FlankHeavy,
    #[display("tight-corridors")]
    TightCorridors,
    #[display("boopable")]
    Boopable,
    #[display("open-space")]
    OpenSpace,
    #[display("mobile-objective")]
    MobileObjective,
}

/// How strongly an identity reacts to map choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum MapSensitivity {
    #[display("high")]
    High,
    #[display("medium")]
    Medium,
    #[display("low")]
    Low,
}
