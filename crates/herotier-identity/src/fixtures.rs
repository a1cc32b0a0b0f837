//! Identities shared by the unit tests.

use serde_json::json;

use crate::hero::HeroIdentity;

fn identity(value: serde_json::Value) -> HeroIdentity {
    serde_json::from_value(value).unwrap()
}

pub(crate) fn wrecking_ball() -> HeroIdentity {
    identity(json!({
        "id": "wreckingball",
        "name": "Wrecking Ball",
        "role": "tank",
        "tempo": "fast",
        "playstyle": { "primary": "dive", "subtypes": ["flank", "disrupt"] },
        "formation": "split",
        "pressure": "disruption",
        "win_condition": "mid-fight",
        "provides": ["disruption", "engage-initiation", "space-creation"],
        "needs": ["follow-up", "flank-pressure"],
        "dislikes": ["poke-heavy", "slow comps"]
    }))
}

pub(crate) fn tracer() -> HeroIdentity {
    identity(json!({
        "id": "tracer",
        "name": "Tracer",
        "role": "dps",
        "tempo": "fast",
        "playstyle": { "primary": "dive", "subtypes": ["flank"] },
        "formation": "split",
        "pressure": "burst",
        "win_condition": "mid-fight",
        "provides": ["flank-pressure", "follow-up", "burst-threat"],
        "needs": ["engage-window", "support-cover"],
        "dislikes": ["barriers", "AoE spam"]
    }))
}

pub(crate) fn bastion() -> HeroIdentity {
    identity(json!({
        "id": "bastion",
        "name": "Bastion",
        "role": "dps",
        "tempo": "slow",
        "playstyle": { "primary": "poke", "subtypes": ["anchor"] },
        "formation": "tight",
        "pressure": "poke",
        "win_condition": "attrition",
        "provides": ["poke-damage", "zone-control"],
        "needs": ["shielding", "setup-time"],
        "dislikes": ["flank-heavy", "split comps"]
    }))
}

pub(crate) fn sombra() -> HeroIdentity {
    identity(json!({
        "id": "sombra",
        "name": "Sombra",
        "role": "dps",
        "tempo": "fast",
        "playstyle": { "primary": "dive", "subtypes": ["flank", "disrupt"] },
        "formation": "split",
        "pressure": "disruption",
        "win_condition": "mid-fight",
        "provides": ["disruption", "support-cover", "flank-pressure"],
        "needs": ["engage-initiation", "follow-up"],
        "dislikes": ["tight comps", "anchor play"]
    }))
}

pub(crate) fn juno() -> HeroIdentity {
    identity(json!({
        "id": "juno",
        "name": "Juno",
        "role": "support",
        "tempo": "fast",
        "playstyle": { "primary": "brawl", "subtypes": ["flank", "hold"] },
        "formation": "split",
        "pressure": "sustain",
        "win_condition": "mid-fight",
        "provides": ["healing-output", "support-cover", "utility-tools"],
        "needs": ["frontline", "dive-partners"],
        "dislikes": ["poke-heavy", "anchor comps"]
    }))
}

pub(crate) fn illari() -> HeroIdentity {
    identity(json!({
        "id": "illari",
        "name": "Illari",
        "role": "support",
        "tempo": "medium",
        "playstyle": { "primary": "poke", "subtypes": ["hold"] },
        "formation": "split",
        "pressure": "poke",
        "win_condition": "attrition",
        "provides": ["poke-damage", "sustain-healing", "range-pressure"],
        "needs": ["peel", "line-of-sight"],
        "dislikes": ["dive-heavy", "split comps"]
    }))
}

/// Clashes with a fast split dive team on every axis.
pub(crate) fn weirdman() -> HeroIdentity {
    identity(json!({
        "id": "weirdman",
        "name": "Weirdman",
        "role": "support",
        "tempo": "slow",
        "playstyle": { "primary": "poke", "subtypes": [] },
        "formation": "tight",
        "pressure": "poke",
        "win_condition": "attrition",
        "provides": ["zone-control"],
        "needs": ["shielding"],
        "dislikes": ["fast", "split", "mid-fight"]
    }))
}
