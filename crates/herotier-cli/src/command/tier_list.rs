use std::path::PathBuf;

use anyhow::ensure;
use herotier_evaluator::{
    evaluation::{CombinationPolicy, HeroEvaluation, evaluate_heroes},
    hero_rank::compute_hero_map_scores,
    synergy::SynergyBoard,
    tier::{TierList, classify_tiers},
};
use serde::Serialize;

use crate::{
    command::args::{DataArg, PolicyArg, RosterArg},
    schema::Report,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TierListArg {
    #[clap(flatten)]
    data: DataArg,
    /// Map to score heroes on; without it only synergy counts
    #[arg(long)]
    map: Option<String>,
    #[clap(flatten)]
    roster: RosterArg,
    /// How map score and synergy are combined
    #[arg(long, value_enum, default_value_t)]
    policy: PolicyArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TierListReport {
    map: Option<String>,
    policy: CombinationPolicy,
    roster: Vec<String>,
    tiers: TierList<HeroEvaluation>,
}

pub(crate) fn run(arg: &TierListArg) -> anyhow::Result<()> {
    let dataset = arg.data.load()?;
    if let Some(map) = &arg.map {
        ensure!(dataset.map(map).is_some(), "Unknown map: {map}");
    } else {
        log::warn!("no map selected; map scores count as 0");
    }
    let members = arg.roster.members(&dataset)?;
    let policy = CombinationPolicy::from(arg.policy);

    let records = compute_hero_map_scores(dataset.heroes(), dataset.maps());
    let synergy = SynergyBoard::build(dataset.heroes(), members.iter().copied());
    let evaluations = evaluate_heroes(&records, &synergy, arg.map.as_deref(), policy);
    let tiers = classify_tiers(evaluations);
    for (tier, heroes) in tiers.iter().filter(|(_, heroes)| !heroes.is_empty()) {
        let names = heroes.iter().map(|e| e.hero.as_str()).collect::<Vec<_>>();
        log::info!("{tier}: {}", names.join(", "));
    }

    let report = TierListReport {
        map: arg.map.clone(),
        policy,
        roster: members.iter().map(|h| h.name.clone()).collect(),
        tiers,
    };
    Output::save_json(&Report::new(report), arg.output.clone())
}
