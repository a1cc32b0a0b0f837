use std::path::PathBuf;

use anyhow::ensure;
use herotier_evaluator::hero_rank::{
    HeroScoreRecord, MapRankingEntry, compute_hero_map_scores, rank_heroes_on_map,
};
use herotier_model::Role;
use serde::Serialize;

use crate::{
    command::args::{DataArg, RoleArg},
    schema::Report,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MapScoresArg {
    #[clap(flatten)]
    data: DataArg,
    /// Rank heroes on this map instead of listing every hero's map scores
    #[arg(long)]
    map: Option<String>,
    /// Only include heroes of this role
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MapScoresReport {
    Map {
        map: String,
        role: Option<Role>,
        heroes: Vec<MapRankingEntry>,
    },
    All {
        role: Option<Role>,
        heroes: Vec<HeroScoreRecord>,
    },
}

pub(crate) fn run(arg: &MapScoresArg) -> anyhow::Result<()> {
    let dataset = arg.data.load()?;
    let role = arg.role.map(Role::from);
    let records = compute_hero_map_scores(dataset.heroes(), dataset.maps());

    let report = match &arg.map {
        Some(map) => {
            ensure!(dataset.map(map).is_some(), "Unknown map: {map}");
            let heroes = rank_heroes_on_map(&records, map, role);
            if let Some(best) = heroes.first() {
                log::info!(
                    "best on {map}: {} (raw {}, bell-curved {:.1})",
                    best.hero,
                    best.score,
                    best.bell_curved
                );
            }
            MapScoresReport::Map {
                map: map.clone(),
                role,
                heroes,
            }
        }
        None => {
            let heroes = records
                .into_iter()
                .filter(|r| role.is_none_or(|role| r.role == role))
                .collect::<Vec<_>>();
            log::info!("scored {} heroes on {} maps", heroes.len(), dataset.maps().len());
            MapScoresReport::All { role, heroes }
        }
    };

    Output::save_json(&Report::new(report), arg.output.clone())
}
