use std::path::PathBuf;

use herotier_evaluator::{
    synergy::SynergyBoard,
    team_analysis::{TeamAnalysis, analyze_team},
};
use serde::Serialize;

use crate::{
    command::args::{DataArg, RosterArg},
    schema::Report,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SynergyArg {
    #[clap(flatten)]
    data: DataArg,
    #[clap(flatten)]
    roster: RosterArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SynergyReport {
    roster: Vec<String>,
    board: SynergyBoard,
    analysis: TeamAnalysis,
}

pub(crate) fn run(arg: &SynergyArg) -> anyhow::Result<()> {
    let dataset = arg.data.load()?;
    if arg.roster.is_empty() {
        log::warn!("no roster selected; every synergy score will be 0");
    }
    let members = arg.roster.members(&dataset)?;

    let board = SynergyBoard::build(dataset.heroes(), members.iter().copied());
    let analysis = analyze_team(members.iter().copied());
    if let Some((name, entry)) = board.entries.iter().max_by_key(|(_, e)| e.raw) {
        log::info!("highest synergy: {name} (raw {}, normalized {})", entry.raw, entry.normalized);
    }

    let report = SynergyReport {
        roster: members.iter().map(|h| h.name.clone()).collect(),
        board,
        analysis,
    };
    Output::save_json(&Report::new(report), arg.output.clone())
}
