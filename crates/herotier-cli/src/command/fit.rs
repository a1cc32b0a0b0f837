use std::path::PathBuf;

use anyhow::{Context as _, ensure};
use herotier_identity::{
    HeroIdentity, IdentityTable, TeamIdentity,
    fit::{HeroFit, filter_available_heroes, get_hero_fits},
    simulation::{HeroFitEvaluation, ROSTER_SLOTS, generate_fit_evaluations},
};
use serde::Serialize;

use crate::{command::args::EMPTY_SLOT, schema::Report, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FitArg {
    /// Hero identity JSON file
    #[arg(long, default_value = "data/identities.json")]
    identities: PathBuf,
    /// Roster slots in order, by id or name. Use `-` for an empty slot
    #[arg(long, value_delimiter = ',')]
    slot: Vec<String>,
    /// Candidates to evaluate (default: every identity not seated)
    #[arg(long, value_delimiter = ',')]
    candidate: Vec<String>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FitReport<'a> {
    team: TeamIdentity<'a>,
    /// Candidates against the current team, best first
    fits: Vec<HeroFit<'a>>,
    evaluations: Vec<HeroFitEvaluation<'a>>,
}

fn find<'a>(table: &'a IdentityTable, key: &str) -> anyhow::Result<&'a HeroIdentity> {
    table
        .find(key)
        .with_context(|| format!("Unknown hero identity: {key}"))
}

pub(crate) fn run(arg: &FitArg) -> anyhow::Result<()> {
    let table = util::read_identity_file(&arg.identities)?;
    ensure!(
        arg.slot.len() <= ROSTER_SLOTS,
        "At most {ROSTER_SLOTS} slots can be selected"
    );

    let slots = arg
        .slot
        .iter()
        .map(|key| (key != EMPTY_SLOT).then(|| find(&table, key)).transpose())
        .collect::<anyhow::Result<Vec<_>>>()?;
    let team = TeamIdentity::from_slots(slots);

    let candidates = if arg.candidate.is_empty() {
        table.heroes.iter().collect::<Vec<_>>()
    } else {
        arg.candidate
            .iter()
            .map(|key| find(&table, key))
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    let available = filter_available_heroes(&team, candidates);

    let mut fits = get_hero_fits(&team, available.iter().copied());
    fits.sort_by(|a, b| b.fit.score.cmp(&a.fit.score));
    if let Some(best) = fits.first() {
        log::info!("best fit: {} ({})", best.hero.name, best.fit.score);
    }
    let evaluations = generate_fit_evaluations(&team, available);

    let report = FitReport {
        team,
        fits,
        evaluations,
    };
    util::Output::save_json(&Report::new(report), arg.output.clone())
}
