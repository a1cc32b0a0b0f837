use clap::{Parser, Subcommand};

use self::{
    audit::AuditArg, fit::FitArg, map_scores::MapScoresArg, synergy::SynergyArg,
    tier_list::TierListArg,
};

mod args;
mod audit;
mod fit;
mod map_scores;
mod synergy;
mod tier_list;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Rank maps per hero and show bell-curved map scores
    MapScores(#[clap(flatten)] MapScoresArg),
    /// Score every hero's synergy with a roster
    Synergy(#[clap(flatten)] SynergyArg),
    /// Build a tier list from map and synergy scores
    TierList(#[clap(flatten)] TierListArg),
    /// Evaluate candidates against a team identity, slot by slot
    Fit(#[clap(flatten)] FitArg),
    /// Report drawbacks nobody hates and hates nobody has
    Audit(#[clap(flatten)] AuditArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match args.mode {
        Mode::MapScores(arg) => map_scores::run(&arg)?,
        Mode::Synergy(arg) => synergy::run(&arg)?,
        Mode::TierList(arg) => tier_list::run(&arg)?,
        Mode::Fit(arg) => fit::run(&arg)?,
        Mode::Audit(arg) => audit::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_tier_list() {
        let args = CommandArgs::try_parse_from([
            "herotier",
            "tier-list",
            "--map",
            "Ilios",
            "--tank",
            "Winston",
            "--damage",
            "Genji",
            "--damage",
            "Tracer",
            "--policy",
            "weighted",
        ])
        .unwrap();
        assert!(matches!(args.mode, Mode::TierList(_)));
    }

    #[test]
    fn test_six_conflicts_with_role_slots() {
        let result = CommandArgs::try_parse_from([
            "herotier",
            "synergy",
            "--six",
            "Winston",
            "--tank",
            "Winston",
        ]);
        assert!(result.is_err());
    }
}
