use std::path::PathBuf;

use herotier_model::{HeroTable, audit::audit_drawbacks_and_hates};

use crate::{schema::Report, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AuditArg {
    /// Hero table JSON file
    #[arg(long, default_value = "data/heroes.json")]
    heroes: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AuditArg) -> anyhow::Result<()> {
    let table: HeroTable = util::read_json_file("hero", &arg.heroes)?;
    let audit = audit_drawbacks_and_hates(&table.heroes);
    if audit.is_clean() {
        log::info!("every drawback is hated and every hate is a drawback");
    } else {
        for (tag, heroes) in &audit.unmatched_drawbacks {
            log::warn!("drawback '{tag}' is never hated (on {})", heroes.join(", "));
        }
        for (tag, heroes) in &audit.unmatched_hates {
            log::warn!("hate '{tag}' is never a drawback (from {})", heroes.join(", "));
        }
    }
    util::Output::save_json(&Report::new(audit), arg.output.clone())
}
