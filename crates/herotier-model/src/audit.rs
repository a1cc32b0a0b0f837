//! Consistency check between drawbacks and hates.
//!
//! Hates and drawbacks share one vocabulary: a hate only ever matters if some hero has it as a
//! drawback, and a drawback only costs anything if some hero hates it. A tag that appears on
//! one side only is usually a typo in the hero table.

use indexmap::IndexMap;
use serde::Serialize;

use crate::hero::Hero;

/// Tags that appear only on one side, with the heroes that carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataAudit {
    /// Drawbacks that no hero hates.
    pub unmatched_drawbacks: IndexMap<String, Vec<String>>,
    /// Hates that are no hero's drawback.
    pub unmatched_hates: IndexMap<String, Vec<String>>,
}

impl DataAudit {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmatched_drawbacks.is_empty() && self.unmatched_hates.is_empty()
    }
}

fn index_by_tag<'h, F>(heroes: &'h [Hero], tags: F) -> IndexMap<&'h str, Vec<String>>
where
    F: Fn(&'h Hero) -> &'h [String],
{
    let mut index = IndexMap::<&str, Vec<String>>::new();
    for hero in heroes {
        for tag in tags(hero) {
            index.entry(tag.as_str()).or_default().push(hero.name.clone());
        }
    }
    index
}

/// Lists drawbacks nobody hates and hates nobody has, in first-seen order.
#[must_use]
pub fn audit_drawbacks_and_hates(heroes: &[Hero]) -> DataAudit {
    let drawbacks = index_by_tag(heroes, |h| h.drawbacks.as_slice());
    let hates = index_by_tag(heroes, |h| h.hates.as_slice());

    let unmatched = |from: &IndexMap<&str, Vec<String>>, other: &IndexMap<&str, Vec<String>>| {
        from.iter()
            .filter(|(tag, _)| !other.contains_key(**tag))
            .map(|(tag, names)| ((*tag).to_owned(), names.clone()))
            .collect::<IndexMap<_, _>>()
    };

    let audit = DataAudit {
        unmatched_drawbacks: unmatched(&drawbacks, &hates),
        unmatched_hates: unmatched(&hates, &drawbacks),
    };
    log::debug!(
        "audit: {} unmatched drawbacks, {} unmatched hates",
        audit.unmatched_drawbacks.len(),
        audit.unmatched_hates.len()
    );
    audit
}
