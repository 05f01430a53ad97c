//! Change-type classification by trigger keyword counts.

use std::collections::BTreeMap;

use tracing::debug;

use super::{ChangeType, KeywordCatalog};
use crate::diff::FileDiff;

/// Per-label trigger hit counts accumulated over a set of diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationScores {
    counts: BTreeMap<ChangeType, usize>,
    fallback: ChangeType,
}

impl ClassificationScores {
    pub fn get(&self, label: ChangeType) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Scores in [`ChangeType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ChangeType, usize)> + '_ {
        self.counts.iter().map(|(ty, count)| (*ty, *count))
    }

    /// The label with the strictly highest count.
    ///
    /// All-zero scores and ties resolve to the catalog fallback, never to
    /// whichever label happens to come first.
    pub fn winner(&self) -> ChangeType {
        let Some(max) = self.counts.values().copied().max() else {
            return self.fallback;
        };
        if max == 0 {
            return self.fallback;
        }

        let mut leaders = self.counts.iter().filter(|(_, count)| **count == max);
        match (leaders.next(), leaders.next()) {
            (Some((ty, _)), None) => *ty,
            _ => self.fallback,
        }
    }
}

/// Count trigger hits for every label.
///
/// Each diff's text is lowercased and every trigger contained in it adds one
/// to its label. Matching is plain substring containment, so `"test"` also
/// hits inside `"latest"`.
pub fn score(diffs: &[FileDiff], catalog: &KeywordCatalog) -> ClassificationScores {
    let mut counts: BTreeMap<ChangeType, usize> =
        ChangeType::ALL.into_iter().map(|ty| (ty, 0)).collect();

    for diff in diffs {
        let text = diff.diff_text.to_lowercase();
        for (label, triggers) in catalog.iter() {
            let hits = triggers
                .iter()
                .filter(|trigger| text.contains(trigger.as_str()))
                .count();
            *counts.entry(label).or_insert(0) += hits;
        }
    }

    ClassificationScores {
        counts,
        fallback: catalog.fallback(),
    }
}

/// Assign a single [`ChangeType`] to a set of diffs.
///
/// This is a heuristic and may misclassify.
pub fn classify(diffs: &[FileDiff], catalog: &KeywordCatalog) -> ChangeType {
    let scores = score(diffs, catalog);
    let label = scores.winner();
    debug!(
        "Classified {} diff(s) as {label}: {:?}",
        diffs.len(),
        scores.iter().collect::<Vec<_>>()
    );
    label
}
