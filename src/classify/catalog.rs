//! Trigger keywords per change type.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::ChangeType;

static BUILTIN: LazyLock<KeywordCatalog> = LazyLock::new(|| {
    KeywordCatalog::new(ChangeType::Chore)
        .with_triggers(
            ChangeType::Feat,
            ["feat", "feature", "add", "new", "implement", "introduce", "support"],
        )
        .with_triggers(
            ChangeType::Fix,
            ["fix", "bug", "issue", "error", "crash", "resolve", "patch"],
        )
        .with_triggers(
            ChangeType::Docs,
            ["doc", "readme", "comment", "documentation", "guide", "changelog"],
        )
        .with_triggers(
            ChangeType::Style,
            ["style", "format", "lint", "whitespace", "indent", "prettier"],
        )
        .with_triggers(
            ChangeType::Refactor,
            ["refactor", "restructure", "rename", "cleanup", "simplify", "extract"],
        )
        .with_triggers(
            ChangeType::Test,
            ["test", "spec", "assert", "mock", "expect", "coverage"],
        )
        .with_triggers(
            ChangeType::Chore,
            ["chore", "deps", "dependency", "config", "build", "version", "bump"],
        )
});

/// Maps every [`ChangeType`] to an ordered list of lowercase trigger substrings.
///
/// Every label always has an entry (possibly empty) and exactly one label is
/// the fallback returned when no label wins outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    triggers: BTreeMap<ChangeType, Vec<String>>,
    fallback: ChangeType,
}

impl KeywordCatalog {
    /// An empty catalog: every label present with no triggers.
    pub fn new(fallback: ChangeType) -> Self {
        let triggers = ChangeType::ALL
            .into_iter()
            .map(|ty| (ty, Vec::new()))
            .collect();
        Self { triggers, fallback }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static KeywordCatalog {
        &BUILTIN
    }

    /// Replace the triggers for `label`. Triggers are lowercased and
    /// duplicates dropped, keeping first-seen order.
    pub fn with_triggers<I, S>(mut self, label: ChangeType, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for trigger in triggers {
            let trigger = trigger.as_ref().to_lowercase();
            if !trigger.is_empty() && !list.contains(&trigger) {
                list.push(trigger);
            }
        }
        self.triggers.insert(label, list);
        self
    }

    pub fn triggers(&self, label: ChangeType) -> &[String] {
        self.triggers.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fallback(&self) -> ChangeType {
        self.fallback
    }

    /// Labels with their triggers, in [`ChangeType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ChangeType, &[String])> + '_ {
        self.triggers.iter().map(|(ty, list)| (*ty, list.as_slice()))
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_label() {
        let catalog = KeywordCatalog::builtin();
        assert_eq!(catalog.iter().count(), ChangeType::ALL.len());
        for ty in ChangeType::ALL {
            assert!(!catalog.triggers(ty).is_empty(), "no triggers for {ty}");
        }
        assert_eq!(catalog.fallback(), ChangeType::Chore);
    }

    #[test]
    fn test_new_catalog_has_empty_entries() {
        let catalog = KeywordCatalog::new(ChangeType::Docs);
        assert_eq!(catalog.iter().count(), 7);
        assert!(catalog.triggers(ChangeType::Feat).is_empty());
        assert_eq!(catalog.fallback(), ChangeType::Docs);
    }

    #[test]
    fn test_with_triggers_lowercases_and_dedups() {
        let catalog = KeywordCatalog::new(ChangeType::Chore)
            .with_triggers(ChangeType::Fix, ["Fix", "BUG", "fix", ""]);
        assert_eq!(catalog.triggers(ChangeType::Fix), ["fix", "bug"]);
    }
}
