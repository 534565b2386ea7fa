use std::collections::HashMap;
use std::fmt;

use crate::validation::Validator;

/// The kind of constraint-derived rule a cached validator implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    MinimumLength,
    MaximumLength,
    MinValue,
    MaxValue,
    Pattern,
}

/// Cache key for one derived validator. Identifier and label both
/// participate, so relabeling a field rebuilds its validators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RuleKey {
    identifier: String,
    label: String,
    kind: RuleKind,
}

/// Keeps derived validators referentially stable.
///
/// Form libraries often re-run setup when a validator instance changes, so
/// repeated rule selection for the same field must hand back the same `Arc`s.
/// One cache belongs to one field instance; it is not shared across fields.
#[derive(Default)]
pub struct ValidatorCache {
    entries: HashMap<RuleKey, Validator>,
}

impl ValidatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached validator for this key, building it on first use.
    pub fn get_or_build(
        &mut self,
        identifier: &str,
        label: &str,
        kind: RuleKind,
        build: impl FnOnce() -> Validator,
    ) -> Validator {
        self.entries
            .entry(RuleKey {
                identifier: identifier.to_string(),
                label: label.to_string(),
                kind,
            })
            .or_insert_with(build)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ValidatorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
