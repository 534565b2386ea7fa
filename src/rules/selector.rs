use std::fmt;

use log::warn;

use crate::constraints::{ConstraintTable, FieldRef, InputType};
use crate::error::FormfoldResult;
use crate::rules::cache::{RuleKind, ValidatorCache};
use crate::validation::{patterns, validators, Validator};

/// How a rule selection resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Constraints were found and rules were derived from them.
    Applied,
    /// The table is loaded but has no entry for this field.
    ConstraintsNotFound,
    /// No constraint table has been loaded yet.
    TableNotLoaded,
}

/// Result of a rule selection: the outcome plus the final validator list.
///
/// The list always starts with the caller's own validators. Derived rules are
/// appended only when the outcome is [`RuleOutcome::Applied`].
pub struct RuleSelection {
    pub outcome: RuleOutcome,
    pub validators: Vec<Validator>,
}

impl fmt::Debug for RuleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSelection")
            .field("outcome", &self.outcome)
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Derives the validator list for a field from the constraint table.
///
/// Rules are appended after `existing` in a fixed order: required, minimum
/// length, maximum length, minimum value, maximum value, number pattern.
/// Length rules apply only to text fields and the pattern rule only to number
/// fields. A missing table or a missing entry is not an error; the field
/// simply keeps its base validators and the outcome says why.
///
/// The `cache` keeps derived validators referentially stable across repeated
/// selections for the same field, see [`ValidatorCache`].
pub fn select_rules_cached(
    cache: &mut ValidatorCache,
    identifier: &str,
    label: &str,
    existing: &[Validator],
    table: Option<&ConstraintTable>,
) -> FormfoldResult<RuleSelection> {
    let field = FieldRef::parse(identifier)?;
    let mut validators_out = existing.to_vec();

    let Some(table) = table else {
        warn!(
            "No constraint table loaded yet; field '{}' keeps its base validators",
            field
        );
        return Ok(RuleSelection {
            outcome: RuleOutcome::TableNotLoaded,
            validators: validators_out,
        });
    };

    let Some(constraints) = table.constraints_for(&field) else {
        warn!("No constraints found for field '{}'", field);
        return Ok(RuleSelection {
            outcome: RuleOutcome::ConstraintsNotFound,
            validators: validators_out,
        });
    };

    let input_type = InputType::most_specific_for(&constraints.types);

    if constraints.required == Some(true) {
        validators_out.push(cache.get_or_build(identifier, label, RuleKind::Required, || {
            validators::required(label)
        }));
    }

    if input_type == InputType::Text {
        match constraints.minimum_length {
            Some(minimum) if minimum > 0 => {
                validators_out.push(cache.get_or_build(
                    identifier,
                    label,
                    RuleKind::MinimumLength,
                    || validators::minimum_length(label, minimum),
                ));
            }
            _ => {}
        }
        if let Some(maximum) = constraints.maximum_length {
            validators_out.push(cache.get_or_build(
                identifier,
                label,
                RuleKind::MaximumLength,
                || validators::maximum_length(label, maximum),
            ));
        }
    }

    if let Some(minimum) = constraints.min {
        validators_out.push(cache.get_or_build(identifier, label, RuleKind::MinValue, || {
            validators::min_value(label, minimum)
        }));
    }

    if let Some(maximum) = constraints.max {
        validators_out.push(cache.get_or_build(identifier, label, RuleKind::MaxValue, || {
            validators::max_value(label, maximum)
        }));
    }

    if input_type == InputType::Number {
        let fraction_length = constraints.fraction_length;
        validators_out.push(cache.get_or_build(identifier, label, RuleKind::Pattern, || {
            let regex = match fraction_length {
                Some(digits) if digits > 0 => patterns::fraction_number(digits),
                _ => patterns::integer_number().clone(),
            };
            validators::pattern(label, regex)
        }));
    }

    Ok(RuleSelection {
        outcome: RuleOutcome::Applied,
        validators: validators_out,
    })
}

/// One-shot variant of [`select_rules_cached`] for callers that do not keep a
/// field around. Every call builds fresh validator instances.
pub fn select_rules(
    identifier: &str,
    label: &str,
    existing: &[Validator],
    table: Option<&ConstraintTable>,
) -> FormfoldResult<RuleSelection> {
    select_rules_cached(&mut ValidatorCache::new(), identifier, label, existing, table)
}
