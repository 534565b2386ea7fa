use std::fmt;

use serde_json::Value;

use crate::config::ConstraintsConfig;
use crate::constraints::InputType;
use crate::error::FormfoldResult;
use crate::rules::{select_rules_cached, RuleSelection, ValidatorCache};
use crate::validation::{run_validators, ValidationError, Validator};

/// One form field bound to a constraint identifier.
///
/// The field carries its own validator cache, so asking the same field for
/// its validators repeatedly hands back the same instances. The `identifier`
/// is the `Entity.property` key into the constraint table, while `name` is
/// whatever the surrounding form calls the field and `label` is the
/// human-readable text carried in validation errors.
pub struct FormField {
    name: String,
    identifier: String,
    label: String,
    base_validators: Vec<Validator>,
    cache: ValidatorCache,
}

impl FormField {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            label: label.into(),
            base_validators: Vec::new(),
            cache: ValidatorCache::new(),
        }
    }

    /// Attaches validators of the caller's own. They always run before any
    /// constraint-derived rule.
    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.base_validators = validators;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Classifies this field's input type from the published constraints.
    /// `None` when no table is loaded or the field has no entry in it.
    pub fn input_type(&self, config: &ConstraintsConfig) -> FormfoldResult<Option<InputType>> {
        let field = crate::constraints::FieldRef::parse(&self.identifier)?;
        let Some(table) = config.store().current() else {
            return Ok(None);
        };
        Ok(table
            .constraints_for(&field)
            .map(|constraints| InputType::most_specific_for(&constraints.types)))
    }

    /// The current validator list for this field: base validators first, then
    /// rules derived from the published constraint table.
    pub fn validators(&mut self, config: &ConstraintsConfig) -> FormfoldResult<RuleSelection> {
        let table = config.store().current();
        select_rules_cached(
            &mut self.cache,
            &self.identifier,
            &self.label,
            &self.base_validators,
            table.as_deref(),
        )
    }

    /// Validates a value against the field's current rules, returning the
    /// first failure if any.
    pub fn check(
        &mut self,
        config: &ConstraintsConfig,
        value: Option<&Value>,
    ) -> FormfoldResult<Option<ValidationError>> {
        let selection = self.validators(config)?;
        Ok(run_validators(&selection.validators, value))
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("identifier", &self.identifier)
            .field("label", &self.label)
            .field("base_validators", &self.base_validators.len())
            .field("cache", &self.cache)
            .finish()
    }
}
