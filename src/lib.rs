//! Formfold derives client-side form validation rules from the constraint
//! metadata a backend already knows about its entities.
//!
//! A backend exposes one JSON endpoint describing, per entity property,
//! whether a value is required, its length bounds, numeric bounds, and how
//! many decimal digits it may carry. Formfold loads that table and turns each
//! field's entry into ready-to-run validators, so the rules live in one place
//! instead of being restated by hand in every form.
//!
//! ## Core Components
//!
//! * **Constraint table** ([`ConstraintTable`]): the deserialized endpoint
//!   payload, keyed by entity and property.
//! * **Loader** ([`ConstraintsLoader`]): fetches the table over HTTP and
//!   publishes it to a [`ConstraintsStore`], dropping stale responses when
//!   loads race.
//! * **Rule selection** ([`select_rules`], [`FormField`]): classifies a
//!   field's input type and derives its validator list in a fixed order.
//! * **Validators** ([`validation::validators`]): small shared closures over
//!   optional JSON values producing structured [`ValidationError`]s.
//!
//! ## Example
//!
//! ```no_run
//! use formfold::{ConstraintsConfig, ConstraintsLoader, FormField};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), formfold::FormfoldError> {
//! let config = ConstraintsConfig::builder()
//!     .constraints_url("http://localhost:8080/api/constraints")
//!     .build()?;
//!
//! ConstraintsLoader::new(config.clone())?.load().await?;
//!
//! let mut name = FormField::new("name", "Hero.name", "Name");
//! if let Some(error) = name.check(&config, Some(&json!("ab")))? {
//!     println!("rejected: {}", error.kind);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constraints;
pub mod error;
pub mod field;
pub mod rules;
pub mod validation;

pub use config::{ConstraintsConfig, ConstraintsConfigBuilder};
pub use constraints::{
    ConstraintTable, ConstraintsLoader, ConstraintsStore, FieldConstraints, FieldRef, InputType,
    PublishTicket, SharedConstraintsStore,
};
pub use error::{FormfoldError, FormfoldResult};
pub use field::FormField;
pub use rules::{
    select_rules, select_rules_cached, RuleKind, RuleOutcome, RuleSelection, ValidatorCache,
};
pub use validation::{run_validators, ValidationError, ValidationErrorKind, Validator};
