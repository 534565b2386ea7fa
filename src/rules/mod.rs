pub mod cache;
pub mod selector;

pub use cache::{RuleKind, ValidatorCache};
pub use selector::{select_rules, select_rules_cached, RuleOutcome, RuleSelection};
