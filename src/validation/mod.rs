pub mod error;
pub mod patterns;
pub mod validators;

pub use error::{ValidationError, ValidationErrorKind};
pub use validators::{run_validators, Validator};
