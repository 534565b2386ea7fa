pub mod field_ref;
pub mod loader;
pub mod store;
pub mod types;

pub use field_ref::FieldRef;
pub use loader::ConstraintsLoader;
pub use store::{ConstraintsStore, PublishTicket, SharedConstraintsStore};
pub use types::{ConstraintTable, FieldConstraints, InputType};
