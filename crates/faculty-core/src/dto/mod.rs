//! Request-scoped input shapes and their field-level validation.

mod task_create;
mod violation;

pub use task_create::{
    DEFAULT_PRIORITY, LINK_PATTERN, MAX_LINK_LENGTH, MAX_LINKS, TaskCreateInput,
};
pub use violation::{FieldViolation, ValidationReport};
