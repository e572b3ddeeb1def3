//! Repository modules implementing queries for the faculty tables.
//!
//! Each module adds methods to `FacultyDb` via `impl FacultyDb` blocks.

pub mod task;
pub mod task_analytics;
pub mod user;
