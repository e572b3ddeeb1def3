//! Entity structs for persisted faculty rows.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema checks.

mod task;
mod user;

pub use task::{CompletionTime, Task};
pub use user::User;
