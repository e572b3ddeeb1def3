//! # faculty-core
//!
//! Core types and error types for the faculty task store.
//!
//! This crate provides the foundational types shared across all faculty crates:
//! - Entity structs for persisted rows (`Task`, `User`)
//! - The `TaskStatus` enum as stored in the `tasks.status` column
//! - `TaskCreateInput`, the task-creation request shape, with its link validation
//! - `CompletionTime` pairs returned by the analytics queries
//! - `TimeWindow`, the half-open `[start, end)` interval analytics are scoped to
//! - Cross-cutting error types

pub mod dto;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod window;
