//! Collection-level data access.
//!
//! # Responsibility
//! - Implement add/update/delete once for every planner record kind.
//! - Keep id/timestamp assignment out of service orchestration.
//!
//! # Invariants
//! - Operations on unknown ids are no-ops, never errors.
//! - Relative order of untouched records never changes.

pub mod collection;
