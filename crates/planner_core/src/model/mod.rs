//! Planner domain model.
//!
//! # Responsibility
//! - Define the six record kinds and their draft/patch shapes.
//! - Define the `PlannerData` aggregate and its persisted wire layout.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` assigned at creation.
//! - Collections are independent; no record references another.
//! - Deletion is a hard delete; there are no tombstones.

pub mod education;
pub mod financial;
pub mod fund;
pub mod goal;
pub mod investment;
pub mod planner_data;
pub mod record;
pub mod target;
