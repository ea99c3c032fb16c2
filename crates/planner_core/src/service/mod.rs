//! Use-case services over storage.
//!
//! # Responsibility
//! - Own the process-wide stores (planner data, subscription, theme, rate prompt).
//! - Keep presentation callers decoupled from storage details.

pub mod context;
pub mod planner_store;
pub mod rate_prompt;
pub mod subscription;
pub mod theme;
