//! Core logic for the yearly life planner.
//! Owns the persisted planner aggregate and the small flag stores around it.

pub mod config;
pub mod db;
pub mod insights;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::{PlannerConfig, ProgressPolicy, WriteFailurePolicy};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::education::{EducationDraft, EducationItem, EducationPatch, EducationType};
pub use model::financial::{FinancialDraft, FinancialItem, FinancialPatch, FinancialType};
pub use model::fund::{Fund, FundAdjustment, FundDraft, FundPatch};
pub use model::goal::{Goal, GoalDraft, GoalPatch};
pub use model::investment::{InvestmentDraft, InvestmentItem, InvestmentPatch, InvestmentStatus};
pub use model::planner_data::PlannerData;
pub use model::record::{
    CollectionKind, DraftValidationError, Record, RecordDraft, RecordId, RecordPatch, Status,
};
pub use model::target::{Target, TargetDraft, TargetPatch};
pub use service::context::PlannerContext;
pub use service::planner_store::{PlannerStore, StoreError, StoreResult, TargetCreation};
pub use service::rate_prompt::RatePrompt;
pub use service::subscription::{PaidPlan, SubscriptionPlan, SubscriptionStore};
pub use service::theme::{Theme, ThemeStore};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
