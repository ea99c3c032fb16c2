//! Derived read-only views over the planner collections.
//!
//! Nothing here is stored; callers recompute on every read.

pub mod finance;
pub mod progress;
pub mod urgency;

pub use finance::{
    financial_by_type, financial_totals, investment_totals, FinancialTotals, InvestmentTotals,
};
pub use progress::{display_progress, fund_progress, overall_fund_progress, FundProgress, FundSummary};
pub use urgency::{days_until, target_urgency, today_local, TargetUrgency};
