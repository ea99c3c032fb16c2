//! The planner aggregate: all six collections persisted as one blob.

use super::education::EducationItem;
use super::financial::FinancialItem;
use super::fund::Fund;
use super::goal::Goal;
use super::investment::InvestmentItem;
use super::target::Target;
use serde::{Deserialize, Serialize};

/// Single unit of persistence.
///
/// Collection order is insertion order and doubles as display order. Missing
/// arrays in stored data load as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerData {
    pub goals: Vec<Goal>,
    pub targets: Vec<Target>,
    pub education: Vec<EducationItem>,
    pub financial: Vec<FinancialItem>,
    pub investments: Vec<InvestmentItem>,
    pub funds: Vec<Fund>,
}

impl PlannerData {
    /// Returns whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
            && self.targets.is_empty()
            && self.education.is_empty()
            && self.financial.is_empty()
            && self.investments.is_empty()
            && self.funds.is_empty()
    }

    /// Total record count across all collections.
    pub fn record_count(&self) -> usize {
        self.goals.len()
            + self.targets.len()
            + self.education.len()
            + self.financial.len()
            + self.investments.len()
            + self.funds.len()
    }
}
