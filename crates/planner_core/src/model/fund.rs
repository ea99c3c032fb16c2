//! Savings funds with a target and a running balance.

use super::planner_data::PlannerData;
use super::record::{
    iso_millis, lenient_f64, require_amount, require_title, CollectionKind, DraftValidationError,
    Record, RecordDraft, RecordId, RecordPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: RecordId,
    /// Funds carry a `name` where other kinds carry a `title`.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "lenient_f64")]
    pub target_amount: f64,
    #[serde(with = "lenient_f64")]
    pub current_amount: f64,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundDraft {
    pub name: String,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
}

/// Quick balance change applied from the fund card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FundAdjustment {
    Deposit(f64),
    /// Balance never drops below zero.
    Withdraw(f64),
}

impl FundAdjustment {
    /// Returns the new balance, or `None` when the amount is not a positive
    /// finite number or the resulting balance would not be finite.
    pub fn apply_to(self, current_amount: f64) -> Option<f64> {
        let (amount, deposit) = match self {
            Self::Deposit(amount) => (amount, true),
            Self::Withdraw(amount) => (amount, false),
        };
        if !amount.is_finite() || amount <= 0.0 {
            return None;
        }
        let balance = if deposit {
            current_amount + amount
        } else {
            (current_amount - amount).max(0.0)
        };
        balance.is_finite().then_some(balance)
    }
}

impl Record for Fund {
    type Draft = FundDraft;
    type Patch = FundPatch;

    const COLLECTION: CollectionKind = CollectionKind::Funds;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: FundDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            target_amount: draft.target_amount,
            current_amount: draft.current_amount,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: FundPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(target_amount) = patch.target_amount {
            self.target_amount = target_amount;
        }
        if let Some(current_amount) = patch.current_amount {
            self.current_amount = current_amount;
        }
    }

    fn collection(data: &PlannerData) -> &Vec<Self> {
        &data.funds
    }

    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self> {
        &mut data.funds
    }
}

impl RecordDraft for FundDraft {
    type Record = Fund;

    fn validate(&self) -> Result<(), DraftValidationError> {
        require_title(CollectionKind::Funds, &self.name)?;
        require_amount("targetAmount", self.target_amount)?;
        require_amount("currentAmount", self.current_amount)
    }
}

impl RecordPatch for FundPatch {
    type Record = Fund;
}

#[cfg(test)]
mod tests {
    use super::FundAdjustment;

    #[test]
    fn withdraw_floors_at_zero() {
        assert_eq!(FundAdjustment::Withdraw(80.0).apply_to(50.0), Some(0.0));
        assert_eq!(FundAdjustment::Withdraw(20.0).apply_to(50.0), Some(30.0));
    }

    #[test]
    fn non_positive_amounts_are_ignored() {
        assert_eq!(FundAdjustment::Deposit(0.0).apply_to(50.0), None);
        assert_eq!(FundAdjustment::Deposit(-3.0).apply_to(50.0), None);
        assert_eq!(FundAdjustment::Withdraw(f64::INFINITY).apply_to(50.0), None);
        assert_eq!(FundAdjustment::Deposit(25.0).apply_to(50.0), Some(75.0));
    }

    #[test]
    fn overflowing_deposit_is_rejected() {
        assert_eq!(FundAdjustment::Deposit(f64::MAX).apply_to(f64::MAX), None);
        assert_eq!(FundAdjustment::Withdraw(1.0).apply_to(f64::INFINITY), None);
    }
}
