//! Investment positions, held or planned.

use super::planner_data::PlannerData;
use super::record::{
    iso_millis, lenient_f64, require_amount, require_title, CollectionKind, DraftValidationError,
    Record, RecordDraft, RecordId, RecordPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentStatus {
    Active,
    #[default]
    Planned,
    Sold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "lenient_f64")]
    pub amount: f64,
    /// Signed percentage; negative values are losses.
    #[serde(with = "lenient_f64")]
    pub return_rate: f64,
    pub status: InvestmentStatus,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentDraft {
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub return_rate: f64,
    pub status: InvestmentStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub return_rate: Option<f64>,
    pub status: Option<InvestmentStatus>,
}

impl Record for InvestmentItem {
    type Draft = InvestmentDraft;
    type Patch = InvestmentPatch;

    const COLLECTION: CollectionKind = CollectionKind::Investments;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: InvestmentDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            amount: draft.amount,
            return_rate: draft.return_rate,
            status: draft.status,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: InvestmentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(return_rate) = patch.return_rate {
            self.return_rate = return_rate;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn collection(data: &PlannerData) -> &Vec<Self> {
        &data.investments
    }

    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self> {
        &mut data.investments
    }
}

impl RecordDraft for InvestmentDraft {
    type Record = InvestmentItem;

    fn validate(&self) -> Result<(), DraftValidationError> {
        require_title(CollectionKind::Investments, &self.title)?;
        require_amount("amount", self.amount)?;
        if !self.return_rate.is_finite() {
            return Err(DraftValidationError::NonFiniteNumber("returnRate"));
        }
        Ok(())
    }
}

impl RecordPatch for InvestmentPatch {
    type Record = InvestmentItem;
}
