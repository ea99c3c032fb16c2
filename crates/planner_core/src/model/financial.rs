//! Income, expense and saving entries.

use super::planner_data::PlannerData;
use super::record::{
    iso_millis, lenient_f64, require_amount, require_title, CollectionKind, DraftValidationError,
    Record, RecordDraft, RecordId, RecordPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialType {
    #[default]
    Income,
    Expense,
    Saving,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "lenient_f64")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: FinancialType,
    /// Free-text grouping label, e.g. `salary` or `rent`.
    #[serde(default)]
    pub category: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialDraft {
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub kind: FinancialType,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<FinancialType>,
    pub category: Option<String>,
}

impl Record for FinancialItem {
    type Draft = FinancialDraft;
    type Patch = FinancialPatch;

    const COLLECTION: CollectionKind = CollectionKind::Financial;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: FinancialDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: FinancialPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    fn collection(data: &PlannerData) -> &Vec<Self> {
        &data.financial
    }

    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self> {
        &mut data.financial
    }
}

impl RecordDraft for FinancialDraft {
    type Record = FinancialItem;

    fn validate(&self) -> Result<(), DraftValidationError> {
        require_title(CollectionKind::Financial, &self.title)?;
        require_amount("amount", self.amount)
    }
}

impl RecordPatch for FinancialPatch {
    type Record = FinancialItem;
}
