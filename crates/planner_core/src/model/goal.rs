//! Yearly goal records.

use super::planner_data::PlannerData;
use super::record::{
    clamp_percent, iso_millis, optional_date, require_title, CollectionKind,
    DraftValidationError, Record, RecordDraft, RecordId, RecordPatch, Status,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Open-ended goal with optional due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    pub progress: i32,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_date"
    )]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub progress: i32,
    pub due_date: Option<NaiveDate>,
}

/// Partial goal update. `due_date: Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub progress: Option<i32>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl Record for Goal {
    type Draft = GoalDraft;
    type Patch = GoalPatch;

    const COLLECTION: CollectionKind = CollectionKind::Goals;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: GoalDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            progress: draft.progress,
            created_at,
            due_date: draft.due_date,
        }
    }

    fn apply_patch(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }

    fn clamp_progress(&mut self) {
        self.progress = clamp_percent(self.progress);
    }

    fn collection(data: &PlannerData) -> &Vec<Self> {
        &data.goals
    }

    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self> {
        &mut data.goals
    }
}

impl RecordDraft for GoalDraft {
    type Record = Goal;

    fn validate(&self) -> Result<(), DraftValidationError> {
        require_title(CollectionKind::Goals, &self.title)
    }
}

impl RecordPatch for GoalPatch {
    type Record = Goal;
}
