//! Deadline-bound target records.
//!
//! Targets are the only collection gated by the subscription plan; see
//! `PlannerStore::create_target`.

use super::planner_data::PlannerData;
use super::record::{
    clamp_percent, iso_millis, require_title, CollectionKind, DraftValidationError, Record,
    RecordDraft, RecordId, RecordPatch, Status,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    pub progress: i32,
    /// Calendar deadline, serialized as `YYYY-MM-DD`.
    pub deadline: NaiveDate,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub progress: i32,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub progress: Option<i32>,
    pub deadline: Option<NaiveDate>,
}

impl Record for Target {
    type Draft = TargetDraft;
    type Patch = TargetPatch;

    const COLLECTION: CollectionKind = CollectionKind::Targets;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: TargetDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            progress: draft.progress,
            deadline: draft.deadline,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: TargetPatch) {
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
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
    }

    fn clamp_progress(&mut self) {
        self.progress = clamp_percent(self.progress);
    }

    fn collection(data: &PlannerData) -> &Vec<Self> {
        &data.targets
    }

    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self> {
        &mut data.targets
    }
}

impl RecordDraft for TargetDraft {
    type Record = Target;

    fn validate(&self) -> Result<(), DraftValidationError> {
        require_title(CollectionKind::Targets, &self.title)
    }
}

impl RecordPatch for TargetPatch {
    type Record = Target;
}
