//! Education items: courses, books, skills and certifications.

use super::planner_data::PlannerData;
use super::record::{
    clamp_percent, iso_millis, require_title, CollectionKind, DraftValidationError, Record,
    RecordDraft, RecordId, RecordPatch, Status,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationType {
    #[default]
    Course,
    Book,
    Skill,
    Certification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: RecordId,
    pub title: String,
    /// Serialized as `type` to match the stored layout.
    #[serde(rename = "type")]
    pub kind: EducationType,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    pub progress: i32,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub title: String,
    pub kind: EducationType,
    pub description: String,
    pub status: Status,
    pub progress: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub title: Option<String>,
    pub kind: Option<EducationType>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub progress: Option<i32>,
}

impl Record for EducationItem {
    type Draft = EducationDraft;
    type Patch = EducationPatch;

    const COLLECTION: CollectionKind = CollectionKind::Education;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: EducationDraft) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind,
            description: draft.description,
            status: draft.status,
            progress: draft.progress,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: EducationPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
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
    }

    fn clamp_progress(&mut self) {
        self.progress = clamp_percent(self.progress);
    }

    fn collection(data: &PlannerData) -> &Vec<Self> {
        &data.education
    }

    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self> {
        &mut data.education
    }
}

impl RecordDraft for EducationDraft {
    type Record = EducationItem;

    fn validate(&self) -> Result<(), DraftValidationError> {
        require_title(CollectionKind::Education, &self.title)
    }
}

impl RecordPatch for EducationPatch {
    type Record = EducationItem;
}
