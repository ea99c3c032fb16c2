//! Shared record contracts for the six planner collections.
//!
//! # Responsibility
//! - Define the identity/timestamp shape every record carries.
//! - Describe how drafts become records and how patches merge into them.
//! - Hold the wire helpers for timestamps, optional dates and amounts.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once, by the store, and never patched.
//! - `created_at` carries millisecond precision so it survives a JSON round-trip.

use super::planner_data::PlannerData;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every planner record.
pub type RecordId = Uuid;

/// Completion state shared by goals, targets and education items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Collection selector for the planner aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Goals,
    Targets,
    Education,
    Financial,
    Investments,
    Funds,
}

impl CollectionKind {
    /// Field name of this collection in the persisted aggregate.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::Targets => "targets",
            Self::Education => "education",
            Self::Financial => "financial",
            Self::Investments => "investments",
            Self::Funds => "funds",
        }
    }
}

impl Display for CollectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-side required-field failures.
///
/// The store never runs these checks itself; forms call `validate()` and skip
/// the store operation on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    BlankTitle(CollectionKind),
    NegativeAmount(&'static str),
    NonFiniteNumber(&'static str),
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle(kind) => write!(f, "{kind} entry requires a non-empty title"),
            Self::NegativeAmount(field) => write!(f, "{field} must be >= 0"),
            Self::NonFiniteNumber(field) => write!(f, "{field} must be a finite number"),
        }
    }
}

impl Error for DraftValidationError {}

/// One entry of a planner collection.
///
/// The implementing type doubles as the collection selector: generic store
/// operations find the right `Vec` through `collection`/`collection_mut`.
pub trait Record: Clone + PartialEq {
    /// Record fields without generated identity.
    type Draft;
    /// Partial update; `None` fields are left untouched.
    type Patch;

    const COLLECTION: CollectionKind;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> DateTime<Utc>;

    /// Builds a record from a draft with store-assigned identity.
    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Merges `patch` into this record.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Clamps percentage fields into `[0, 100]`. No-op for kinds without progress.
    fn clamp_progress(&mut self) {}

    fn collection(data: &PlannerData) -> &Vec<Self>;
    fn collection_mut(data: &mut PlannerData) -> &mut Vec<Self>;
}

/// Draft side of a record kind, used to infer the target collection on add.
pub trait RecordDraft: Sized {
    type Record: Record<Draft = Self>;

    /// Required-field check performed by callers before adding.
    fn validate(&self) -> Result<(), DraftValidationError>;
}

/// Patch side of a record kind, used to infer the target collection on update.
pub trait RecordPatch: Sized {
    type Record: Record<Patch = Self>;
}

/// Creation instant with millisecond precision.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub(crate) fn clamp_percent(value: i32) -> i32 {
    value.clamp(0, 100)
}

pub(crate) fn require_title(
    kind: CollectionKind,
    title: &str,
) -> Result<(), DraftValidationError> {
    if title.trim().is_empty() {
        return Err(DraftValidationError::BlankTitle(kind));
    }
    Ok(())
}

pub(crate) fn require_amount(field: &'static str, value: f64) -> Result<(), DraftValidationError> {
    if !value.is_finite() {
        return Err(DraftValidationError::NonFiniteNumber(field));
    }
    if value < 0.0 {
        return Err(DraftValidationError::NegativeAmount(field));
    }
    Ok(())
}

/// `createdAt` wire format: RFC 3339, milliseconds, `Z` suffix.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Optional calendar date; the form writes `""` when no date is picked.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Amount fields; a stored `null` (how JSON encodes a non-finite number)
/// loads as `0.0` instead of failing the whole aggregate.
pub(crate) mod lenient_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.filter(|value| value.is_finite()).unwrap_or(0.0))
    }
}
