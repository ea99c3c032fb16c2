//! Generic keyed collection over `Vec<R: Record>`.
//!
//! Insertion order is display order, so every operation keeps the vector in
//! place instead of re-sorting.

use crate::model::record::{now_millis, Record, RecordId};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Appends a record built from `draft` and returns its generated id.
pub fn insert<R: Record>(records: &mut Vec<R>, draft: R::Draft) -> RecordId {
    insert_at(records, draft, now_millis())
}

/// Same as `insert` with a caller-supplied creation instant.
pub fn insert_at<R: Record>(
    records: &mut Vec<R>,
    draft: R::Draft,
    created_at: DateTime<Utc>,
) -> RecordId {
    let id = fresh_id(records);
    records.push(R::from_draft(id, created_at, draft));
    id
}

pub fn find<R: Record>(records: &[R], id: RecordId) -> Option<&R> {
    records.iter().find(|record| record.id() == id)
}

pub fn find_mut<R: Record>(records: &mut [R], id: RecordId) -> Option<&mut R> {
    records.iter_mut().find(|record| record.id() == id)
}

/// Merges `patch` into the record with `id`.
///
/// Returns the updated record, or `None` when no record matched.
pub fn merge<R: Record>(records: &mut [R], id: RecordId, patch: R::Patch) -> Option<&mut R> {
    let record = find_mut(records, id)?;
    record.apply_patch(patch);
    Some(record)
}

/// Removes the record with `id`, returning whether anything was removed.
pub fn remove<R: Record>(records: &mut Vec<R>, id: RecordId) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    records.len() != before
}

fn fresh_id<R: Record>(records: &[R]) -> RecordId {
    loop {
        let id = Uuid::new_v4();
        if find(records, id).is_none() {
            return id;
        }
    }
}
