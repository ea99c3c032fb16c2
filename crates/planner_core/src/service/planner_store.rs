//! Planner Store: the in-memory aggregate mirrored to durable storage.
//!
//! # Responsibility
//! - Load the aggregate once, falling back to empty on any read problem.
//! - Expose add/update/delete for every collection through one generic path.
//! - Rewrite the whole aggregate after each mutation (write-through).
//!
//! # Invariants
//! - Nothing is written before the initial load has completed.
//! - A failed write never rolls back the in-memory mutation.
//! - Store operations do not validate drafts; callers run `validate()` first.
//! - A non-finite amount is written as `null` and reloads as `0.0`; the rest of
//!   the aggregate is unaffected.

use crate::config::{PlannerConfig, ProgressPolicy, WriteFailurePolicy};
use crate::model::fund::{Fund, FundAdjustment, FundPatch};
use crate::model::planner_data::PlannerData;
use crate::model::record::{Record, RecordDraft, RecordId, RecordPatch};
use crate::model::target::TargetDraft;
use crate::repo::collection;
use crate::service::subscription::SubscriptionStore;
use crate::storage::{KeyValueStorage, StorageError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Only returned under `WriteFailurePolicy::Surface`.
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to persist planner data: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize planner data: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Outcome of the subscription-gated target entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCreation {
    Created(RecordId),
    /// Free-plan limit reached; the paywall was opened instead.
    UpgradeRequired,
}

pub struct PlannerStore<S: KeyValueStorage> {
    storage: S,
    config: PlannerConfig,
    data: PlannerData,
    loaded: bool,
}

impl<S: KeyValueStorage> PlannerStore<S> {
    /// Creates a store holding the empty aggregate without touching storage.
    ///
    /// Mutations on an unloaded store stay in memory only.
    pub fn unloaded(storage: S, config: PlannerConfig) -> Self {
        Self {
            storage,
            config,
            data: PlannerData::default(),
            loaded: false,
        }
    }

    /// Creates a store and performs the initial read.
    pub fn load(storage: S, config: PlannerConfig) -> Self {
        let mut store = Self::unloaded(storage, config);
        store.load_from_storage();
        store
    }

    /// Replaces the in-memory aggregate with the stored one and marks the
    /// store loaded. Never fails: unreadable data yields the empty aggregate.
    pub fn load_from_storage(&mut self) {
        self.data = read_aggregate(&self.storage, &self.config.data_key);
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn data(&self) -> &PlannerData {
        &self.data
    }

    /// Records of one collection in display order.
    pub fn records<R: Record>(&self) -> &[R] {
        R::collection(&self.data)
    }

    pub fn get<R: Record>(&self, id: RecordId) -> Option<&R> {
        collection::find(R::collection(&self.data), id)
    }

    /// Appends a new record to the collection matching the draft type.
    pub fn add<D: RecordDraft>(&mut self, draft: D) -> StoreResult<RecordId> {
        let records = <D::Record as Record>::collection_mut(&mut self.data);
        let id = collection::insert(records, draft);
        if self.config.progress_policy == ProgressPolicy::Clamp {
            if let Some(record) = records.last_mut() {
                record.clamp_progress();
            }
        }
        debug!(
            "event=record_add module=store status=ok collection={} id={id}",
            <D::Record as Record>::COLLECTION
        );

        self.persist()?;
        Ok(id)
    }

    /// Merges `patch` into the record with `id`.
    ///
    /// Returns `Ok(false)` without persisting when no record has that id.
    pub fn update<P: RecordPatch>(&mut self, id: RecordId, patch: P) -> StoreResult<bool> {
        let clamp = self.config.progress_policy == ProgressPolicy::Clamp;
        let records = <P::Record as Record>::collection_mut(&mut self.data);
        match collection::merge(records, id, patch) {
            Some(record) if clamp => record.clamp_progress(),
            Some(_) => {}
            None => {
                debug!(
                    "event=record_update module=store status=skipped reason=not_found collection={} id={id}",
                    <P::Record as Record>::COLLECTION
                );
                return Ok(false);
            }
        }

        self.persist()?;
        Ok(true)
    }

    /// Removes the record with `id` from collection `R`.
    ///
    /// Returns `Ok(false)` without persisting when no record has that id.
    pub fn delete<R: Record>(&mut self, id: RecordId) -> StoreResult<bool> {
        if !collection::remove(R::collection_mut(&mut self.data), id) {
            debug!(
                "event=record_delete module=store status=skipped reason=not_found collection={} id={id}",
                R::COLLECTION
            );
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Target creation entry point honoring the free-plan limit.
    pub fn create_target<T: KeyValueStorage>(
        &mut self,
        subscription: &mut SubscriptionStore<T>,
        draft: TargetDraft,
    ) -> StoreResult<TargetCreation> {
        let count = self.data.targets.len();
        if !subscription.is_premium() && count >= self.config.free_target_limit {
            info!(
                "event=target_create module=store status=blocked plan={} count={count} limit={}",
                subscription.plan().as_str(),
                self.config.free_target_limit
            );
            subscription.open_paywall();
            return Ok(TargetCreation::UpgradeRequired);
        }

        self.add(draft).map(TargetCreation::Created)
    }

    /// Applies a quick deposit/withdrawal to a fund balance.
    ///
    /// Returns `Ok(false)` for unknown ids, non-positive amounts and balances
    /// that would overflow.
    pub fn adjust_fund(&mut self, id: RecordId, adjustment: FundAdjustment) -> StoreResult<bool> {
        let Some(fund) = self.get::<Fund>(id) else {
            return Ok(false);
        };
        let Some(current_amount) = adjustment.apply_to(fund.current_amount) else {
            return Ok(false);
        };

        self.update(
            id,
            FundPatch {
                current_amount: Some(current_amount),
                ..FundPatch::default()
            },
        )
    }

    /// Serializes and writes the whole aggregate under the data key.
    ///
    /// No-op until the initial load has completed.
    pub fn persist(&self) -> StoreResult<()> {
        if !self.loaded {
            debug!("event=planner_persist module=store status=skipped reason=not_loaded");
            return Ok(());
        }

        let payload = serde_json::to_string(&self.data)?;
        match self.storage.set(&self.config.data_key, &payload) {
            Ok(()) => Ok(()),
            Err(err) => match self.config.write_failure_policy {
                WriteFailurePolicy::Ignore => {
                    warn!(
                        "event=planner_persist module=store status=ignored key={} error={err}",
                        self.config.data_key
                    );
                    Ok(())
                }
                WriteFailurePolicy::Surface => {
                    error!(
                        "event=planner_persist module=store status=error key={} error={err}",
                        self.config.data_key
                    );
                    Err(err.into())
                }
            },
        }
    }
}

fn read_aggregate<S: KeyValueStorage>(storage: &S, key: &str) -> PlannerData {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=planner_load module=store status=empty key={key}");
            return PlannerData::default();
        }
        Err(err) => {
            warn!(
                "event=planner_load module=store status=fallback reason=read_failed key={key} error={err}"
            );
            return PlannerData::default();
        }
    };

    match serde_json::from_str::<PlannerData>(&raw) {
        Ok(data) => {
            info!(
                "event=planner_load module=store status=ok key={key} records={}",
                data.record_count()
            );
            data
        }
        Err(err) => {
            warn!(
                "event=planner_load module=store status=fallback reason=malformed key={key} error={err}"
            );
            PlannerData::default()
        }
    }
}
