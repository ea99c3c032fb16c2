//! Usage-based "rate us" prompt state.
//!
//! # Responsibility
//! - Accumulate foreground usage time across sessions.
//! - Decide when the prompt is due and remember snooze/opt-out choices.
//!
//! # Invariants
//! - Once opted out, the prompt never opens again.
//! - A snooze pushes the next prompt one full delay past current usage.
//! - Unparseable stored numbers count as absent.

use crate::storage::KeyValueStorage;
use log::{info, warn};

pub const NEVER_KEY: &str = "planner-rate-never";
pub const SNOOZE_KEY: &str = "planner-rate-snooze-usage-until";
pub const USAGE_KEY: &str = "planner-rate-usage-ms";
/// Total use time before the first prompt: five minutes.
pub const PROMPT_DELAY_MS: u64 = 5 * 60 * 1000;

pub struct RatePrompt<S: KeyValueStorage> {
    storage: S,
    usage_ms: u64,
    snooze_until_ms: Option<u64>,
    open: bool,
}

impl<S: KeyValueStorage> RatePrompt<S> {
    pub fn load(storage: S) -> Self {
        let usage_ms = read_millis(&storage, USAGE_KEY).unwrap_or(0);
        let snooze_until_ms = read_millis(&storage, SNOOZE_KEY);
        Self {
            storage,
            usage_ms,
            snooze_until_ms,
            open: false,
        }
    }

    pub fn usage_ms(&self) -> u64 {
        self.usage_ms
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_opted_out(&self) -> bool {
        matches!(self.storage.get(NEVER_KEY), Ok(Some(value)) if value == "true")
    }

    /// Adds `elapsed_ms` of use time and returns whether the prompt is open.
    ///
    /// Usage stops accumulating while the prompt is showing.
    pub fn record_usage(&mut self, elapsed_ms: u64) -> bool {
        if self.is_opted_out() {
            return false;
        }
        if self.open {
            return true;
        }

        self.usage_ms = self.usage_ms.saturating_add(elapsed_ms);
        self.write(USAGE_KEY, &self.usage_ms.to_string());

        if self.usage_ms < PROMPT_DELAY_MS {
            return false;
        }
        if self.snooze_until_ms.is_some_and(|until| self.usage_ms < until) {
            return false;
        }

        info!(
            "event=rate_prompt module=rate_prompt status=open usage_ms={}",
            self.usage_ms
        );
        self.open = true;
        true
    }

    /// "Later": hide and snooze for another full delay of use time.
    pub fn later(&mut self) {
        let until = self.usage_ms.saturating_add(PROMPT_DELAY_MS);
        self.snooze_until_ms = Some(until);
        self.write(SNOOZE_KEY, &until.to_string());
        self.open = false;
    }

    /// "Don't ask again".
    pub fn never(&mut self) {
        self.opt_out();
    }

    /// User went to the store listing; same persistence as `never`.
    pub fn accepted(&mut self) {
        self.opt_out();
    }

    fn opt_out(&mut self) {
        self.write(NEVER_KEY, "true");
        if let Err(err) = self.storage.remove(SNOOZE_KEY) {
            warn!("event=rate_prompt_persist module=rate_prompt status=ignored key={SNOOZE_KEY} error={err}");
        }
        self.snooze_until_ms = None;
        self.open = false;
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            warn!("event=rate_prompt_persist module=rate_prompt status=ignored key={key} error={err}");
        }
    }
}

fn read_millis<S: KeyValueStorage>(storage: &S, key: &str) -> Option<u64> {
    let raw = storage.get(key).ok().flatten()?;
    let parsed = raw.trim().parse::<f64>().ok()?;
    if parsed.is_finite() && parsed >= 0.0 {
        Some(parsed as u64)
    } else {
        None
    }
}
