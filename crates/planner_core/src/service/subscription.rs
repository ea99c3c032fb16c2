//! Subscription flag store.
//!
//! # Responsibility
//! - Hold the current plan and the transient paywall flag.
//! - Persist the plan as `{"plan": ..., "isPremium": ...}`.
//!
//! # Invariants
//! - `is_premium()` is derived from the plan; the stored flag is never trusted.
//! - Unknown or malformed stored plans load as `free`.
//! - Storage write failures are logged and otherwise ignored.

use crate::storage::KeyValueStorage;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Monthly,
    Yearly,
}

impl SubscriptionPlan {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn is_premium(self) -> bool {
        self != Self::Free
    }

    fn parse_stored(value: &str) -> Self {
        match value {
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => Self::Free,
        }
    }
}

/// Plans a user can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidPlan {
    Monthly,
    Yearly,
}

impl From<PaidPlan> for SubscriptionPlan {
    fn from(value: PaidPlan) -> Self {
        match value {
            PaidPlan::Monthly => Self::Monthly,
            PaidPlan::Yearly => Self::Yearly,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredSubscription {
    plan: SubscriptionPlan,
    is_premium: bool,
}

pub struct SubscriptionStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    plan: SubscriptionPlan,
    paywall_open: bool,
}

impl<S: KeyValueStorage> SubscriptionStore<S> {
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let plan = read_plan(&storage, &key);
        info!(
            "event=subscription_load module=subscription status=ok plan={}",
            plan.as_str()
        );
        Self {
            storage,
            key,
            plan,
            paywall_open: false,
        }
    }

    pub fn plan(&self) -> SubscriptionPlan {
        self.plan
    }

    pub fn is_premium(&self) -> bool {
        self.plan.is_premium()
    }

    pub fn is_paywall_open(&self) -> bool {
        self.paywall_open
    }

    pub fn open_paywall(&mut self) {
        self.paywall_open = true;
    }

    pub fn close_paywall(&mut self) {
        self.paywall_open = false;
    }

    /// Switches to a paid plan and closes the paywall.
    pub fn subscribe(&mut self, plan: PaidPlan) {
        self.plan = plan.into();
        self.paywall_open = false;
        self.persist();
    }

    /// Returns to the free plan.
    pub fn cancel(&mut self) {
        self.plan = SubscriptionPlan::Free;
        self.persist();
    }

    fn persist(&self) {
        let stored = StoredSubscription {
            plan: self.plan,
            is_premium: self.plan.is_premium(),
        };
        let result = serde_json::to_string(&stored)
            .map_err(|err| err.to_string())
            .and_then(|payload| {
                self.storage
                    .set(&self.key, &payload)
                    .map_err(|err| err.to_string())
            });
        if let Err(err) = result {
            warn!(
                "event=subscription_persist module=subscription status=ignored key={} error={err}",
                self.key
            );
        }
    }
}

fn read_plan<S: KeyValueStorage>(storage: &S, key: &str) -> SubscriptionPlan {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SubscriptionPlan::Free,
        Err(err) => {
            warn!("event=subscription_load module=subscription status=fallback reason=read_failed error={err}");
            return SubscriptionPlan::Free;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => value
            .get("plan")
            .and_then(Value::as_str)
            .map_or(SubscriptionPlan::Free, SubscriptionPlan::parse_stored),
        Err(err) => {
            warn!("event=subscription_load module=subscription status=fallback reason=malformed error={err}");
            SubscriptionPlan::Free
        }
    }
}
