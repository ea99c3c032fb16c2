//! Explicit application context handed to the presentation layer.
//!
//! # Responsibility
//! - Construct each process-wide store exactly once, against one storage.
//! - Route cross-store rules (target gate, ad visibility) without globals.

use crate::config::PlannerConfig;
use crate::model::target::TargetDraft;
use crate::service::planner_store::{PlannerStore, StoreResult, TargetCreation};
use crate::service::rate_prompt::RatePrompt;
use crate::service::subscription::SubscriptionStore;
use crate::service::theme::ThemeStore;
use crate::storage::KeyValueStorage;
use log::info;

pub struct PlannerContext<S: KeyValueStorage + Clone> {
    pub planner: PlannerStore<S>,
    pub subscription: SubscriptionStore<S>,
    pub theme: ThemeStore<S>,
    pub rate_prompt: RatePrompt<S>,
}

impl<S: KeyValueStorage + Clone> PlannerContext<S> {
    /// Loads every store from `storage`.
    ///
    /// `prefers_dark` is the platform color-scheme preference, used only when
    /// no theme has been stored yet.
    pub fn load(storage: S, config: PlannerConfig, prefers_dark: bool) -> Self {
        let subscription = SubscriptionStore::load(storage.clone(), config.subscription_key.as_str());
        let theme = ThemeStore::load(storage.clone(), config.theme_key.as_str(), prefers_dark);
        let rate_prompt = RatePrompt::load(storage.clone());
        let planner = PlannerStore::load(storage, config);

        info!(
            "event=context_load module=context status=ok plan={} theme={} records={}",
            subscription.plan().as_str(),
            theme.theme().as_str(),
            planner.data().record_count()
        );

        Self {
            planner,
            subscription,
            theme,
            rate_prompt,
        }
    }

    /// Creates a target unless the free-plan limit sends the user to the paywall.
    pub fn create_target(&mut self, draft: TargetDraft) -> StoreResult<TargetCreation> {
        self.planner.create_target(&mut self.subscription, draft)
    }

    /// Banner and popup ads only show on the free plan.
    pub fn ads_enabled(&self) -> bool {
        !self.subscription.is_premium()
    }
}
