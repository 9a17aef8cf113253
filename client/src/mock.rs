//! In-memory [`SettingsStore`] that records every call.
//!
//! Available to other crates through the `test-utils` feature.

use crate::errors::ApiError;
use crate::model::{SettingEntry, SettingValue, SettingsBag};
use crate::store::SettingsStore;
use async_trait::async_trait;
use std::sync::Mutex;

/// A call observed by [`MockSettingsStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Fetch,
    SaveOne { key: String, value: SettingValue },
    SaveBatch(Vec<SettingEntry>),
}

#[derive(Debug, Default)]
struct Failures {
    fetch: bool,
    save_one: bool,
    save_batch: bool,
}

/// Recording store with injectable failures.
#[derive(Debug, Default)]
pub struct MockSettingsStore {
    bag: Mutex<SettingsBag>,
    calls: Mutex<Vec<StoreCall>>,
    failures: Mutex<Failures>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bag(bag: SettingsBag) -> Self {
        Self {
            bag: Mutex::new(bag),
            ..Self::default()
        }
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.failures.lock().unwrap().fetch = fail;
    }

    pub fn fail_save_one(&self, fail: bool) {
        self.failures.lock().unwrap().save_one = fail;
    }

    pub fn fail_save_batch(&self, fail: bool) {
        self.failures.lock().unwrap().save_batch = fail;
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Number of calls that would have hit the network.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn bag(&self) -> SettingsBag {
        self.bag.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn simulated_failure() -> ApiError {
        ApiError::Status {
            status: 503,
            body: "simulated failure".to_string(),
        }
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn fetch_settings(&self) -> Result<SettingsBag, ApiError> {
        self.record(StoreCall::Fetch);
        if self.failures.lock().unwrap().fetch {
            return Err(Self::simulated_failure());
        }
        Ok(self.bag())
    }

    async fn save_setting(&self, key: &str, value: &SettingValue) -> Result<(), ApiError> {
        self.record(StoreCall::SaveOne {
            key: key.to_string(),
            value: value.clone(),
        });
        if self.failures.lock().unwrap().save_one {
            return Err(Self::simulated_failure());
        }
        self.bag
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_json());
        Ok(())
    }

    async fn save_settings(&self, entries: &[SettingEntry]) -> Result<(), ApiError> {
        self.record(StoreCall::SaveBatch(entries.to_vec()));
        if self.failures.lock().unwrap().save_batch {
            return Err(Self::simulated_failure());
        }
        let mut bag = self.bag.lock().unwrap();
        for entry in entries {
            bag.insert(entry.key.clone(), entry.value.to_json());
        }
        Ok(())
    }
}
