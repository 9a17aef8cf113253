use crate::errors::ApiError;
use crate::model::{SettingEntry, SettingValue, SettingsBag};
use async_trait::async_trait;

/// Remote key/value settings store of a Ultroid installation.
///
/// This is the seam between the Mini App core and the network. The core only
/// ever talks to `dyn SettingsStore`, so tests and alternative hosts can swap
/// in their own implementation.
///
/// # Examples
///
/// ```no_run
/// use client::{ApiError, SettingEntry, SettingValue, SettingsBag, SettingsStore};
/// use async_trait::async_trait;
///
/// struct ReadOnlyStore(SettingsBag);
///
/// #[async_trait]
/// impl SettingsStore for ReadOnlyStore {
///     async fn fetch_settings(&self) -> Result<SettingsBag, ApiError> {
///         Ok(self.0.clone())
///     }
///
///     async fn save_setting(&self, _key: &str, _value: &SettingValue) -> Result<(), ApiError> {
///         Err(ApiError::InvalidResponse("read-only".to_string()))
///     }
///
///     async fn save_settings(&self, _entries: &[SettingEntry]) -> Result<(), ApiError> {
///         Err(ApiError::InvalidResponse("read-only".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch the whole settings bag (`GET /settings`).
    async fn fetch_settings(&self) -> Result<SettingsBag, ApiError>;

    /// Persist a single key (`POST /settings` with one pair).
    async fn save_setting(&self, key: &str, value: &SettingValue) -> Result<(), ApiError>;

    /// Persist many keys in one request (`POST /settings` with a batch).
    async fn save_settings(&self, entries: &[SettingEntry]) -> Result<(), ApiError>;
}
