//! # Ultroid Client Library
//!
//! Client for the management API of a Ultroid userbot installation, as used
//! by the Telegram Mini App. Provides the remote settings store, the profile
//! and admin endpoints, API URL discovery and Telegram init-data
//! authentication.
//!
//! ## Modules
//!
//! - [`api`] - reqwest-based [`ApiClient`]
//! - [`endpoint`] - API base URL resolution
//! - [`errors`] - [`ApiError`]
//! - [`identity`] - init data providers for the `tma` authorization scheme
//! - [`model`] - settings values, entries and profile data
//! - [`store`] - the [`SettingsStore`] trait

pub mod api;
pub mod endpoint;
pub mod errors;
pub mod identity;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use api::ApiClient;
pub use endpoint::ApiEndpoint;
pub use errors::ApiError;
pub use identity::{EnvIdentity, IdentityProvider, StaticIdentity};
pub use model::{SettingEntry, SettingValue, SettingsBag, StatusResponse, UserData};
pub use store::SettingsStore;
