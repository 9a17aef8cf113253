//! # Settings
//!
//! The settings page as data: a form of sections and typed fields
//! ([`form`]), its compiled-in defaults ([`schema`]) and the synchronizer
//! that loads it from and saves it to the remote store ([`sync`]).
//!
//! ```no_run
//! # async fn run(
//! #     store: std::sync::Arc<dyn ultroid_client::SettingsStore>,
//! #     themes: &mut miniapp::theme::ThemeController,
//! #     reporter: miniapp::error::ErrorReporter,
//! # ) -> miniapp::error::AppResult<()> {
//! use miniapp::settings::{SettingsForm, SettingsSynchronizer, default_sections};
//!
//! let form = SettingsForm::new(default_sections())?;
//! let mut sync = SettingsSynchronizer::new(store, form, reporter);
//! let _ = sync.load(themes).await;
//! sync.set_field_value(1, "HNDLR", "!".into());
//! sync.save(themes).await?;
//! # Ok(())
//! # }
//! ```

pub mod form;
pub mod schema;
pub mod sync;

pub use form::{
    CollectedValue, Field, FieldKind, FieldOption, HydrationTicket, Section, SettingsForm,
};
pub use schema::default_sections;
pub use sync::{SaveOutcome, SettingsSynchronizer, SyncError};
