use crate::error::{AppError, ErrorReporter};
use crate::notify::Notice;
use crate::settings::form::{FieldKind, SettingsForm};
use crate::theme::ThemeController;
use std::sync::Arc;
use thiserror::Error;
use ultroid_client::{ApiError, SettingEntry, SettingValue, SettingsStore};

const SAVED_MESSAGE: &str = "All settings saved successfully!";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to load settings: {0}")]
    Load(#[source] ApiError),
    #[error("Failed to save theme: {0}")]
    ThemeSave(#[source] ApiError),
    #[error("Failed to save settings: {0}")]
    BulkSave(#[source] ApiError),
}

impl From<SyncError> for AppError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Load(_) => AppError::Load(err.to_string()),
            SyncError::ThemeSave(_) | SyncError::BulkSave(_) => AppError::Save(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The form was clean; nothing was sent.
    NothingToSave,
    Saved {
        theme: Option<&'static str>,
        settings: usize,
    },
}

/// Keeps a [`SettingsForm`] in sync with the remote settings store.
///
/// Theme fields never go into the bulk save. They are routed through the
/// [`ThemeController`] so the new theme is applied locally before it is
/// persisted under its own key.
pub struct SettingsSynchronizer {
    store: Arc<dyn SettingsStore>,
    form: SettingsForm,
    reporter: ErrorReporter,
}

impl SettingsSynchronizer {
    pub fn new(store: Arc<dyn SettingsStore>, form: SettingsForm, reporter: ErrorReporter) -> Self {
        Self {
            store,
            form,
            reporter,
        }
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn is_dirty(&self) -> bool {
        self.form.is_dirty()
    }

    pub fn set_field_value(&mut self, section_index: usize, key: &str, value: SettingValue) -> bool {
        self.form.set_field_value(section_index, key, value)
    }

    /// Swap in a freshly mounted form. Results of loads issued for the old
    /// form no longer apply.
    pub fn replace_form(&mut self, form: SettingsForm) -> SettingsForm {
        std::mem::replace(&mut self.form, form)
    }

    /// Fetch remote settings and merge them into the form.
    ///
    /// On failure the defaults stay in place, a warning is shown and the
    /// theme field still reflects the active theme.
    pub async fn load(&mut self, themes: &ThemeController) -> Result<(), SyncError> {
        let ticket = self.form.ticket();
        let result = self.store.fetch_settings().await;

        match result {
            Ok(bag) => {
                log::info!("Loaded {} remote settings", bag.len());
                self.form
                    .hydrate(&ticket, Some(&bag), themes.active_theme_id());
                Ok(())
            }
            Err(e) => {
                self.form.hydrate(&ticket, None, themes.active_theme_id());
                self.reporter.report_load_error(&e);
                Err(SyncError::Load(e))
            }
        }
    }

    /// Persist the whole form when it has unsaved edits.
    ///
    /// A theme failure aborts before the bulk save. Any failure keeps the
    /// form dirty so the next save resends everything.
    pub async fn save(&mut self, themes: &mut ThemeController) -> Result<SaveOutcome, SyncError> {
        if !self.form.is_dirty() {
            log::debug!("Settings are clean, skipping save");
            return Ok(SaveOutcome::NothingToSave);
        }

        let (theme_values, rest): (Vec<_>, Vec<_>) = self
            .form
            .collect_values()
            .into_iter()
            .partition(|collected| collected.kind == FieldKind::Theme);

        let mut saved_theme = None;
        for collected in theme_values {
            let theme_id = collected.value.to_string();
            match themes.set_active_theme(&theme_id).await {
                Ok(theme) => saved_theme = Some(theme.id),
                Err(e) => {
                    self.reporter.report_save_error("theme_save", &e);
                    return Err(SyncError::ThemeSave(e));
                }
            }
        }

        let entries: Vec<SettingEntry> = rest
            .into_iter()
            .map(|collected| SettingEntry {
                key: collected.key,
                value: collected.value,
            })
            .collect();

        if !entries.is_empty() {
            if let Err(e) = self.store.save_settings(&entries).await {
                self.reporter.report_save_error("bulk_save", &e);
                return Err(SyncError::BulkSave(e));
            }
        }

        self.form.mark_clean();
        log::info!("Saved {} settings", entries.len());
        self.reporter.notifier().show(Notice::info(SAVED_MESSAGE));

        Ok(SaveOutcome::Saved {
            theme: saved_theme,
            settings: entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ChannelNotifier, NoticeLevel};
    use crate::settings::form::{Field, Section};
    use crate::theme::StyleSurface;
    use claims::*;
    use serde_json::json;
    use std::sync::mpsc;
    use ultroid_client::SettingsBag;
    use ultroid_client::mock::{MockSettingsStore, StoreCall};

    struct Harness {
        sync: SettingsSynchronizer,
        themes: ThemeController,
        store: Arc<MockSettingsStore>,
        notices: mpsc::Receiver<Notice>,
    }

    fn form() -> SettingsForm {
        SettingsForm::new(vec![
            Section::new(
                "Appearance",
                "",
                "palette",
                vec![Field::new("theme", "Theme", FieldKind::Theme, "midnight_pro")],
            ),
            Section::new(
                "Bot",
                "",
                "cpu",
                vec![
                    Field::new("HNDLR", "Command Handler", FieldKind::Input, "."),
                    Field::new("SUDO", "Sudo Mode", FieldKind::Toggle, false),
                ],
            ),
        ])
        .unwrap()
    }

    fn harness(store: MockSettingsStore) -> Harness {
        let store = Arc::new(store);
        let (tx, notices) = mpsc::channel();
        let reporter = ErrorReporter::new(Arc::new(ChannelNotifier::new(tx)));
        Harness {
            sync: SettingsSynchronizer::new(store.clone(), form(), reporter),
            themes: ThemeController::new(Arc::new(StyleSurface::new()), store.clone()),
            store,
            notices,
        }
    }

    #[tokio::test]
    async fn test_load_hydrates_form() {
        let mut bag = SettingsBag::new();
        bag.insert("HNDLR".to_string(), json!("!"));
        bag.insert("theme".to_string(), json!("cyber_teal"));
        let mut h = harness(MockSettingsStore::with_bag(bag));
        h.themes.initialize().await;

        assert_ok!(h.sync.load(&h.themes).await);

        let form = h.sync.form();
        assert_eq!(form.field("HNDLR").unwrap().value, SettingValue::from("!"));
        assert_eq!(
            form.field("theme").unwrap().value,
            SettingValue::from("cyber_teal")
        );
        assert!(!h.sync.is_dirty());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_defaults_and_warns() {
        let store = MockSettingsStore::new();
        store.fail_fetch(true);
        let mut h = harness(store);

        assert!(matches!(h.sync.load(&h.themes).await, Err(SyncError::Load(_))));

        assert_eq!(
            h.sync.form().field("HNDLR").unwrap().value,
            SettingValue::from(".")
        );
        let notice = h.notices.try_recv().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Failed to load settings. Using defaults.");
    }

    #[tokio::test]
    async fn test_clean_save_makes_no_calls() {
        let mut h = harness(MockSettingsStore::new());

        let outcome = assert_ok!(h.sync.save(&mut h.themes).await);

        assert_eq!(outcome, SaveOutcome::NothingToSave);
        assert_eq!(h.store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_save_splits_theme_from_batch() {
        let mut h = harness(MockSettingsStore::new());
        h.sync.set_field_value(0, "theme", "cyber_teal".into());
        h.sync.set_field_value(1, "HNDLR", "!".into());

        let outcome = assert_ok!(h.sync.save(&mut h.themes).await);

        assert_eq!(
            outcome,
            SaveOutcome::Saved {
                theme: Some("cyber_teal"),
                settings: 2
            }
        );
        assert_eq!(
            h.store.calls(),
            vec![
                StoreCall::SaveOne {
                    key: "theme".to_string(),
                    value: SettingValue::from("cyber_teal"),
                },
                StoreCall::SaveBatch(vec![
                    SettingEntry::new("HNDLR", "!"),
                    SettingEntry::new("SUDO", false),
                ]),
            ]
        );
        assert!(!h.sync.is_dirty());
        assert_eq!(h.notices.try_recv().unwrap().message, SAVED_MESSAGE);
    }

    #[tokio::test]
    async fn test_theme_failure_aborts_before_batch() {
        let store = MockSettingsStore::new();
        store.fail_save_one(true);
        let mut h = harness(store);
        h.sync.set_field_value(1, "HNDLR", "!".into());

        assert!(matches!(
            h.sync.save(&mut h.themes).await,
            Err(SyncError::ThemeSave(_))
        ));

        assert!(h.sync.is_dirty());
        assert!(
            !h.store
                .calls()
                .iter()
                .any(|call| matches!(call, StoreCall::SaveBatch(_)))
        );
    }

    #[tokio::test]
    async fn test_bulk_failure_keeps_dirty_and_values() {
        let store = MockSettingsStore::new();
        store.fail_save_batch(true);
        let mut h = harness(store);
        h.sync.set_field_value(1, "HNDLR", "!".into());

        assert!(matches!(
            h.sync.save(&mut h.themes).await,
            Err(SyncError::BulkSave(_))
        ));

        assert!(h.sync.is_dirty());
        assert_eq!(
            h.sync.form().field("HNDLR").unwrap().value,
            SettingValue::from("!")
        );
        let notice = h.notices.try_recv().unwrap();
        assert_eq!(
            notice.message,
            "Failed to save some settings. Please try again."
        );
    }

    #[tokio::test]
    async fn test_replaced_form_starts_clean() {
        let mut h = harness(MockSettingsStore::new());
        h.sync.set_field_value(1, "HNDLR", "!".into());

        let old = h.sync.replace_form(form());

        assert!(old.is_dirty());
        assert!(!h.sync.is_dirty());
        assert_ne!(old.instance_id(), h.sync.form().instance_id());
    }

    #[test]
    fn test_sync_error_maps_to_app_error() {
        let load: AppError = SyncError::Load(ApiError::NotConfigured).into();
        assert!(matches!(load, AppError::Load(_)));

        let save: AppError = SyncError::BulkSave(ApiError::NotConfigured).into();
        assert!(matches!(save, AppError::Save(_)));
    }
}
