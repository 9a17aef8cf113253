use crate::theme::applicator::{ThemeSurface, apply_theme};
use crate::theme::registry::{DEFAULT_THEME_ID, default_theme, get_theme_by_id};
use crate::theme::types::Theme;
use std::sync::Arc;
use ultroid_client::{ApiError, SettingValue, SettingsStore};

/// Settings key under which the selected theme id is persisted.
pub const THEME_SETTING_KEY: &str = "theme";

/// Owner of the active theme for one Mini App session.
///
/// Holds the currently selected theme, keeps the style surface in sync with
/// it and persists selection changes to the remote settings store.
pub struct ThemeController {
    current: &'static Theme,
    loading: bool,
    surface: Arc<dyn ThemeSurface>,
    store: Arc<dyn SettingsStore>,
}

impl ThemeController {
    pub fn new(surface: Arc<dyn ThemeSurface>, store: Arc<dyn SettingsStore>) -> Self {
        Self {
            current: default_theme(),
            loading: true,
            surface,
            store,
        }
    }

    /// Load the saved theme from the store and apply it.
    ///
    /// A failed fetch applies the default theme; either way the controller
    /// leaves the loading state.
    pub async fn initialize(&mut self) {
        match self.store.fetch_settings().await {
            Ok(settings) => {
                let saved_id = settings
                    .get(THEME_SETTING_KEY)
                    .and_then(|v| v.as_str())
                    .filter(|id| !id.is_empty())
                    .unwrap_or(DEFAULT_THEME_ID);
                let theme = get_theme_by_id(saved_id);
                self.current = theme;
                apply_theme(self.surface.as_ref(), theme);
                log::info!("Loaded theme: {}", theme.id);
            }
            Err(e) => {
                log::error!("Failed to load theme: {e}");
                self.current = default_theme();
                apply_theme(self.surface.as_ref(), default_theme());
            }
        }
        self.loading = false;
    }

    pub fn current_theme(&self) -> &'static Theme {
        self.current
    }

    pub fn active_theme_id(&self) -> &'static str {
        self.current.id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn surface(&self) -> &Arc<dyn ThemeSurface> {
        &self.surface
    }

    /// Select, apply and persist a theme.
    ///
    /// The theme is applied locally before the remote call, so a persistence
    /// failure leaves the new look in place while reporting the error. Unknown
    /// ids resolve to the default theme, and the resolved id is what gets
    /// persisted.
    pub async fn set_active_theme(&mut self, theme_id: &str) -> Result<&'static Theme, ApiError> {
        let theme = get_theme_by_id(theme_id);
        self.current = theme;
        apply_theme(self.surface.as_ref(), theme);

        self.store
            .save_setting(THEME_SETTING_KEY, &SettingValue::from(theme.id))
            .await
            .inspect_err(|e| log::error!("Failed to save theme: {e}"))?;

        log::info!("Switched to theme: {}", theme.id);
        Ok(theme)
    }
}
