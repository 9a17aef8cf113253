use claims::*;
use miniapp::theme::{
    StyleSurface, ThemeController, ThemeSurface, apply_theme, default_theme, get_theme_by_id,
    hex_to_rgb, list_themes,
};
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use ultroid_client::SettingsBag;
use ultroid_client::mock::MockSettingsStore;

#[test]
fn every_theme_applies_cleanly() {
    for theme in list_themes() {
        let surface = StyleSurface::new();
        apply_theme(&surface, theme);

        assert_eq!(
            surface.variable("--color-primary").as_deref(),
            Some(theme.colors.primary)
        );
        assert_eq!(
            surface.variable("--color-primary-rgb"),
            Some(hex_to_rgb(theme.colors.primary))
        );
        assert_some!(surface.variable("--gradient-primary"));
        assert_some!(surface.variable("--shadow-medium"));
        assert!(
            surface
                .snapshot()
                .values()
                .all(|value| !value.is_empty())
        );
    }
}

#[tokio::test]
async fn theme_choice_survives_a_new_session() {
    let store = Arc::new(MockSettingsStore::new());

    let mut first = ThemeController::new(Arc::new(StyleSurface::new()), store.clone());
    first.initialize().await;
    assert_ok!(first.set_active_theme("warm_amber").await);

    let surface = Arc::new(StyleSurface::new());
    let mut second = ThemeController::new(surface.clone(), store.clone());
    second.initialize().await;

    assert_eq!(second.active_theme_id(), "warm_amber");
    assert_eq!(
        surface.variable("--color-primary").as_deref(),
        Some(get_theme_by_id("warm_amber").colors.primary)
    );
}

#[tokio::test]
async fn unknown_saved_theme_loads_default() {
    let mut bag = SettingsBag::new();
    bag.insert("theme".to_string(), json!("solarized"));
    let store = Arc::new(MockSettingsStore::with_bag(bag));

    let mut themes = ThemeController::new(Arc::new(StyleSurface::new()), store);
    themes.initialize().await;

    assert_eq!(themes.current_theme(), default_theme());
}

proptest! {
    #[test]
    fn unknown_ids_resolve_to_first_entry(id in "\\PC{0,24}") {
        prop_assume!(list_themes().iter().all(|theme| theme.id != id));
        prop_assert_eq!(get_theme_by_id(&id), &list_themes()[0]);
    }

    #[test]
    fn hex_triplet_matches_pairs(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let upper = format!("#{r:02X}{g:02X}{b:02X}");
        prop_assert_eq!(hex_to_rgb(&upper), format!("{r}, {g}, {b}"));
    }
}
