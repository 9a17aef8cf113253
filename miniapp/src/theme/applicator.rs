use crate::theme::types::Theme;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Mutex;

const BLACK_RGB: &str = "0, 0, 0";

/// Process-wide store of style variables consumed by the rendering layer.
pub trait ThemeSurface: Send + Sync {
    fn set_variable(&self, name: &str, value: &str);
    fn variable(&self, name: &str) -> Option<String>;
}

/// In-process [`ThemeSurface`] backed by an ordered map.
///
/// Writes are last-write-wins.
#[derive(Debug, Default)]
pub struct StyleSurface {
    variables: Mutex<BTreeMap<String, String>>,
}

impl StyleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every variable currently set.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        match self.variables.lock() {
            Ok(vars) => vars.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the surface as a `:root` CSS block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.snapshot() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }
}

impl ThemeSurface for StyleSurface {
    fn set_variable(&self, name: &str, value: &str) {
        let mut vars = match self.variables.lock() {
            Ok(vars) => vars,
            Err(poisoned) => poisoned.into_inner(),
        };
        vars.insert(name.to_string(), value.to_string());
    }

    fn variable(&self, name: &str) -> Option<String> {
        match self.variables.lock() {
            Ok(vars) => vars.get(name).cloned(),
            Err(poisoned) => poisoned.into_inner().get(name).cloned(),
        }
    }
}

/// Write every palette, gradient and shadow role of `theme` to `surface`.
///
/// Hex colors additionally get a `-rgb` triplet variable for translucent
/// overlays. Color variables are written before gradients and shadows.
pub fn apply_theme(surface: &dyn ThemeSurface, theme: &Theme) {
    for (role, value) in theme.colors.entries() {
        let css_key = kebab_case(role);
        surface.set_variable(&format!("--color-{css_key}"), value);

        if value.starts_with('#') {
            surface.set_variable(&format!("--color-{css_key}-rgb"), &hex_to_rgb(value));
        }
    }

    for (role, value) in theme.gradients.entries() {
        surface.set_variable(&format!("--gradient-{role}"), value);
    }

    for (role, value) in theme.shadows.entries() {
        surface.set_variable(&format!("--shadow-{role}"), value);
    }

    log::debug!("Applied theme '{}' to style surface", theme.id);
}

/// `"#0ea5e9"` → `"14, 165, 233"`; anything that is not six hex digits
/// (optionally prefixed with `#`) yields `"0, 0, 0"`.
pub fn hex_to_rgb(hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("{r}, {g}, {b}"),
        None => BLACK_RGB.to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// `textSecondary` → `text-secondary`.
pub fn kebab_case(role: &str) -> String {
    let mut out = String::with_capacity(role.len() + 4);
    for c in role.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::registry::{get_theme_by_id, list_themes};
    use proptest::prelude::*;

    #[test]
    fn test_hex_to_rgb_known_value() {
        assert_eq!(hex_to_rgb("#0ea5e9"), "14, 165, 233");
        assert_eq!(hex_to_rgb("0EA5E9"), "14, 165, 233");
    }

    #[test]
    fn test_hex_to_rgb_malformed_falls_back_to_black() {
        assert_eq!(hex_to_rgb("#fff"), "0, 0, 0");
        assert_eq!(hex_to_rgb("#gggggg"), "0, 0, 0");
        assert_eq!(hex_to_rgb("#0ea5e9ff"), "0, 0, 0");
        assert_eq!(hex_to_rgb(""), "0, 0, 0");
        assert_eq!(hex_to_rgb("#é0a5e"), "0, 0, 0");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("textSecondary"), "text-secondary");
        assert_eq!(kebab_case("primary"), "primary");
    }

    #[test]
    fn test_apply_theme_writes_all_variables() {
        let surface = StyleSurface::new();
        let theme = get_theme_by_id("midnight_pro");

        apply_theme(&surface, theme);

        assert_eq!(
            surface.variable("--color-primary").as_deref(),
            Some("#0ea5e9")
        );
        assert_eq!(
            surface.variable("--color-primary-rgb").as_deref(),
            Some("14, 165, 233")
        );
        assert_eq!(
            surface.variable("--color-text-secondary").as_deref(),
            Some("#94a3b8")
        );
        assert_eq!(surface.variable("--gradient-surface").as_deref(), Some("none"));
        assert_eq!(
            surface.variable("--shadow-large").as_deref(),
            Some("0 8px 32px rgba(15, 23, 42, 0.6)")
        );
    }

    #[test]
    fn test_non_hex_color_gets_no_rgb_variable() {
        let surface = StyleSurface::new();
        apply_theme(&surface, get_theme_by_id("midnight_pro"));

        assert_eq!(
            surface.variable("--color-border").as_deref(),
            Some("rgba(148, 163, 184, 0.2)")
        );
        assert!(surface.variable("--color-border-rgb").is_none());
        // 10 colors, 9 of them hex, 3 gradients, 3 shadows
        assert_eq!(surface.len(), 10 + 9 + 3 + 3);
    }

    #[test]
    fn test_reapplying_overwrites_previous_theme() {
        let surface = StyleSurface::new();
        for theme in list_themes() {
            apply_theme(&surface, theme);
        }
        let last = list_themes().last().unwrap();
        assert_eq!(
            surface.variable("--color-primary").as_deref(),
            Some(last.colors.primary)
        );
    }

    #[test]
    fn test_css_rendering() {
        let surface = StyleSurface::new();
        surface.set_variable("--color-primary", "#14b8a6");
        assert_eq!(surface.to_css(), ":root {\n  --color-primary: #14b8a6;\n}");
    }

    proptest! {
        #[test]
        fn test_hex_decomposition(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(hex_to_rgb(&hex), format!("{r}, {g}, {b}"));
        }
    }
}
