use crate::theme::types::{Theme, ThemeColors, ThemeGradients, ThemeShadows};

/// Id of the first registry entry, used when nothing else is known.
pub const DEFAULT_THEME_ID: &str = "midnight_pro";

static THEMES: [Theme; 5] = [
    Theme {
        id: "midnight_pro",
        name: "Midnight Pro",
        description: "Professional dark theme with subtle contrasts",
        colors: ThemeColors {
            primary: "#0ea5e9",
            background: "#0f172a",
            surface: "#1e293b",
            text: "#f8fafc",
            text_secondary: "#94a3b8",
            accent: "#0284c7",
            success: "#059669",
            warning: "#d97706",
            error: "#dc2626",
            border: "rgba(148, 163, 184, 0.2)",
        },
        gradients: ThemeGradients {
            primary: "linear-gradient(135deg, #0ea5e9 0%, #0284c7 100%)",
            surface: "none",
            accent: "linear-gradient(135deg, #0284c7 0%, #0369a1 100%)",
        },
        shadows: ThemeShadows {
            small: "0 2px 8px rgba(15, 23, 42, 0.4)",
            medium: "0 4px 16px rgba(15, 23, 42, 0.5)",
            large: "0 8px 32px rgba(15, 23, 42, 0.6)",
        },
    },
    Theme {
        id: "cyber_teal",
        name: "Cyber Teal",
        description: "Futuristic teal theme with cyber aesthetics",
        colors: ThemeColors {
            primary: "#14b8a6",
            background: "#0c1415",
            surface: "#1f2937",
            text: "#e5e7eb",
            text_secondary: "#6ee7b7",
            accent: "#0d9488",
            success: "#10b981",
            warning: "#f59e0b",
            error: "#ef4444",
            border: "rgba(110, 231, 183, 0.15)",
        },
        gradients: ThemeGradients {
            primary: "linear-gradient(135deg, #14b8a6 0%, #0d9488 100%)",
            surface: "none",
            accent: "linear-gradient(135deg, #0d9488 0%, #0f766e 100%)",
        },
        shadows: ThemeShadows {
            small: "0 2px 8px rgba(12, 20, 21, 0.4)",
            medium: "0 4px 16px rgba(12, 20, 21, 0.5)",
            large: "0 8px 32px rgba(12, 20, 21, 0.6)",
        },
    },
    Theme {
        id: "slate_noir",
        name: "Slate Noir",
        description: "Elegant slate theme with sophisticated contrasts",
        colors: ThemeColors {
            primary: "#64748b",
            background: "#0f1419",
            surface: "#1e2432",
            text: "#f1f5f9",
            text_secondary: "#94a3b8",
            accent: "#475569",
            success: "#10b981",
            warning: "#f59e0b",
            error: "#ef4444",
            border: "rgba(148, 163, 184, 0.15)",
        },
        gradients: ThemeGradients {
            primary: "linear-gradient(135deg, #64748b 0%, #475569 100%)",
            surface: "none",
            accent: "linear-gradient(135deg, #475569 0%, #334155 100%)",
        },
        shadows: ThemeShadows {
            small: "0 2px 8px rgba(15, 20, 25, 0.4)",
            medium: "0 4px 16px rgba(15, 20, 25, 0.5)",
            large: "0 8px 32px rgba(15, 20, 25, 0.6)",
        },
    },
    Theme {
        id: "deep_purple",
        name: "Deep Purple",
        description: "Bold and classy purple theme with royal elegance",
        colors: ThemeColors {
            primary: "#9333ea",
            background: "#0f0a1a",
            surface: "#1a0f2e",
            text: "#ffffff",
            text_secondary: "#d8b4fe",
            accent: "#a855f7",
            success: "#22c55e",
            warning: "#f59e0b",
            error: "#ef4444",
            border: "rgba(168, 85, 247, 0.25)",
        },
        gradients: ThemeGradients {
            primary: "linear-gradient(135deg, #9333ea 0%, #a855f7 100%)",
            surface: "linear-gradient(135deg, rgba(26, 15, 46, 0.9) 0%, rgba(15, 10, 26, 0.95) 100%)",
            accent: "linear-gradient(135deg, #a855f7 0%, #7c3aed 100%)",
        },
        shadows: ThemeShadows {
            small: "0 2px 8px rgba(147, 51, 234, 0.3)",
            medium: "0 4px 16px rgba(147, 51, 234, 0.4)",
            large: "0 8px 32px rgba(147, 51, 234, 0.5)",
        },
    },
    Theme {
        id: "warm_amber",
        name: "Warm Amber",
        description: "Cozy amber theme with warm, inviting tones",
        colors: ThemeColors {
            primary: "#f59e0b",
            background: "#1c1917",
            surface: "#292524",
            text: "#fef7f0",
            text_secondary: "#fbbf24",
            accent: "#d97706",
            success: "#10b981",
            warning: "#f59e0b",
            error: "#ef4444",
            border: "rgba(251, 191, 36, 0.2)",
        },
        gradients: ThemeGradients {
            primary: "linear-gradient(135deg, #f59e0b 0%, #d97706 100%)",
            surface: "linear-gradient(135deg, rgba(41, 37, 36, 0.8) 0%, rgba(28, 25, 23, 0.9) 100%)",
            accent: "linear-gradient(135deg, #d97706 0%, #b45309 100%)",
        },
        shadows: ThemeShadows {
            small: "0 2px 8px rgba(28, 25, 23, 0.4)",
            medium: "0 4px 16px rgba(28, 25, 23, 0.5)",
            large: "0 8px 32px rgba(28, 25, 23, 0.6)",
        },
    },
];

/// All available themes, in display order.
pub fn list_themes() -> &'static [Theme] {
    &THEMES
}

/// The first registry entry.
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Exact lookup without fallback.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// Resolve `id` to a theme, falling back to [`default_theme`] on a miss.
pub fn get_theme_by_id(id: &str) -> &'static Theme {
    find_theme(id).unwrap_or_else(|| {
        log::warn!(
            "Unknown theme '{id}', falling back to '{}'",
            default_theme().id
        );
        default_theme()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order_is_stable() {
        let ids: Vec<&str> = list_themes().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "midnight_pro",
                "cyber_teal",
                "slate_noir",
                "deep_purple",
                "warm_amber"
            ]
        );
        assert_eq!(default_theme().id, DEFAULT_THEME_ID);
    }

    #[test]
    fn test_theme_ids_are_unique() {
        let ids: HashSet<&str> = list_themes().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), list_themes().len());
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(get_theme_by_id("cyber_teal").name, "Cyber Teal");
        assert_eq!(get_theme_by_id("warm_amber").colors.primary, "#f59e0b");
    }

    #[test]
    fn test_every_theme_defines_every_role() {
        for theme in list_themes() {
            for (role, value) in theme
                .colors
                .entries()
                .into_iter()
                .chain(theme.gradients.entries())
                .chain(theme.shadows.entries())
            {
                assert!(!value.is_empty(), "{} has empty {role}", theme.id);
            }
        }
    }

    proptest! {
        #[test]
        fn test_unknown_ids_resolve_to_first_entry(id in "[a-z_]{0,24}") {
            prop_assume!(find_theme(&id).is_none());
            let resolved = get_theme_by_id(&id);
            prop_assert_eq!(resolved, get_theme_by_id(list_themes()[0].id));
        }
    }
}
