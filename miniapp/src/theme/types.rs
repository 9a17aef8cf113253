use serde::Serialize;

/// Named color roles of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeGradients {
    pub primary: &'static str,
    pub surface: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeShadows {
    pub small: &'static str,
    pub medium: &'static str,
    pub large: &'static str,
}

/// A compiled-in palette/gradient/shadow bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: ThemeColors,
    pub gradients: ThemeGradients,
    pub shadows: ThemeShadows,
}

/// Role name paired with its value, in declaration order.
pub type RoleValue = (&'static str, &'static str);

impl ThemeColors {
    /// Color roles keyed by their camelCase role name.
    pub fn entries(&self) -> [RoleValue; 10] {
        [
            ("primary", self.primary),
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("accent", self.accent),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("border", self.border),
        ]
    }
}

impl ThemeGradients {
    pub fn entries(&self) -> [RoleValue; 3] {
        [
            ("primary", self.primary),
            ("surface", self.surface),
            ("accent", self.accent),
        ]
    }
}

impl ThemeShadows {
    pub fn entries(&self) -> [RoleValue; 3] {
        [
            ("small", self.small),
            ("medium", self.medium),
            ("large", self.large),
        ]
    }
}
