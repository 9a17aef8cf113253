//! # Theme System Module
//!
//! Compiled-in themes for the Ultroid Mini App and the machinery that makes
//! the selected one visible to the rendering layer.
//!
//! ## Architecture
//!
//! - **[`registry`]** - The closed set of themes and id lookup with fallback
//! - **[`applicator`]** - Projection of a theme onto a [`ThemeSurface`]
//! - **[`ThemeController`]** - Session-wide active theme with remote persistence
//!
//! ## Available Themes
//!
//! - **Midnight Pro** (default) - Professional dark theme with subtle contrasts
//! - **Cyber Teal** - Futuristic teal theme
//! - **Slate Noir** - Elegant slate theme
//! - **Deep Purple** - Bold purple theme
//! - **Warm Amber** - Cozy amber theme
//!
//! ## Basic Usage
//!
//! ```no_run
//! use miniapp::theme::{StyleSurface, ThemeSurface, apply_theme, get_theme_by_id};
//!
//! let surface = StyleSurface::new();
//! apply_theme(&surface, get_theme_by_id("cyber_teal"));
//! assert_eq!(surface.variable("--color-primary").as_deref(), Some("#14b8a6"));
//! ```
//!
//! ## Style Variables
//!
//! For every color role `--color-<role>` is written (camelCase roles become
//! kebab-case, e.g. `--color-text-secondary`). Hex colors also produce
//! `--color-<role>-rgb` as an `"R, G, B"` triplet. Gradients and shadows map
//! to `--gradient-<role>` and `--shadow-<role>`.
//!
//! ## Fallbacks
//!
//! - **Unknown theme id** - Resolves to the first registry entry
//! - **Malformed hex color** - RGB triplet becomes `0, 0, 0`
//! - **Failed initial load** - Default theme is applied

pub mod applicator;
pub mod context;
pub mod registry;
pub mod types;

pub use applicator::{StyleSurface, ThemeSurface, apply_theme, hex_to_rgb};
pub use context::{THEME_SETTING_KEY, ThemeController};
pub use registry::{DEFAULT_THEME_ID, default_theme, get_theme_by_id, list_themes};
pub use types::Theme;
