use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod validation;

pub use app::{AppConfig, ThemeConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

const APP_DIR: &str = "ultroid-miniapp";
const CONFIG_FILE: &str = "config.toml";

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Load `config.toml` plus `ULTROID__*` environment overrides.
///
/// The file is optional: every setting has a default, and the API URL can be
/// discovered at runtime.
pub fn load_config_from(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(false));
    }
    let env_source = Environment::with_prefix("ULTROID").separator("__");

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load once per process, from an explicit path or the first existing
/// candidate of [`config_file_candidates`].
pub fn init_config(path: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| {
        let discovered = config_file_candidates()
            .into_iter()
            .find(|candidate| candidate.exists());
        load_config_from(path.or(discovered.as_deref()))
    })
}

pub fn get_config() -> &'static ConfigLoadResult {
    init_config(None)
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Option<PathBuf> {
    // Prefer ~/.config/ultroid-miniapp on Unix-like systems
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR);
            return Some(home_path);
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path
    })
}

/// `./config.toml` first, then the user config directory.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(mut dir) = get_config_dir() {
        dir.push(CONFIG_FILE);
        candidates.push(dir);
    }
    candidates
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
