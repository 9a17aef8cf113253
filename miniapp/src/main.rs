//! Headless host for the Ultroid Mini App core.
//!
//! ```bash
//! # List the available themes
//! ultroid-miniapp themes
//!
//! # Print the style variables of a theme as CSS
//! ultroid-miniapp css cyber_teal
//!
//! # Show the settings form, or edit and save it
//! ultroid-miniapp settings
//! ultroid-miniapp settings --set HNDLR=! --set PMWARNS=5
//!
//! # Switch the persisted theme
//! ultroid-miniapp theme warm_amber
//! ```

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use miniapp::config::{self, AppConfig, ConfigLoadResult};
use miniapp::error::{AppError, ErrorReporter};
use miniapp::logger::setup_logger;
use miniapp::notify::ConsoleNotifier;
use miniapp::settings::{SaveOutcome, SettingsForm, SettingsSynchronizer, default_sections};
use miniapp::theme::{
    DEFAULT_THEME_ID, StyleSurface, ThemeController, apply_theme, get_theme_by_id, list_themes,
};
use miniapp::utils::{fallback_avatar, user_avatar};
use miniapp::validation::{FieldValueValidator, ThemeIdValidator, Validator, parse_field_input};
use std::path::PathBuf;
use std::sync::Arc;
use ultroid_client::{
    ApiClient, ApiEndpoint, EnvIdentity, IdentityProvider, SettingsStore, StaticIdentity,
};

/// Ultroid Mini App - themes and settings from the terminal
#[derive(Parser)]
#[command(name = "ultroid-miniapp")]
#[command(version)]
struct Cli {
    /// Path to config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Management API base URL, overrides the configuration
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the compiled-in themes
    Themes {
        #[arg(long)]
        json: bool,
    },
    /// Print a theme's style variables as a CSS block
    Css {
        /// Theme id, defaults to the configured theme
        theme: Option<String>,
    },
    /// Load the settings form; with --set, edit and save it
    Settings {
        /// Field assignment, may be repeated
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        #[arg(long)]
        json: bool,
    },
    /// Apply and persist a theme
    Theme {
        /// Theme id
        id: String,
    },
    /// Show the bot owner's profile
    User,
    /// Restart the bot
    Restart,
    /// Update the bot
    Update,
    /// Print a generated avatar data URL for a name
    Avatar { name: String },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let reporter = ErrorReporter::new(Arc::new(ConsoleNotifier));

    let app_config = match config::init_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(loaded) => loaded.as_ref(),
        ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
            reporter.report_config_error("application", msg);
            std::process::exit(1);
        }
    };

    if let Err(e) = setup_logger(app_config.logging(), cli.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }
    let api_url = cli.api_url;

    match cli.command {
        Commands::Themes { json } => cmd_themes(json),
        Commands::Css { theme } => {
            let id = theme.as_deref().unwrap_or(app_config.theme().default_theme());
            cmd_css(id)
        }
        Commands::Avatar { name } => {
            println!("{}", fallback_avatar(&name));
            Ok(())
        }
        Commands::Settings { set, json } => {
            let client = build_client(app_config, api_url)?;
            cmd_settings(Arc::new(client), reporter, set, json).await
        }
        Commands::Theme { id } => {
            let client = build_client(app_config, api_url)?;
            cmd_theme(Arc::new(client), reporter, &id).await
        }
        Commands::User => cmd_user(&build_client(app_config, api_url)?).await,
        Commands::Restart => {
            let status = build_client(app_config, api_url)?.restart_bot().await?;
            println!("Restart: {}", status.status);
            Ok(())
        }
        Commands::Update => {
            let status = build_client(app_config, api_url)?.update_bot().await?;
            println!("Update: {}", status.status);
            Ok(())
        }
    }
}

fn build_client(app_config: &AppConfig, api_url: Option<String>) -> anyhow::Result<ApiClient> {
    let endpoint = ApiEndpoint::new(
        api_url.or_else(|| app_config.api_url().map(str::to_string)),
        app_config.config_url().map(str::to_string),
    );
    let identity: Arc<dyn IdentityProvider> = match app_config.init_data() {
        Some(data) => Arc::new(StaticIdentity::new(data)),
        None => Arc::new(EnvIdentity),
    };

    ApiClient::with_timeout(endpoint, identity, app_config.request_timeout())
        .context("Failed to create API client")
}

fn cmd_themes(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list_themes())?);
        return Ok(());
    }

    for theme in list_themes() {
        let marker = if theme.id == DEFAULT_THEME_ID { "*" } else { " " };
        println!(
            "{marker} {:<12} {:<12} {}",
            theme.id, theme.name, theme.description
        );
    }
    Ok(())
}

fn cmd_css(theme_id: &str) -> anyhow::Result<()> {
    let surface = StyleSurface::new();
    apply_theme(&surface, get_theme_by_id(theme_id));
    println!("{}", surface.to_css());
    Ok(())
}

async fn cmd_settings(
    client: Arc<ApiClient>,
    reporter: ErrorReporter,
    assignments: Vec<(String, String)>,
    json: bool,
) -> anyhow::Result<()> {
    let store: Arc<dyn SettingsStore> = client;
    let mut themes = ThemeController::new(Arc::new(StyleSurface::new()), store.clone());
    themes.initialize().await;

    let form = SettingsForm::new(default_sections())?;
    let mut sync = SettingsSynchronizer::new(store, form, reporter.clone());
    // A failed load is already reported and leaves the defaults in place.
    let _ = sync.load(&themes).await;

    for (key, raw) in &assignments {
        if let Err(e) = apply_assignment(&mut sync, key, raw) {
            reporter.report_simple(e.clone(), "Settings", "set_field_value");
            return Err(anyhow!(e));
        }
    }

    if !assignments.is_empty() {
        match sync.save(&mut themes).await.map_err(AppError::from)? {
            SaveOutcome::NothingToSave => log::info!("Nothing to save"),
            SaveOutcome::Saved { settings, .. } => log::info!("Saved {settings} settings"),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(sync.form().sections())?);
    } else {
        print_form(sync.form());
    }
    Ok(())
}

fn apply_assignment(sync: &mut SettingsSynchronizer, key: &str, raw: &str) -> Result<(), AppError> {
    let form = sync.form();
    let (Some(section), Some(field)) = (form.section_index(key), form.field(key)) else {
        return Err(AppError::Validation(format!("Unknown setting '{key}'")));
    };

    let value =
        parse_field_input(field, raw).map_err(|e| AppError::Validation(e.to_string()))?;
    FieldValueValidator::new(field)
        .validate(&value)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    sync.set_field_value(section, key, value);
    Ok(())
}

fn print_form(form: &SettingsForm) {
    for section in form.sections() {
        println!("{}", section.title);
        for field in &section.fields {
            println!("  {:<18} {}", field.key, field.value);
        }
    }
}

async fn cmd_theme(client: Arc<ApiClient>, reporter: ErrorReporter, id: &str) -> anyhow::Result<()> {
    ThemeIdValidator
        .validate(id)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let store: Arc<dyn SettingsStore> = client;
    let mut themes = ThemeController::new(Arc::new(StyleSurface::new()), store);
    match themes.set_active_theme(id).await {
        Ok(theme) => {
            println!("Switched to theme: {}", theme.name);
            Ok(())
        }
        Err(e) => {
            reporter.report_theme_error("save", &e);
            Err(e.into())
        }
    }
}

async fn cmd_user(client: &ApiClient) -> anyhow::Result<()> {
    let user = client.get_user_data().await;
    println!("{}", user.name);
    if let Some(username) = &user.username {
        println!("@{username}");
    }
    if !user.bio.is_empty() {
        println!("{}", user.bio);
    }
    println!("Uptime: {}", user.stats.uptime);
    if !user.skills.is_empty() {
        println!("Skills: {}", user.skills.join(", "));
    }
    println!("Avatar: {}", user_avatar(&user));
    Ok(())
}
