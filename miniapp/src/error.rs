use crate::notify::{Notice, Notifier};
use std::fmt::Display;
use std::sync::Arc;
use ultroid_client::ApiError;

/// Application-wide error types for the Mini App core.
///
/// None of these are fatal. Each one ends up as a dismissable notice through
/// [`ErrorReporter`] while the in-memory state stays valid.
///
/// # Error Categories
///
/// ## Remote Store Errors
/// - [`Api`] - Management API call failed outside a load/save flow
/// - [`Load`] - Settings could not be fetched; defaults stay in effect
/// - [`Save`] - Theme persistence or bulk save failed; edits are kept
///
/// ## Local Errors
/// - [`Config`] - Configuration loading and validation errors
/// - [`State`] - Form construction or state consistency problems
/// - [`Validation`] - A value does not fit the field it is meant for
///
/// # Examples
///
/// ```no_run
/// use miniapp::error::{AppError, ErrorReporter};
///
/// fn handle(error: AppError, reporter: &ErrorReporter) {
///     match error {
///         AppError::Load(_) => reporter.report_warning(error, "Settings", "load"),
///         AppError::Save(_) => reporter.report_simple(error, "Settings", "save"),
///         other => reporter.report_error(other),
///     }
/// }
/// ```
///
/// [`Api`]: AppError::Api
/// [`Load`]: AppError::Load
/// [`Save`]: AppError::Save
/// [`Config`]: AppError::Config
/// [`State`]: AppError::State
/// [`Validation`]: AppError::Validation
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Management API failures not tied to the settings flow.
    Api(String),

    /// Remote settings fetch failed or returned unusable data.
    ///
    /// # Recovery
    /// - Keep compiled-in defaults and the default theme
    /// - Warn the user, keep the form usable
    Load(String),

    /// Theme persistence or the batched settings save failed.
    ///
    /// # Recovery
    /// - Keep the dirty flag so a re-save resends everything
    /// - Tell the user to try again
    Save(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Form or session state problems.
    State(String),

    /// A value was rejected before reaching the form.
    Validation(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Api(msg) => write!(f, "API Error: {msg}"),
            AppError::Load(msg) => write!(f, "Load Error: {msg}"),
            AppError::Save(msg) => write!(f, "Save Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Show a warning notice and log
    Warning,
    /// Show an error notice and log
    Error,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Uses a generic message; call `.with_message()` for a specific one.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}. Please try again."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Central error reporting: logs with context and shows a notice.
#[derive(Clone)]
pub struct ErrorReporter {
    notifier: Arc<dyn Notifier>,
}

impl ErrorReporter {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Report an error with basic context
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    /// Report a warning
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    pub fn report_error(&self, error: AppError) {
        self.report_simple(error, "Application", "operation");
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let details = Self::format_additional_context(&context);
        match context.severity {
            ErrorSeverity::Warning => log::warn!(
                "[{}:{}] {} ({}){}",
                context.component,
                context.operation,
                context.user_message,
                error,
                details
            ),
            ErrorSeverity::Error => log::error!(
                "[{}:{}] {} ({}){}",
                context.component,
                context.operation,
                context.user_message,
                error,
                details
            ),
        }

        let message = Self::format_user_message(&context);
        let notice = match context.severity {
            ErrorSeverity::Warning => Notice::warning(Self::error_title(&error), message),
            ErrorSeverity::Error => Notice::error(Self::error_title(&error), message),
        };
        self.notifier.show(notice);
    }

    fn format_additional_context(context: &ErrorContext) -> String {
        let mut parts = Vec::new();
        if let Some(ref technical) = context.technical_details {
            parts.push(format!("Technical: {technical}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();
        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\n{suggestion}"));
        }
        message
    }

    fn error_title(error: &AppError) -> &'static str {
        match error {
            AppError::Api(_) => "Connection Error",
            AppError::Load(_) => "Settings Unavailable",
            AppError::Save(_) => "Save Failed",
            AppError::Config(_) => "Configuration Error",
            AppError::State(_) => "Application State Error",
            AppError::Validation(_) => "Invalid Value",
        }
    }

    // ========== Helpers for the settings flow ==========

    /// Settings could not be fetched; the form keeps its defaults.
    pub fn report_load_error(&self, error: impl Display) {
        let context = ErrorContext::new("SettingsSynchronizer", "load")
            .with_message("Failed to load settings. Using defaults.")
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(AppError::Load(error.to_string()), context);
    }

    /// Saving failed; unsaved edits are kept for a retry.
    pub fn report_save_error(&self, operation: &str, error: impl Display) {
        let context = ErrorContext::new("SettingsSynchronizer", operation)
            .with_message("Failed to save some settings. Please try again.")
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(AppError::Save(error.to_string()), context);
    }

    /// Theme-related errors (non-critical, use warning)
    pub fn report_theme_error(&self, operation: &str, error: impl Display) {
        let app_error = AppError::Api(format!("Theme {operation} failed: {error}"));
        self.report_warning(app_error, "ThemeController", operation);
    }

    /// Configuration errors with a suggestion
    pub fn report_config_error(&self, config_type: &str, error: impl Display) {
        let context = ErrorContext::new("Configuration", "load_config")
            .with_message(&format!("Failed to load {config_type} configuration"))
            .with_technical_details(&error.to_string())
            .with_suggestion("Check your configuration file and restart the application");
        self.report(AppError::Config(error.to_string()), context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ChannelNotifier, NoticeLevel};
    use std::sync::mpsc;

    fn reporter() -> (ErrorReporter, mpsc::Receiver<Notice>) {
        let (tx, rx) = mpsc::channel();
        (ErrorReporter::new(Arc::new(ChannelNotifier::new(tx))), rx)
    }

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new("TestComponent", "test_operation");
        assert_eq!(context.component, "TestComponent");
        assert_eq!(context.operation, "test_operation");
        assert_eq!(
            context.user_message,
            "An error occurred in TestComponent. Please try again."
        );
        assert_eq!(context.severity, ErrorSeverity::Error);
    }

    #[test]
    fn test_error_context_builder_pattern() {
        let context = ErrorContext::new("TestComponent", "test_operation")
            .with_message("Custom message")
            .with_technical_details("Technical information")
            .with_suggestion("Try this solution")
            .with_severity(ErrorSeverity::Warning);

        assert_eq!(context.user_message, "Custom message");
        assert_eq!(
            context.technical_details,
            Some("Technical information".to_string())
        );
        assert_eq!(context.suggestion, Some("Try this solution".to_string()));
        assert_eq!(context.severity, ErrorSeverity::Warning);
    }

    #[test]
    fn test_load_error_is_a_warning_with_fixed_message() {
        let (reporter, rx) = reporter();

        reporter.report_load_error("connection refused");

        let notice = rx.recv().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Settings Unavailable");
        assert_eq!(notice.message, "Failed to load settings. Using defaults.");
    }

    #[test]
    fn test_save_error_asks_for_retry() {
        let (reporter, rx) = reporter();

        reporter.report_save_error("bulk_save", "503");

        let notice = rx.recv().unwrap();
        assert_eq!(notice.title, "Save Failed");
        assert!(notice.message.contains("Please try again"));
    }

    #[test]
    fn test_config_error_includes_suggestion() {
        let (reporter, rx) = reporter();

        reporter.report_config_error("API", "missing api_url");

        let notice = rx.recv().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("Check your configuration file"));
    }

    #[test]
    fn test_api_error_conversion() {
        let error: AppError = ApiError::NotConfigured.into();
        assert_eq!(error, AppError::Api("API URL is not configured".to_string()));
        assert_eq!(error.to_string(), "API Error: API URL is not configured");
    }
}
