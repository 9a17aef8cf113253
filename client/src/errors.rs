use thiserror::Error;

/// Errors returned by the Ultroid management API client.
///
/// Every variant carries enough context to be logged on its own. Callers in
/// the Mini App never treat these as fatal; they are surfaced to the user as a
/// dismissable notice and the in-memory state is left valid.
///
/// # Error Categories
///
/// ## Setup Errors
/// - [`NotConfigured`] - No API base URL could be resolved
/// - [`Config`] - The remote `config.json` could not be read
///
/// ## Request Errors
/// - [`Request`] - Transport failure (connect, TLS, timeout, body read)
/// - [`Status`] - The API answered with a non-success status code
/// - [`InvalidResponse`] - The body could not be interpreted
///
/// # Examples
///
/// ```no_run
/// use client::ApiError;
///
/// fn describe(error: &ApiError) -> &'static str {
///     match error {
///         ApiError::Status { status, .. } if *status == 401 => "init data rejected",
///         ApiError::Request { .. } => "network problem",
///         _ => "unexpected API failure",
///     }
/// }
/// ```
///
/// [`NotConfigured`]: ApiError::NotConfigured
/// [`Config`]: ApiError::Config
/// [`Request`]: ApiError::Request
/// [`Status`]: ApiError::Status
/// [`InvalidResponse`]: ApiError::InvalidResponse
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API base URL was configured and none could be discovered.
    #[error("API URL is not configured")]
    NotConfigured,

    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {url} - {reason}")]
    Request { url: String, reason: String },

    /// The API returned a non-2xx status.
    #[error("API request failed: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response body was not in the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Remote configuration discovery failed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub(crate) fn request(url: &str, error: impl std::fmt::Display) -> Self {
        ApiError::Request {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether retrying the same call later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Request { .. } => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            ApiError::NotConfigured | ApiError::InvalidResponse(_) | ApiError::Config(_) => false,
        }
    }
}
