use crate::errors::ApiError;
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Environment variable consulted when neither an explicit URL nor a remote
/// `config.json` yields an API base URL.
pub const API_URL_ENV: &str = "ULTROID_API_URL";

// Resolved once per process, like the Mini App's window-level cache.
static RESOLVED_API_URL: OnceCell<String> = OnceCell::new();

#[derive(Debug, Deserialize)]
struct RemoteConfig {
    #[serde(rename = "apiUrl")]
    api_url: Option<String>,
}

/// Sources used to find the management API base URL.
#[derive(Debug, Clone, Default)]
pub struct ApiEndpoint {
    explicit_url: Option<String>,
    config_url: Option<String>,
}

impl ApiEndpoint {
    pub fn new(explicit_url: Option<String>, config_url: Option<String>) -> Self {
        Self {
            explicit_url: explicit_url.filter(|u| !u.trim().is_empty()),
            config_url: config_url.filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn explicit(url: impl Into<String>) -> Self {
        Self::new(Some(url.into()), None)
    }

    /// Resolve the base URL.
    ///
    /// An explicit URL always wins and is not cached. Otherwise the process
    /// cache is consulted, then the remote `config.json`, then
    /// [`API_URL_ENV`]. The first discovered URL is cached for the process.
    pub async fn resolve(&self, http: &reqwest::Client) -> Result<String, ApiError> {
        if let Some(url) = &self.explicit_url {
            return Ok(normalize(url));
        }

        if let Some(url) = RESOLVED_API_URL.get() {
            return Ok(url.clone());
        }

        let discovered = match &self.config_url {
            Some(config_url) => match fetch_remote_api_url(http, config_url).await {
                Ok(Some(url)) => Some(url),
                Ok(None) => {
                    log::warn!("Remote config at {config_url} has no apiUrl, using fallback");
                    None
                }
                Err(e) => {
                    log::error!("Failed to load config: {e}");
                    None
                }
            },
            None => None,
        };

        let url = discovered
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .filter(|u| !u.trim().is_empty())
            .ok_or(ApiError::NotConfigured)?;

        Ok(RESOLVED_API_URL.get_or_init(|| normalize(&url)).clone())
    }
}

async fn fetch_remote_api_url(
    http: &reqwest::Client,
    config_url: &str,
) -> Result<Option<String>, ApiError> {
    let response = http
        .get(config_url)
        .send()
        .await
        .map_err(|e| ApiError::Config(format!("{config_url}: {e}")))?;

    if !response.status().is_success() {
        return Err(ApiError::Config(format!(
            "{config_url} returned {}",
            response.status()
        )));
    }

    let config: RemoteConfig = response
        .json()
        .await
        .map_err(|e| ApiError::Config(format!("{config_url}: {e}")))?;

    Ok(config.api_url.filter(|u| !u.trim().is_empty()))
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_url_wins_and_is_normalized() {
        let endpoint = ApiEndpoint::explicit("https://bot.example.com/ ");
        let url = endpoint.resolve(&reqwest::Client::new()).await.unwrap();
        assert_eq!(url, "https://bot.example.com");
    }

    #[test]
    fn test_blank_sources_are_ignored() {
        let endpoint = ApiEndpoint::new(Some("  ".to_string()), Some(String::new()));
        assert!(endpoint.explicit_url.is_none());
        assert!(endpoint.config_url.is_none());
    }
}
