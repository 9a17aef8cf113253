use crate::endpoint::ApiEndpoint;
use crate::errors::ApiError;
use crate::identity::IdentityProvider;
use crate::model::{
    SettingEntry, SettingValue, SettingsBag, SettingsBatch, StatusResponse, UserData,
};
use crate::store::SettingsStore;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const SETTINGS_PATH: &str = "/settings";
const USER_PATH: &str = "/api/user";
const RESTART_PATH: &str = "/api/admin/restart";
const UPDATE_PATH: &str = "/api/admin/update";

#[derive(Serialize)]
struct SingleSetting<'a> {
    key: &'a str,
    value: &'a SettingValue,
}

/// HTTP client for the Ultroid management API.
///
/// Implements [`SettingsStore`] and exposes the profile and admin endpoints
/// used by the Mini App home page.
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: ApiEndpoint,
    identity: Arc<dyn IdentityProvider>,
}

impl ApiClient {
    pub fn new(endpoint: ApiEndpoint, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            identity,
        }
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(
        endpoint: ApiEndpoint,
        identity: Arc<dyn IdentityProvider>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("HTTP client creation failed: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            identity,
        })
    }

    /// Profile of the bot owner.
    ///
    /// Falls back to [`UserData::fallback`] when the call fails so the home
    /// page can always render.
    pub async fn get_user_data(&self) -> UserData {
        match self.request::<UserData, ()>(Method::GET, USER_PATH, None).await {
            Ok(user) => user,
            Err(e) => {
                log::error!("API Error: {e}");
                UserData::fallback()
            }
        }
    }

    pub async fn restart_bot(&self) -> Result<StatusResponse, ApiError> {
        self.request::<StatusResponse, ()>(Method::POST, RESTART_PATH, None)
            .await
            .inspect_err(|e| log::error!("API Error: {e}"))
    }

    pub async fn update_bot(&self) -> Result<StatusResponse, ApiError> {
        self.request::<StatusResponse, ()>(Method::POST, UPDATE_PATH, None)
            .await
            .inspect_err(|e| log::error!("API Error: {e}"))
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let base_url = self.endpoint.resolve(&self.http).await?;
        let url = format!("{base_url}{path}");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("Content-Type", "application/json");

        match self.identity.authorization() {
            Some(header) => {
                request = request.header("Authorization", header.as_str());
            }
            None => {
                log::warn!("No init data available - request will not be authenticated");
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        log::debug!("{method} {url}");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "API Error Response: status={}, statusText={}, data={}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                body
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl SettingsStore for ApiClient {
    async fn fetch_settings(&self) -> Result<SettingsBag, ApiError> {
        let body: Value = self
            .request::<Value, ()>(Method::GET, SETTINGS_PATH, None)
            .await?;

        match body {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(ApiError::InvalidResponse(format!(
                "expected a settings object, got {}",
                json_kind(&other)
            ))),
        }
    }

    async fn save_setting(&self, key: &str, value: &SettingValue) -> Result<(), ApiError> {
        let body = SingleSetting { key, value };
        self.request::<Value, _>(Method::POST, SETTINGS_PATH, Some(&body))
            .await
            .map(|_| ())
    }

    async fn save_settings(&self, entries: &[SettingEntry]) -> Result<(), ApiError> {
        let body = SettingsBatch { settings: entries };
        self.request::<Value, _>(Method::POST, SETTINGS_PATH, Some(&body))
            .await
            .map(|_| ())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::StaticIdentity;
    use serde_json::json;

    #[test]
    fn test_single_setting_body_shape() {
        let value = SettingValue::from("cyber_teal");
        let body = SingleSetting {
            key: "theme",
            value: &value,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"key": "theme", "value": "cyber_teal"})
        );
    }

    #[test]
    fn test_batch_body_shape() {
        let entries = vec![
            SettingEntry::new("HNDLR", "!"),
            SettingEntry::new("BOT_MODE", true),
        ];
        let body = SettingsBatch { settings: &entries };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"settings": [
                {"key": "HNDLR", "value": "!"},
                {"key": "BOT_MODE", "value": true}
            ]})
        );
    }

    #[tokio::test]
    async fn test_unreachable_api_falls_back_to_default_profile() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let client = ApiClient::with_timeout(
            ApiEndpoint::explicit("http://127.0.0.1:9"),
            Arc::new(StaticIdentity::anonymous()),
            Duration::from_millis(500),
        )
        .unwrap();

        let user = client.get_user_data().await;
        assert_eq!(user, UserData::fallback());
    }
}
