use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Flat key/value settings map as returned by `GET /settings`.
///
/// Values stay as raw JSON until a consumer asks for a typed [`SettingValue`];
/// keys absent from the bag mean "use the default".
pub type SettingsBag = BTreeMap<String, Value>;

/// A single persisted setting value.
///
/// The remote store is schemaless, so values are serialized untagged as plain
/// JSON scalars or string arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

impl SettingValue {
    /// Convert a raw JSON value from the bag.
    ///
    /// Returns `None` for `null`, objects, and arrays containing anything but
    /// strings.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(SettingValue::Bool(*b)),
            Value::Number(n) => Some(SettingValue::Number(n.clone())),
            Value::String(s) => Some(SettingValue::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(SettingValue::List),
            Value::Null | Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SettingValue::Bool(b) => Value::Bool(*b),
            SettingValue::Number(n) => Value::Number(n.clone()),
            SettingValue::Text(s) => Value::String(s.clone()),
            SettingValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Short name of the value shape, used in validation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "boolean",
            SettingValue::Number(_) => "number",
            SettingValue::Text(_) => "string",
            SettingValue::List(_) => "string list",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Number(n) => write!(f, "{n}"),
            SettingValue::Text(s) => write!(f, "{s}"),
            SettingValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Number(value.into())
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        SettingValue::List(value)
    }
}

/// One key/value pair of a batched save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    pub key: String,
    pub value: SettingValue,
}

impl SettingEntry {
    pub fn new(key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body of a batched `POST /settings`.
#[derive(Debug, Serialize)]
pub(crate) struct SettingsBatch<'a> {
    pub settings: &'a [SettingEntry],
}

/// Profile data shown on the Mini App home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub username: Option<String>,
    pub telegram_url: Option<String>,
    pub stats: UserStats,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated_user: Option<serde_json::Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub uptime: String,
}

impl UserData {
    /// Profile shown when the API cannot be reached.
    pub fn fallback() -> Self {
        Self {
            name: "Ultroid User".to_string(),
            bio: "Ultroid Bot Owner".to_string(),
            avatar: String::new(),
            username: Some("ultroid_user".to_string()),
            telegram_url: Some("https://t.me/ultroid_user".to_string()),
            stats: UserStats {
                uptime: "0m".to_string(),
            },
            skills: vec![
                "Telegram Bot Management".to_string(),
                "Automation".to_string(),
                "Python".to_string(),
            ],
            authenticated_user: None,
            start_param: None,
            auth_date: None,
        }
    }
}

/// Response of the admin endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(
            SettingValue::from_json(&json!("!")),
            Some(SettingValue::Text("!".to_string()))
        );
        assert_eq!(
            SettingValue::from_json(&json!(true)),
            Some(SettingValue::Bool(true))
        );
        assert_eq!(SettingValue::from_json(&json!(3)), Some(SettingValue::from(3)));
    }

    #[test]
    fn test_from_json_rejects_unrepresentable_values() {
        assert_eq!(SettingValue::from_json(&Value::Null), None);
        assert_eq!(SettingValue::from_json(&json!({"a": 1})), None);
        assert_eq!(SettingValue::from_json(&json!(["a", 1])), None);
    }

    #[test]
    fn test_untagged_serialization_is_plain_json() {
        let entry = SettingEntry::new("PMWARNS", 3);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"key": "PMWARNS", "value": 3})
        );

        let tags = SettingValue::List(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(tags.to_json(), json!(["a", "b"]));
    }

    #[test]
    fn test_user_data_tolerates_missing_optional_fields() {
        let user: UserData = serde_json::from_value(json!({
            "name": "Owner",
            "bio": "",
            "avatar": "",
            "username": null,
            "telegram_url": null,
            "stats": {"uptime": "5h"},
            "skills": []
        }))
        .unwrap();
        assert_eq!(user.name, "Owner");
        assert!(user.auth_date.is_none());
    }
}
