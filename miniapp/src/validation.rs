//! Input validation for settings values and theme ids.

use crate::settings::form::{Field, FieldKind};
use crate::theme::registry::find_theme;
use ultroid_client::SettingValue;

/// Core validation trait that all validators implement.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use miniapp::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldValueError {
    #[error("'{key}' expects a {expected} value, got {actual}")]
    WrongShape {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("'{key}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: String,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("'{key}' does not offer the option '{value}'")]
    UnknownOption { key: String, value: String },
    #[error("'{value}' is not a known theme")]
    UnknownTheme { value: String },
    #[error("'{key}' expects a {expected} value, cannot read '{input}'")]
    Unparseable {
        key: String,
        expected: &'static str,
        input: String,
    },
}

/// Turn command-line text into a value of the field's shape.
///
/// Toggles accept `true`/`false`/`on`/`off`/`1`/`0`, numbers accept integers
/// and decimals, tags are comma-separated. The result still has to pass
/// [`FieldValueValidator`].
pub fn parse_field_input(field: &Field, raw: &str) -> Result<SettingValue, FieldValueError> {
    let unparseable = || FieldValueError::Unparseable {
        key: field.key.clone(),
        expected: field.kind.value_shape(),
        input: raw.to_string(),
    };
    let trimmed = raw.trim();

    match field.kind {
        FieldKind::Toggle => match trimmed.to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(SettingValue::Bool(true)),
            "false" | "off" | "no" | "0" => Ok(SettingValue::Bool(false)),
            _ => Err(unparseable()),
        },
        FieldKind::Number => {
            if let Ok(int) = trimmed.parse::<i64>() {
                return Ok(SettingValue::from(int));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(SettingValue::Number)
                .ok_or_else(unparseable)
        }
        FieldKind::Tags => Ok(SettingValue::List(
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )),
        FieldKind::Select
        | FieldKind::Input
        | FieldKind::Textarea
        | FieldKind::Avatar
        | FieldKind::Theme
        | FieldKind::AvatarShape => Ok(SettingValue::Text(raw.to_string())),
    }
}

/// Checks that a candidate value fits a field's kind, bounds and options.
///
/// The form itself stores values verbatim; hosts run this before calling
/// `set_field_value` when the value came from free-form input.
pub struct FieldValueValidator<'a> {
    field: &'a Field,
}

impl<'a> FieldValueValidator<'a> {
    pub fn new(field: &'a Field) -> Self {
        Self { field }
    }
}

impl Validator<SettingValue> for FieldValueValidator<'_> {
    type Error = FieldValueError;

    fn validate(&self, input: &SettingValue) -> Result<(), Self::Error> {
        let field = self.field;
        let expected = field.kind.value_shape();
        let shape_ok = matches!(
            (field.kind, input),
            (FieldKind::Toggle, SettingValue::Bool(_))
                | (FieldKind::Number, SettingValue::Number(_))
                | (FieldKind::Tags, SettingValue::List(_))
                | (
                    FieldKind::Select
                        | FieldKind::Input
                        | FieldKind::Textarea
                        | FieldKind::Avatar
                        | FieldKind::Theme
                        | FieldKind::AvatarShape,
                    SettingValue::Text(_)
                )
        );
        if !shape_ok {
            return Err(FieldValueError::WrongShape {
                key: field.key.clone(),
                expected,
                actual: input.kind_name(),
            });
        }

        if let Some(value) = input.as_f64() {
            let min = field.min.unwrap_or(f64::NEG_INFINITY);
            let max = field.max.unwrap_or(f64::INFINITY);
            if value < min || value > max {
                return Err(FieldValueError::OutOfRange {
                    key: field.key.clone(),
                    min,
                    max,
                    value,
                });
            }
        }

        if matches!(field.kind, FieldKind::Select | FieldKind::AvatarShape)
            && !field.options.is_empty()
            && !field.options.iter().any(|option| &option.value == input)
        {
            return Err(FieldValueError::UnknownOption {
                key: field.key.clone(),
                value: input.to_string(),
            });
        }

        if field.kind == FieldKind::Theme {
            if let Some(id) = input.as_str() {
                ThemeIdValidator.validate(id)?;
            }
        }

        Ok(())
    }
}

/// Rejects ids that the registry would silently replace with the default.
pub struct ThemeIdValidator;

impl Validator<str> for ThemeIdValidator {
    type Error = FieldValueError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match find_theme(input) {
            Some(_) => Ok(()),
            None => Err(FieldValueError::UnknownTheme {
                value: input.to_string(),
            }),
        }
    }
}
