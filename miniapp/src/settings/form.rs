use crate::error::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashSet;
use ultroid_client::{SettingValue, SettingsBag};
use uuid::Uuid;

/// Editor kind of a field; determines the legal value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Toggle,
    Select,
    Input,
    Textarea,
    Number,
    Tags,
    Avatar,
    Theme,
    AvatarShape,
}

impl FieldKind {
    /// Name of the value shape this kind holds.
    pub fn value_shape(self) -> &'static str {
        match self {
            FieldKind::Toggle => "boolean",
            FieldKind::Number => "number",
            FieldKind::Tags => "string list",
            FieldKind::Select
            | FieldKind::Input
            | FieldKind::Textarea
            | FieldKind::Avatar
            | FieldKind::Theme
            | FieldKind::AvatarShape => "string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOption {
    pub label: String,
    pub value: SettingValue,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: SettingValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Field {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        value: impl Into<SettingValue>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            value: value.into(),
            options: Vec::new(),
            min: None,
            max: None,
            placeholder: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            fields,
        }
    }
}

/// One entry of [`SettingsForm::collect_values`].
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedValue {
    pub kind: FieldKind,
    pub key: String,
    pub value: SettingValue,
}

/// Proof that a hydration result was requested by a specific form instance.
///
/// Tickets are taken before a fetch starts; a form only accepts tickets it
/// issued itself, so a response that outlives a remount is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationTicket {
    form_id: Uuid,
}

impl HydrationTicket {
    pub fn form_id(&self) -> Uuid {
        self.form_id
    }
}

/// Sections and fields of the settings page plus the unsaved-edits flag.
///
/// The form is either clean or dirty. It becomes dirty on the first
/// successful [`set_field_value`](Self::set_field_value) and only becomes
/// clean again through [`mark_clean`](Self::mark_clean). Hydration from the
/// remote store never touches the flag.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    id: Uuid,
    sections: Vec<Section>,
    dirty: bool,
}

impl SettingsForm {
    pub fn new(sections: Vec<Section>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for field in sections.iter().flat_map(|section| &section.fields) {
            if field.key.is_empty() {
                return Err(AppError::State(format!(
                    "Field '{}' has an empty key",
                    field.label
                )));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(AppError::State(format!(
                    "Duplicate settings key '{}'",
                    field.key
                )));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            sections,
            dirty: false,
        })
    }

    pub fn instance_id(&self) -> Uuid {
        self.id
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the synchronizer after every remote write succeeded.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.sections
            .iter()
            .flat_map(|section| &section.fields)
            .find(|field| field.key == key)
    }

    /// Index of the section holding `key`.
    pub fn section_index(&self, key: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.fields.iter().any(|field| field.key == key))
    }

    /// Assign `value` verbatim to the field `key` of section `section_index`.
    ///
    /// Returns `false` and leaves the form untouched when the section does
    /// not exist or does not contain the key.
    pub fn set_field_value(&mut self, section_index: usize, key: &str, value: SettingValue) -> bool {
        let Some(section) = self.sections.get_mut(section_index) else {
            log::warn!("Ignoring edit of '{key}': no section {section_index}");
            return false;
        };
        let Some(field) = section.fields.iter_mut().find(|field| field.key == key) else {
            log::warn!("Ignoring edit of '{key}': not in section '{}'", section.title);
            return false;
        };

        field.value = value;
        self.dirty = true;
        true
    }

    /// Every field's current value in form order.
    pub fn collect_values(&self) -> Vec<CollectedValue> {
        self.sections
            .iter()
            .flat_map(|section| &section.fields)
            .map(|field| CollectedValue {
                kind: field.kind,
                key: field.key.clone(),
                value: field.value.clone(),
            })
            .collect()
    }

    pub fn ticket(&self) -> HydrationTicket {
        HydrationTicket { form_id: self.id }
    }

    /// Merge remote values into the form.
    ///
    /// Theme fields always take `active_theme_id`. Other fields take the bag
    /// value when their key is present and not null; `bag` is `None` when the
    /// fetch failed. Returns `false` without changes when `ticket` was issued
    /// by another form instance.
    pub fn hydrate(
        &mut self,
        ticket: &HydrationTicket,
        bag: Option<&SettingsBag>,
        active_theme_id: &str,
    ) -> bool {
        if ticket.form_id != self.id {
            log::warn!(
                "Discarding settings for stale form {} (current form {})",
                ticket.form_id,
                self.id
            );
            return false;
        }

        for field in self.sections.iter_mut().flat_map(|section| &mut section.fields) {
            if field.kind == FieldKind::Theme {
                field.value = SettingValue::from(active_theme_id);
                continue;
            }

            let Some(raw) = bag.and_then(|bag| bag.get(&field.key)) else {
                continue;
            };
            if raw.is_null() {
                continue;
            }
            match SettingValue::from_json(raw) {
                Some(value) => field.value = value,
                None => log::warn!(
                    "Skipping remote value for '{}': unsupported shape {raw}",
                    field.key
                ),
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use serde_json::json;

    fn sample_form() -> SettingsForm {
        SettingsForm::new(vec![
            Section::new(
                "Appearance",
                "Look and feel",
                "palette",
                vec![Field::new("theme", "Theme", FieldKind::Theme, "midnight_pro")],
            ),
            Section::new(
                "Bot",
                "Handlers",
                "cpu",
                vec![
                    Field::new("HNDLR", "Command Handler", FieldKind::Input, "."),
                    Field::new("PMWARNS", "PM Warnings", FieldKind::Number, 3)
                        .with_range(1.0, 10.0),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_form_is_clean() {
        let form = sample_form();
        assert!(!form.is_dirty());
        assert_eq!(form.sections().len(), 2);
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let result = SettingsForm::new(vec![Section::new(
            "A",
            "",
            "",
            vec![
                Field::new("HNDLR", "One", FieldKind::Input, "."),
                Field::new("HNDLR", "Two", FieldKind::Input, "!"),
            ],
        )]);
        assert!(matches!(result, Err(AppError::State(msg)) if msg.contains("HNDLR")));
    }

    #[test]
    fn test_set_field_value_marks_dirty() {
        let mut form = sample_form();
        assert!(form.set_field_value(1, "HNDLR", "!".into()));
        assert!(form.is_dirty());
        assert_eq!(form.field("HNDLR").unwrap().value, SettingValue::from("!"));
    }

    #[test]
    fn test_unknown_key_or_section_changes_nothing() {
        let mut form = sample_form();
        let before = form.collect_values();

        assert!(!form.set_field_value(1, "NOPE", "x".into()));
        assert!(!form.set_field_value(0, "HNDLR", "x".into()));
        assert!(!form.set_field_value(9, "HNDLR", "x".into()));

        assert!(!form.is_dirty());
        assert_eq!(form.collect_values(), before);
    }

    #[test]
    fn test_values_are_assigned_verbatim() {
        let mut form = sample_form();
        assert!(form.set_field_value(1, "PMWARNS", "not a number".into()));
        assert_eq!(
            form.field("PMWARNS").unwrap().value,
            SettingValue::from("not a number")
        );
    }

    #[test]
    fn test_hydrate_merges_bag_and_theme() {
        let mut form = sample_form();
        let mut bag = SettingsBag::new();
        bag.insert("HNDLR".to_string(), json!("?"));
        bag.insert("PMWARNS".to_string(), json!(null));
        bag.insert("theme".to_string(), json!("slate_noir"));
        bag.insert("UNRELATED".to_string(), json!(1));

        let ticket = form.ticket();
        assert!(form.hydrate(&ticket, Some(&bag), "warm_amber"));

        assert_eq!(form.field("HNDLR").unwrap().value, SettingValue::from("?"));
        assert_eq!(form.field("PMWARNS").unwrap().value, SettingValue::from(3));
        assert_eq!(
            form.field("theme").unwrap().value,
            SettingValue::from("warm_amber")
        );
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_hydrate_skips_unsupported_shapes() {
        let mut form = sample_form();
        let mut bag = SettingsBag::new();
        bag.insert("HNDLR".to_string(), json!({"nested": true}));

        let ticket = form.ticket();
        form.hydrate(&ticket, Some(&bag), "midnight_pro");

        assert_eq!(form.field("HNDLR").unwrap().value, SettingValue::from("."));
    }

    #[test]
    fn test_hydrate_keeps_dirty_flag() {
        let mut form = sample_form();
        form.set_field_value(1, "HNDLR", "!".into());

        let ticket = form.ticket();
        form.hydrate(&ticket, None, "midnight_pro");

        assert!(form.is_dirty());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let old = sample_form();
        let mut current = sample_form();
        let mut bag = SettingsBag::new();
        bag.insert("HNDLR".to_string(), json!("?"));

        assert!(!current.hydrate(&old.ticket(), Some(&bag), "cyber_teal"));

        assert_eq!(current.field("HNDLR").unwrap().value, SettingValue::from("."));
        assert_eq!(
            current.field("theme").unwrap().value,
            SettingValue::from("midnight_pro")
        );
    }

    #[test]
    fn test_mark_clean() {
        let mut form = sample_form();
        form.set_field_value(1, "HNDLR", "!".into());
        form.mark_clean();
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_collect_values_in_form_order() {
        let form = sample_form();
        let keys: Vec<_> = form.collect_values().into_iter().map(|v| v.key).collect();
        assert_eq!(keys, vec!["theme", "HNDLR", "PMWARNS"]);
        assert_some!(form.field("PMWARNS"));
        assert_eq!(form.section_index("PMWARNS"), Some(1));
        assert_none!(form.section_index("NOPE"));
    }
}
