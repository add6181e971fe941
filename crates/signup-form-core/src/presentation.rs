//! Presentation mapping
//!
//! Pure functions from a [`ValidationSnapshot`] to visual states. Nothing
//! here feeds back into the engine, so a renderer for any toolkit can
//! replace this module without touching validation.

use serde::{Deserialize, Serialize};

use crate::rules::RuleTable;
use crate::schema::DisplayPolicy;
use crate::snapshot::{FieldSnapshot, ValidationSnapshot};

/// Visual state of a field or checklist row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    Neutral,
    Valid,
    Invalid,
}

/// Field state: nothing is shown until the field is touched
pub fn field_state(field: &FieldSnapshot) -> VisualState {
    match (field.touched, field.valid) {
        (false, _) => VisualState::Neutral,
        (true, true) => VisualState::Valid,
        (true, false) => VisualState::Invalid,
    }
}

/// Checklist row state: a passing rule is shown as valid even before the
/// field is touched, a failing one stays neutral until then
pub fn rule_state(touched: bool, passed: bool) -> VisualState {
    if passed {
        VisualState::Valid
    } else if touched {
        VisualState::Invalid
    } else {
        VisualState::Neutral
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRow {
    pub rule_id: String,
    pub label: String,
    pub state: VisualState,
}

/// Everything a renderer needs to draw one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub field: String,
    pub state: VisualState,
    /// Message under the field, for `first_failure` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Rule rows, for `checklist` fields
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submittable: bool,
}

impl FormView {
    /// Map a snapshot through the display policy of each field
    pub fn build(table: &RuleTable, snapshot: &ValidationSnapshot) -> Self {
        let fields = snapshot
            .iter()
            .filter_map(|field| {
                table
                    .field(&field.field)
                    .map(|bound| view_field(field, bound.display, |id| {
                        bound.rule_set.message(id).unwrap_or(id).to_string()
                    }))
            })
            .collect();

        Self {
            fields,
            submittable: snapshot.is_form_valid(),
        }
    }

    pub fn field(&self, id: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == id)
    }
}

fn view_field(
    field: &FieldSnapshot,
    display: DisplayPolicy,
    message_for: impl Fn(&str) -> String,
) -> FieldView {
    let state = field_state(field);
    match display {
        DisplayPolicy::FirstFailure => FieldView {
            field: field.field.clone(),
            state,
            message: field
                .first_failure()
                .filter(|_| field.touched)
                .map(|r| message_for(&r.rule_id)),
            checklist: Vec::new(),
        },
        DisplayPolicy::Checklist => FieldView {
            field: field.field.clone(),
            state,
            message: None,
            checklist: field
                .rule_results
                .iter()
                .map(|r| ChecklistRow {
                    rule_id: r.rule_id.clone(),
                    label: message_for(&r.rule_id),
                    state: rule_state(field.touched, r.passed),
                })
                .collect(),
        },
    }
}

/// Password reveal toggle; has no effect on validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    /// HTML-style input type for the current visibility
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Hidden => "password",
            Visibility::Shown => "text",
        }
    }

    /// Text to display for a value
    pub fn mask(self, value: &str) -> String {
        match self {
            Visibility::Hidden => "•".repeat(value.chars().count()),
            Visibility::Shown => value.to_string(),
        }
    }
}
