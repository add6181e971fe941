//! Input events from the renderer

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FormError, Result};
use crate::schema::FileFormat;

/// A single user interaction with a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormEvent {
    /// The field's text changed
    Change { field: String, value: String },
    /// The field lost focus
    Blur { field: String },
}

impl FormEvent {
    pub fn change(field: impl Into<String>, value: impl Into<String>) -> Self {
        FormEvent::Change {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn blur(field: impl Into<String>) -> Self {
        FormEvent::Blur {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FormEvent::Change { field, .. } | FormEvent::Blur { field } => field,
        }
    }

    /// Load a sequence of events from a JSON or YAML file
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<FormEvent>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match FileFormat::from_path(path)? {
            FileFormat::Json => Ok(serde_json::from_str(&content)?),
            FileFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
            FileFormat::Toml => Err(FormError::parse_error(
                "Event streams must be JSON or YAML sequences",
            )),
        }
    }
}
