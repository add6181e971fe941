//! Declarative form schema
//!
//! A schema lists the rule sets and binds each field to one of them. The
//! signup form ships as [`FormSchema::signup`]; other schemas can be loaded
//! from TOML, YAML or JSON files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FormError, Result};
use crate::rules::{Check, Rule, RuleSet};

/// How a field surfaces its failing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPolicy {
    /// One message at a time, from the first failing rule
    #[default]
    FirstFailure,
    /// Every rule as a live checklist row
    Checklist,
}

/// Binding of a field id to a named rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub id: String,
    pub rule_set: String,
    #[serde(default)]
    pub display: DisplayPolicy,
    /// Redact the value when the submitted record is logged
    #[serde(default)]
    pub sensitive: bool,
}

impl FieldDecl {
    pub fn new(id: impl Into<String>, rule_set: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rule_set: rule_set.into(),
            display: DisplayPolicy::default(),
            sensitive: false,
        }
    }

    pub fn with_display(mut self, display: DisplayPolicy) -> Self {
        self.display = display;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Complete form declaration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub rule_sets: Vec<RuleSet>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// Supported schema and event file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(FileFormat::Toml),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(FormError::parse_error(format!(
                "Unsupported file extension: {}",
                path.display()
            ))),
        }
    }
}

impl FormSchema {
    /// The registration form: an email field and a password field
    pub fn signup() -> Self {
        Self {
            rule_sets: vec![
                RuleSet {
                    name: "email".to_string(),
                    rules: vec![
                        Rule::new("required", Check::Required, "Email is required"),
                        Rule::new("email", Check::EmailShape, "Invalid email"),
                    ],
                },
                RuleSet {
                    name: "password".to_string(),
                    rules: vec![
                        Rule::new(
                            "min_length",
                            Check::MinLength { min: 8 },
                            "8 characters or more",
                        ),
                        Rule::new(
                            "uppercase",
                            Check::ContainsUppercase,
                            "Uppercase and lowercase letters",
                        ),
                        Rule::new("digit", Check::ContainsDigit, "At least one digit"),
                        Rule::new("no_spaces", Check::NoWhitespace, "No spaces allowed"),
                    ],
                },
            ],
            fields: vec![
                FieldDecl::new("email", "email"),
                FieldDecl::new("password", "password")
                    .with_display(DisplayPolicy::Checklist)
                    .sensitive(),
            ],
        }
    }

    /// Load a schema file, choosing the parser by extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse schema text in the given format
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let schema = match format {
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        };
        Ok(schema)
    }

    pub fn rule_set(&self, name: &str) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PASSWORD_TOML: &str = r#"
[[rule_sets]]
name = "password"
rules = [
    { id = "min_length", check = { kind = "min_length", min = 12 }, message = "12 characters or more" },
    { id = "no_spaces", check = { kind = "no_whitespace" }, message = "No spaces allowed" },
]

[[fields]]
id = "password"
rule_set = "password"
display = "checklist"
sensitive = true
"#;

    #[test]
    fn test_signup_schema_shape() {
        let schema = FormSchema::signup();
        let ids: Vec<_> = schema.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["email", "password"]);

        let password = schema.rule_set("password").unwrap();
        let rule_ids: Vec<_> = password.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(rule_ids, vec!["min_length", "uppercase", "digit", "no_spaces"]);
    }

    #[test]
    fn test_parse_toml() {
        let schema = FormSchema::parse(PASSWORD_TOML, FileFormat::Toml).unwrap();
        let set = schema.rule_set("password").unwrap();
        assert_eq!(set.rules[0].check, Check::MinLength { min: 12 });
        assert_eq!(schema.fields[0].display, DisplayPolicy::Checklist);
        assert!(schema.fields[0].sensitive);
    }

    #[test]
    fn test_parse_yaml_defaults_display() {
        let yaml = r#"
rule_sets:
  - name: email
    rules:
      - id: required
        check: { kind: required }
        message: Email is required
fields:
  - id: email
    rule_set: email
"#;
        let schema = FormSchema::parse(yaml, FileFormat::Yaml).unwrap();
        assert_eq!(schema.fields[0].display, DisplayPolicy::FirstFailure);
        assert!(!schema.fields[0].sensitive);
    }

    #[test]
    fn test_json_roundtrip_of_signup() {
        let json = serde_json::to_string(&FormSchema::signup()).unwrap();
        let parsed = FormSchema::parse(&json, FileFormat::Json).unwrap();
        assert_eq!(parsed, FormSchema::signup());
    }

    #[test]
    fn test_unknown_check_kind_is_parse_error() {
        let json = r#"{"rule_sets":[{"name":"x","rules":[{"id":"a","check":{"kind":"telepathy"},"message":"m"}]}]}"#;
        let err = FormSchema::parse(json, FileFormat::Json).unwrap_err();
        assert!(matches!(err, FormError::ParseError(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(PASSWORD_TOML.as_bytes()).unwrap();

        let schema = FormSchema::from_path(file.path()).unwrap();
        assert_eq!(schema.fields.len(), 1);
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let err = FormSchema::from_path(file.path()).unwrap_err();
        assert!(matches!(err, FormError::ParseError(_)));
    }

    #[test]
    fn test_file_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.yml")).unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")).unwrap(), FileFormat::Json);
        assert!(FileFormat::from_path(Path::new("schema")).is_err());
    }
}
