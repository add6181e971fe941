//! Derived validation state
//!
//! Snapshots are plain values built fresh after every event. Nothing in
//! here is ever patched in place; `valid` is computed from the rule results
//! when the field snapshot is built.

use serde::{Deserialize, Serialize};

/// Outcome of one rule against the current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_id: String,
    pub passed: bool,
}

impl RuleResult {
    pub fn new(rule_id: impl Into<String>, passed: bool) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed,
        }
    }
}

/// Derived state of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub field: String,
    /// Results in rule declaration order
    pub rule_results: Vec<RuleResult>,
    /// Conjunction of `rule_results`
    pub valid: bool,
    pub touched: bool,
}

impl FieldSnapshot {
    /// Build a field snapshot; `valid` is derived, never supplied
    pub fn new(field: impl Into<String>, rule_results: Vec<RuleResult>, touched: bool) -> Self {
        let valid = rule_results.iter().all(|r| r.passed);
        Self {
            field: field.into(),
            rule_results,
            valid,
            touched,
        }
    }

    /// Whether a given rule passed, if the field has it
    pub fn passed(&self, rule_id: &str) -> Option<bool> {
        self.rule_results
            .iter()
            .find(|r| r.rule_id == rule_id)
            .map(|r| r.passed)
    }

    /// First failing rule in declaration order
    pub fn first_failure(&self) -> Option<&RuleResult> {
        self.rule_results.iter().find(|r| !r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.rule_results.iter().filter(|r| !r.passed)
    }
}

/// Derived state of the whole form, in field declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSnapshot {
    pub fields: Vec<FieldSnapshot>,
}

impl ValidationSnapshot {
    pub fn field(&self, id: &str) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|f| f.field == id)
    }

    /// True iff every field is valid
    pub fn is_form_valid(&self) -> bool {
        self.fields.iter().all(|f| f.valid)
    }

    /// Ids of fields that currently fail at least one rule
    pub fn invalid_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !f.valid)
            .map(|f| f.field.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSnapshot> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_is_conjunction() {
        let snap = FieldSnapshot::new(
            "password",
            vec![RuleResult::new("a", true), RuleResult::new("b", false)],
            false,
        );
        assert!(!snap.valid);

        let snap = FieldSnapshot::new("password", vec![RuleResult::new("a", true)], false);
        assert!(snap.valid);

        // Vacuously valid with no rules
        assert!(FieldSnapshot::new("notes", vec![], false).valid);
    }

    #[test]
    fn test_first_failure_follows_declaration_order() {
        let snap = FieldSnapshot::new(
            "email",
            vec![
                RuleResult::new("required", true),
                RuleResult::new("email", false),
                RuleResult::new("other", false),
            ],
            true,
        );
        assert_eq!(snap.first_failure().unwrap().rule_id, "email");
        assert_eq!(snap.failures().count(), 2);
        assert_eq!(snap.passed("required"), Some(true));
        assert_eq!(snap.passed("missing"), None);
    }

    #[test]
    fn test_form_validity() {
        let snapshot = ValidationSnapshot {
            fields: vec![
                FieldSnapshot::new("email", vec![RuleResult::new("email", true)], true),
                FieldSnapshot::new("password", vec![RuleResult::new("digit", false)], true),
            ],
        };
        assert!(!snapshot.is_form_valid());
        assert_eq!(snapshot.invalid_fields(), vec!["password".to_string()]);
    }
}
