//! Rule framework for field validation
//!
//! A rule is a named, pure predicate over a field's current text plus the
//! message shown when it fails. Predicates are a closed set of tagged
//! variants ([`Check`]) so a rule table can be declared in a schema file and
//! still be exhaustively tested.

pub mod email;
pub mod password;
pub mod table;

pub use table::{BoundField, RuleTable};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{FormError, Result};
use crate::snapshot::RuleResult;

/// The predicate a rule applies to a field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Value must not be empty
    Required,
    /// Value must look like `local@domain.tld`
    EmailShape,
    /// Value must have at least `min` characters
    MinLength { min: usize },
    /// Value must contain an ASCII uppercase letter
    ContainsUppercase,
    /// Value must contain a decimal digit
    ContainsDigit,
    /// Value must not contain whitespace anywhere
    NoWhitespace,
}

impl Check {
    /// Evaluate the predicate against a value
    pub fn test(&self, value: &str) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::EmailShape => email::is_email_shape(value),
            Check::MinLength { min } => password::has_min_length(value, *min),
            Check::ContainsUppercase => password::has_uppercase(value),
            Check::ContainsDigit => password::has_digit(value),
            Check::NoWhitespace => password::has_no_whitespace(value),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Required => write!(f, "required"),
            Check::EmailShape => write!(f, "email shape"),
            Check::MinLength { min } => write!(f, "length >= {}", min),
            Check::ContainsUppercase => write!(f, "contains uppercase"),
            Check::ContainsDigit => write!(f, "contains digit"),
            Check::NoWhitespace => write!(f, "no whitespace"),
        }
    }
}

/// A single named rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Identifier, unique within its rule set
    pub id: String,
    /// Predicate applied to the value
    pub check: Check,
    /// Failure message shown to the user
    pub message: String,
}

impl Rule {
    /// Create a new rule
    pub fn new(id: impl Into<String>, check: Check, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            check,
            message: message.into(),
        }
    }

    /// Evaluate this rule against a value
    pub fn evaluate(&self, value: &str) -> RuleResult {
        RuleResult::new(self.id.clone(), self.check.test(value))
    }
}

/// An ordered, named collection of rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set, rejecting duplicate rule ids
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Result<Self> {
        let set = Self {
            name: name.into(),
            rules,
        };
        set.check_unique()?;
        Ok(set)
    }

    /// Ensure no rule id appears twice
    pub fn check_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(FormError::DuplicateRule {
                    rule_set: self.name.clone(),
                    rule: rule.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Evaluate every rule, in declaration order
    ///
    /// All rules run even when an earlier one fails, so a checklist can show
    /// every row at once.
    pub fn evaluate(&self, value: &str) -> Vec<RuleResult> {
        self.rules.iter().map(|rule| rule.evaluate(value)).collect()
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Failure message for a rule id
    pub fn message(&self, id: &str) -> Option<&str> {
        self.rule(id).map(|r| r.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
