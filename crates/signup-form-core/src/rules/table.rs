//! Field to rule set bindings
//!
//! The table is built once from a [`FormSchema`] and is immutable after
//! that. Every configuration error is caught here, so an engine never holds
//! a partially valid table.

use std::collections::HashMap;
use std::sync::Arc;

use super::RuleSet;
use crate::error::{FormError, Result};
use crate::schema::{DisplayPolicy, FormSchema};

/// A field together with the rules bound to it
#[derive(Debug, Clone)]
pub struct BoundField {
    pub id: String,
    pub rule_set: Arc<RuleSet>,
    pub display: DisplayPolicy,
    pub sensitive: bool,
}

/// Immutable mapping from field id to its ordered rule set
#[derive(Debug, Clone)]
pub struct RuleTable {
    fields: Vec<BoundField>,
}

impl RuleTable {
    /// Resolve every field binding in a schema
    pub fn from_schema(schema: &FormSchema) -> Result<Self> {
        let mut sets: HashMap<&str, Arc<RuleSet>> = HashMap::new();
        for set in &schema.rule_sets {
            set.check_unique()?;
            if sets.insert(set.name.as_str(), Arc::new(set.clone())).is_some() {
                return Err(FormError::DuplicateRuleSet(set.name.clone()));
            }
        }

        let mut fields: Vec<BoundField> = Vec::with_capacity(schema.fields.len());
        for decl in &schema.fields {
            if fields.iter().any(|f| f.id == decl.id) {
                return Err(FormError::DuplicateField(decl.id.clone()));
            }
            let rule_set = sets
                .get(decl.rule_set.as_str())
                .cloned()
                .ok_or_else(|| FormError::UnknownRuleSet {
                    field: decl.id.clone(),
                    rule_set: decl.rule_set.clone(),
                })?;
            fields.push(BoundField {
                id: decl.id.clone(),
                rule_set,
                display: decl.display,
                sensitive: decl.sensitive,
            });
        }

        Ok(Self { fields })
    }

    /// Rules bound to a field, in declaration order
    pub fn rules_for(&self, field: &str) -> Option<&RuleSet> {
        self.field(field).map(|f| f.rule_set.as_ref())
    }

    pub fn field(&self, field: &str) -> Option<&BoundField> {
        self.fields.iter().find(|f| f.id == field)
    }

    pub(crate) fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field)
    }

    /// All bound fields, in declaration order
    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
