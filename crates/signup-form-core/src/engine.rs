//! Validation engine
//!
//! Holds the value and touched flag of every field and turns them into a
//! [`ValidationSnapshot`] after each event. Rule results are recomputed for
//! a field whenever its value changes; snapshots are then assembled from
//! that state, so nothing a renderer reads can be stale.
//!
//! Per field there are two independent axes: `touched` (absorbing once
//! true) and `valid` (tracks the current value, both directions).

use crate::error::{FormError, Result};
use crate::event::FormEvent;
use crate::rules::RuleTable;
use crate::schema::FormSchema;
use crate::snapshot::{FieldSnapshot, RuleResult, ValidationSnapshot};
use crate::submit::FormValues;

#[derive(Debug, Clone)]
struct FieldState {
    value: String,
    touched: bool,
    results: Vec<RuleResult>,
}

/// The core validation engine
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    table: RuleTable,
    /// Parallel to `table.fields()`
    states: Vec<FieldState>,
}

impl ValidationEngine {
    /// Build an engine from a schema
    ///
    /// Fails on any configuration error; there is no partially built engine.
    pub fn new(schema: &FormSchema) -> Result<Self> {
        Ok(Self::from_table(RuleTable::from_schema(schema)?))
    }

    /// Engine for the built-in signup form
    pub fn signup() -> Result<Self> {
        Self::new(&FormSchema::signup())
    }

    /// Build an engine over an already resolved rule table
    ///
    /// Every field starts empty and untouched, with results for the empty
    /// value already computed.
    pub fn from_table(table: RuleTable) -> Self {
        let states = table
            .fields()
            .iter()
            .map(|f| FieldState {
                value: String::new(),
                touched: false,
                results: f.rule_set.evaluate(""),
            })
            .collect();

        tracing::debug!(fields = table.len(), "validation engine initialised");
        Self { table, states }
    }

    fn index_of(&self, field: &str) -> Result<usize> {
        self.table
            .position(field)
            .ok_or_else(|| FormError::unknown_field(field))
    }

    /// Store a new value for a field and re-run that field's rules
    ///
    /// Other fields are not re-evaluated and `touched` is left as is.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<ValidationSnapshot> {
        let idx = self.index_of(field)?;
        let value = value.into();
        let results = self.table.fields()[idx].rule_set.evaluate(&value);

        let state = &mut self.states[idx];
        state.value = value;
        state.results = results;

        tracing::debug!(
            field,
            valid = state.results.iter().all(|r| r.passed),
            "field re-evaluated"
        );
        Ok(self.snapshot())
    }

    /// Mark a field as touched; repeated calls have no further effect
    pub fn mark_touched(&mut self, field: &str) -> Result<ValidationSnapshot> {
        let idx = self.index_of(field)?;
        let state = &mut self.states[idx];
        if !state.touched {
            state.touched = true;
            tracing::debug!(field, "field touched");
        }
        Ok(self.snapshot())
    }

    /// Mark every field as touched
    pub fn touch_all(&mut self) -> ValidationSnapshot {
        for state in &mut self.states {
            state.touched = true;
        }
        self.snapshot()
    }

    /// Dispatch an input event
    pub fn apply(&mut self, event: &FormEvent) -> Result<ValidationSnapshot> {
        match event {
            FormEvent::Change { field, value } => self.set_value(field, value.as_str()),
            FormEvent::Blur { field } => self.mark_touched(field),
        }
    }

    /// Current derived state; no side effects
    pub fn snapshot(&self) -> ValidationSnapshot {
        let fields = self
            .table
            .fields()
            .iter()
            .zip(&self.states)
            .map(|(bound, state)| {
                FieldSnapshot::new(bound.id.clone(), state.results.clone(), state.touched)
            })
            .collect();

        ValidationSnapshot { fields }
    }

    /// True iff every field passes all of its rules
    pub fn is_form_valid(&self) -> bool {
        self.states
            .iter()
            .all(|s| s.results.iter().all(|r| r.passed))
    }

    pub fn is_touched(&self, field: &str) -> Option<bool> {
        self.table.position(field).map(|i| self.states[i].touched)
    }

    /// Current stored value of a field
    pub fn value(&self, field: &str) -> Option<&str> {
        self.table
            .position(field)
            .map(|i| self.states[i].value.as_str())
    }

    /// All current values as a plain record
    pub fn values(&self) -> FormValues {
        self.table
            .fields()
            .iter()
            .zip(&self.states)
            .map(|(bound, state)| (bound.id.clone(), state.value.clone()))
            .collect()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.table
    }
}
