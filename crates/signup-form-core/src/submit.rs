//! Submission gate
//!
//! The engine never blocks a submission itself. [`submit`] reads
//! `is_form_valid()` and either hands the plain value record to a
//! [`SubmissionSink`] or suppresses the submission and touches every field
//! so the renderer surfaces what is wrong.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::engine::ValidationEngine;
use crate::error::Result;
use crate::rules::RuleTable;

/// Plain `field -> value` record handed to the submission collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// External collaborator that receives validated form data
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn submit(&mut self, values: &FormValues) -> Result<()>;
}

/// Sink that only logs the submitted record
#[derive(Debug, Clone, Default)]
pub struct LoggingSink {
    redacted: BTreeSet<String>,
}

impl LoggingSink {
    pub fn new<I, S>(redacted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            redacted: redacted.into_iter().map(Into::into).collect(),
        }
    }

    /// Redact every field the table marks as sensitive
    pub fn for_table(table: &RuleTable) -> Self {
        Self::new(
            table
                .fields()
                .iter()
                .filter(|f| f.sensitive)
                .map(|f| f.id.clone()),
        )
    }

    /// The record as it will be logged
    pub fn redact(&self, values: &FormValues) -> FormValues {
        values
            .iter()
            .map(|(field, value)| {
                let shown = if self.redacted.contains(field) {
                    "***".to_string()
                } else {
                    value.to_string()
                };
                (field.to_string(), shown)
            })
            .collect()
    }
}

impl SubmissionSink for LoggingSink {
    fn submit(&mut self, values: &FormValues) -> Result<()> {
        let record = serde_json::to_string(&self.redact(values))?;
        tracing::info!(%record, "form submitted");
        Ok(())
    }
}

/// What happened to a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The record was handed to the sink
    Submitted,
    /// At least one field was invalid; nothing was sent
    Suppressed { invalid_fields: Vec<String> },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Gate a submission on form validity
///
/// A suppressed submission counts as an evaluation trigger for every field,
/// so all fields end up touched. Errors only come from the sink.
pub fn submit(engine: &mut ValidationEngine, sink: &mut dyn SubmissionSink) -> Result<SubmitOutcome> {
    if !engine.is_form_valid() {
        let snapshot = engine.touch_all();
        let invalid_fields = snapshot.invalid_fields();
        tracing::warn!(?invalid_fields, "submission suppressed");
        return Ok(SubmitOutcome::Suppressed { invalid_fields });
    }

    let values = engine.values();
    if let Err(e) = sink.submit(&values) {
        tracing::error!(error = %e, "submission sink failed");
        return Err(e);
    }
    Ok(SubmitOutcome::Submitted)
}
