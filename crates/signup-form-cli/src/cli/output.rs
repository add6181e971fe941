//! Output formatting for the signup form CLI
//!
//! Renders engine snapshots as JSON, YAML, or a colored terminal view. The
//! table view is the terminal counterpart of the form: field borders become
//! status icons, checklist rows become colored lines.

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::Write;

use signup_form_core::{
    FieldView, FormEvent, FormView, RuleTable, SubmitOutcome, ValidationSnapshot, Visibility,
    VisualState,
};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable colored view
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

fn paint(text: &str, state: VisualState) -> ColoredString {
    match state {
        VisualState::Neutral => text.dimmed(),
        VisualState::Valid => text.green(),
        VisualState::Invalid => text.red(),
    }
}

fn icon(state: VisualState) -> ColoredString {
    match state {
        VisualState::Neutral => paint("·", state),
        VisualState::Valid => paint("+", state),
        VisualState::Invalid => paint("x", state),
    }
}

/// Write JSON or YAML; returns false for the table format
fn write_structured<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(value)?)?,
        OutputFormat::Table => return Ok(false),
    }
    Ok(true)
}

/// State of the form after a set of values was applied
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub form_valid: bool,
    pub snapshot: ValidationSnapshot,
    pub view: FormView,
    #[serde(skip)]
    pub values: Vec<(String, String, bool)>,
    #[serde(skip)]
    pub visibility: Visibility,
}

impl CheckReport {
    pub fn new(
        table: &RuleTable,
        snapshot: ValidationSnapshot,
        values: Vec<(String, String, bool)>,
        visibility: Visibility,
    ) -> Self {
        let view = FormView::build(table, &snapshot);
        Self {
            form_valid: snapshot.is_form_valid(),
            snapshot,
            view,
            values,
            visibility,
        }
    }

    pub fn render(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
        if write_structured(self, format, out)? {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", "Signup Form".cyan().bold())?;
        writeln!(out, "{}", "=".repeat(60))?;
        for field in &self.view.fields {
            let value = self
                .values
                .iter()
                .find(|(id, _, _)| *id == field.field)
                .map(|(_, v, sensitive)| {
                    if *sensitive {
                        self.visibility.mask(v)
                    } else {
                        v.clone()
                    }
                })
                .unwrap_or_default();
            render_field(field, &value, out)?;
        }
        writeln!(out, "{}", "-".repeat(60))?;

        let summary = if self.form_valid {
            "Form is valid, submission allowed".green()
        } else {
            "Form is invalid, submission blocked".red()
        };
        writeln!(out, "{}", summary)?;
        Ok(())
    }
}

fn render_field(field: &FieldView, value: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{} {:<12} {}",
        icon(field.state),
        field.field.bold(),
        paint(value, field.state)
    )?;
    if let Some(message) = &field.message {
        writeln!(out, "    {}", paint(message, field.state))?;
    }
    for row in &field.checklist {
        writeln!(out, "    {} {}", icon(row.state), paint(&row.label, row.state))?;
    }
    Ok(())
}

/// One replayed event and the snapshot that followed it
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub event: FormEvent,
    pub snapshot: ValidationSnapshot,
}

pub fn render_replay(
    steps: &[ReplayStep],
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if write_structured(steps, format, out)? {
        return Ok(());
    }

    for (index, step) in steps.iter().enumerate() {
        let label = match &step.event {
            FormEvent::Change { field, .. } => format!("change {}", field),
            FormEvent::Blur { field } => format!("blur {}", field),
        };
        writeln!(out, "{} {}", format!("#{}", index + 1).cyan(), label)?;
        for field in step.snapshot.iter() {
            let rules: Vec<String> = field
                .rule_results
                .iter()
                .map(|r| format!("{}={}", r.rule_id, if r.passed { "ok" } else { "fail" }))
                .collect();
            let valid = if field.valid { "valid".green() } else { "invalid".red() };
            writeln!(
                out,
                "    {:<12} {} touched={} [{}]",
                field.field,
                valid,
                field.touched,
                rules.join(", ")
            )?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct RuleRow {
    field: String,
    rule: String,
    check: String,
    message: String,
}

pub fn render_rules(table: &RuleTable, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    let rows: Vec<RuleRow> = table
        .fields()
        .iter()
        .flat_map(|bound| {
            bound.rule_set.rules.iter().map(move |rule| RuleRow {
                field: bound.id.clone(),
                rule: rule.id.clone(),
                check: rule.check.to_string(),
                message: rule.message.clone(),
            })
        })
        .collect();

    if write_structured(&rows, format, out)? {
        return Ok(());
    }

    writeln!(out, "{}", "Rule Table".cyan().bold())?;
    writeln!(out, "{}", "=".repeat(60))?;
    for row in &rows {
        writeln!(
            out,
            "{:<12} {:<12} {:<20} {}",
            row.field, row.rule, row.check, row.message
        )?;
    }
    Ok(())
}

pub fn render_submit(
    outcome: &SubmitOutcome,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if write_structured(outcome, format, out)? {
        return Ok(());
    }

    match outcome {
        SubmitOutcome::Submitted => writeln!(out, "{} {}", "+".green(), "Submitted".green())?,
        SubmitOutcome::Suppressed { invalid_fields } => writeln!(
            out,
            "{} {} ({})",
            "x".red(),
            "Submission suppressed".red(),
            invalid_fields.join(", ")
        )?,
    }
    Ok(())
}
