//! CLI command definitions for the signup form
//!
//! Each command builds a fresh engine from the resolved schema, drives it
//! with events, and renders the resulting snapshot.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use signup_form_core::{
    submit, FormEvent, FormSchema, LoggingSink, ValidationEngine, Visibility,
};

use super::output::{self, CheckReport, OutputFormat, ReplayStep};
use super::ExitCode;

/// Signup form validation CLI
///
/// Drive the form validation engine from the terminal: check values,
/// replay recorded interactions, list rules, or attempt a submission.
#[derive(Parser, Debug)]
#[command(name = "signup-form")]
#[command(about = "Signup form validation engine - check, replay and submit form input", long_about = None)]
#[command(version)]
pub struct FormCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Schema file (TOML, YAML or JSON); defaults to the built-in signup form
    #[arg(long, global = true, env = "SIGNUP_FORM_SCHEMA")]
    pub schema: Option<PathBuf>,

    #[command(subcommand)]
    pub command: FormCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum FormCommands {
    /// Apply field values and show the resulting validation state
    Check {
        /// Field value as FIELD=VALUE (repeatable)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        values: Vec<(String, String)>,

        /// Do not mark fields as touched after setting them
        #[arg(long)]
        untouched: bool,

        /// Show sensitive values in clear text
        #[arg(long)]
        reveal: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Replay a recorded event stream and show the state after each event
    Replay {
        /// JSON or YAML file holding a sequence of change/blur events
        #[arg(short, long)]
        events: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List the rule table
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Apply field values and attempt a submission
    Submit {
        /// Field value as FIELD=VALUE (repeatable)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        values: Vec<(String, String)>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Parse a `FIELD=VALUE` argument; the value may be empty or contain `=`
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got '{}'", s)),
    }
}

/// Build an engine from a schema path, or the built-in signup schema
pub fn load_engine(schema: Option<&Path>) -> anyhow::Result<ValidationEngine> {
    let schema = match schema {
        Some(path) => FormSchema::from_path(path)
            .with_context(|| format!("loading schema {}", path.display()))?,
        None => FormSchema::signup(),
    };
    let engine = ValidationEngine::new(&schema)?;
    tracing::debug!(fields = engine.rules().len(), "schema loaded");
    Ok(engine)
}

pub fn execute_check(
    mut engine: ValidationEngine,
    values: Vec<(String, String)>,
    untouched: bool,
    reveal: bool,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    for (field, value) in &values {
        engine.set_value(field, value.as_str())?;
        if !untouched {
            engine.mark_touched(field)?;
        }
    }

    let shown = values
        .into_iter()
        .map(|(field, value)| {
            let sensitive = engine.rules().field(&field).map_or(false, |f| f.sensitive);
            (field, value, sensitive)
        })
        .collect();
    let visibility = if reveal {
        Visibility::Shown
    } else {
        Visibility::Hidden
    };

    let report = CheckReport::new(engine.rules(), engine.snapshot(), shown, visibility);
    report.render(format, out)?;
    Ok(ExitCode::from_form_validity(report.form_valid))
}

pub fn execute_replay(
    mut engine: ValidationEngine,
    events: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let events = FormEvent::load_all(events)
        .with_context(|| format!("loading events {}", events.display()))?;

    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        let snapshot = engine.apply(&event)?;
        steps.push(ReplayStep { event, snapshot });
    }

    output::render_replay(&steps, format, out)?;
    Ok(ExitCode::from_form_validity(engine.is_form_valid()))
}

pub fn execute_rules(
    engine: &ValidationEngine,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    output::render_rules(engine.rules(), format, out)?;
    Ok(ExitCode::Success)
}

pub fn execute_submit(
    mut engine: ValidationEngine,
    values: Vec<(String, String)>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    for (field, value) in values {
        engine.set_value(&field, value)?;
    }

    let mut sink = LoggingSink::for_table(engine.rules());
    let outcome = submit(&mut engine, &mut sink)?;
    output::render_submit(&outcome, format, out)?;
    Ok(ExitCode::from_form_validity(outcome.is_submitted()))
}
