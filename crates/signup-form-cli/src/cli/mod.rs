//! CLI module for the signup form
//!
//! A terminal renderer for the validation engine: feeds values and events
//! in, prints snapshots and visual state out.

pub mod commands;
pub mod output;

pub use commands::{FormCli, FormCommands};
pub use output::OutputFormat;

use std::io::Write;

use signup_form_core::FormError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Form is valid (or submission went through)
    Success = 0,
    /// Form is invalid (or submission was suppressed)
    FormInvalid = 1,
    /// Invalid input or arguments, including unknown fields
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Schema declaration or parsing errors
    SchemaError = 5,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    pub fn from_form_validity(valid: bool) -> Self {
        if valid {
            ExitCode::Success
        } else {
            ExitCode::FormInvalid
        }
    }

    /// Map a failed run to an exit code
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<FormError>() {
            Some(e) if e.is_config_error() => ExitCode::SchemaError,
            Some(FormError::ParseError(_)) => ExitCode::SchemaError,
            Some(FormError::UnknownField(_)) => ExitCode::InvalidInput,
            Some(FormError::FileError(_)) => ExitCode::FileError,
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments, writing results to `out`
pub fn run(cli: FormCli, out: &mut dyn Write) -> anyhow::Result<ExitCode> {
    let engine = commands::load_engine(cli.schema.as_deref())?;

    match cli.command {
        FormCommands::Check {
            values,
            untouched,
            reveal,
            format,
        } => commands::execute_check(engine, values, untouched, reveal, format, out),
        FormCommands::Replay { events, format } => {
            commands::execute_replay(engine, &events, format, out)
        }
        FormCommands::Rules { format } => commands::execute_rules(&engine, format, out),
        FormCommands::Submit { values, format } => {
            commands::execute_submit(engine, values, format, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::FormInvalid), 1);
        assert_eq!(i32::from(ExitCode::SchemaError), 5);
    }

    #[test]
    fn test_exit_code_from_error() {
        let err = anyhow::Error::new(FormError::DuplicateField("email".to_string()));
        assert_eq!(ExitCode::from_error(&err), ExitCode::SchemaError);

        let err = anyhow::Error::new(FormError::unknown_field("phone"));
        assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidInput);

        let err = anyhow::Error::new(FormError::FileError("gone".to_string()))
            .context("loading schema x.toml");
        assert_eq!(ExitCode::from_error(&err), ExitCode::FileError);

        let err = anyhow::anyhow!("boom");
        assert_eq!(ExitCode::from_error(&err), ExitCode::InternalError);
    }
}
