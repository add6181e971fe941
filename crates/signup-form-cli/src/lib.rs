//! Signup Form CLI
//!
//! Terminal front end for `signup-form-core`. It plays the role of the
//! renderer: values and recorded events go into the engine, snapshots come
//! back out as a colored view or as JSON/YAML.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Check a pair of values
//! signup-form check --set email=a@b.com --set 'password=Abc defg1'
//!
//! # Replay a recorded interaction
//! signup-form replay --events session.json --format json
//!
//! # Use a custom schema
//! SIGNUP_FORM_SCHEMA=form.toml signup-form rules
//! ```

pub mod cli;

pub use cli::{ExitCode, FormCli, FormCommands, OutputFormat};

/// Run the CLI application against stdout
pub fn run_cli(cli: FormCli) -> ExitCode {
    let quiet = cli.quiet;
    let mut stdout = std::io::stdout().lock();
    let mut sink = std::io::sink();
    let out: &mut dyn std::io::Write = if quiet { &mut sink } else { &mut stdout };

    match cli::run(cli, out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from_error(&e)
        }
    }
}
