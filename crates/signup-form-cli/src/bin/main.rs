//! Signup form CLI
//!
//! # Exit Codes
//!
//! - 0: Form valid / submitted
//! - 1: Form invalid / submission suppressed
//! - 3: Invalid input (unknown field)
//! - 4: File not found or inaccessible
//! - 5: Schema errors
//! - 10: Internal error

use clap::Parser;
use signup_form_cli::{run_cli, FormCli};

fn main() {
    let cli = FormCli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
