//! Placeholder verbs
//!
//! These commands are registered so scripts can probe for them, but carry no
//! behavior yet. They accept any arguments and exit successfully.

use clap::Args;

use crate::exit_code::ExitCode;

/// Arguments accepted (and ignored) by a placeholder verb
#[derive(Args, Debug)]
pub struct StubArgs {
    /// Paths the verb would operate on
    pub paths: Vec<String>,
}

/// Execute a placeholder verb
pub fn execute(name: &str) -> ExitCode {
    tracing::debug!(command = name, "command is not implemented, ignoring");
    ExitCode::Success
}
