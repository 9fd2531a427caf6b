//! Command dispatch and handlers.

pub mod config;
pub mod demo;
pub mod run;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::script::StepOutcome;

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "TODO_STORE_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `TODO_STORE_RECORD` is set to a directory path, every port
/// interaction of `run` and `demo` is recorded to per-port cassette files in
/// that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    match command {
        Command::Config => config::run(config),
        Command::Run { script, replay: Some(cassette) } => {
            if env::var_os(RECORD_ENV).is_some() {
                return Err(format!("{RECORD_ENV} cannot be combined with --replay"));
            }
            let ctx = ServiceContext::replaying(cassette)?;
            run::run(&ctx, script)
        }
        Command::Run { script, replay: None } => {
            with_context(config, |ctx| run::run(ctx, script))
        }
        Command::Demo => with_context(config, demo::run),
    }
}

/// Runs `f` with a live context, or a recording one when `TODO_STORE_RECORD`
/// is set.
fn with_context<F>(config: &Config, f: F) -> Result<(), String>
where
    F: FnOnce(&ServiceContext) -> Result<(), String>,
{
    let Some(dir) = env::var_os(RECORD_ENV) else {
        return f(&ServiceContext::live(config));
    };

    let (ctx, session) = ServiceContext::recording_at(PathBuf::from(dir), config)?;
    let result = f(&ctx);

    // Adapters hold the recorders; release them before writing.
    drop(ctx);
    finish_recording(session, result)
}

/// Finish a recording session after the command produced `result`.
///
/// A recording failure takes precedence; a command error it displaces is
/// logged.
fn finish_recording(
    session: RecordingSession,
    result: Result<(), String>,
) -> Result<(), String> {
    match session.finish() {
        Ok(output_dir) => {
            eprintln!("Recording saved to: {}", output_dir.display());
            result
        }
        Err(finish_err) => {
            if let Err(command_err) = &result {
                tracing::warn!(error = %command_err, "command failed before recording failed");
            }
            Err(finish_err)
        }
    }
}

/// Prints each outcome as one JSON line on stdout.
fn print_outcomes(outcomes: &[StepOutcome]) -> Result<(), String> {
    for outcome in outcomes {
        let line = serde_json::to_string(outcome)
            .map_err(|e| format!("Failed to encode {} outcome: {e}", outcome.op))?;
        println!("{line}");
    }
    Ok(())
}
