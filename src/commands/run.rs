//! `todo-store run` command.

use std::path::Path;

use super::print_outcomes;
use crate::context::ServiceContext;
use crate::script::{run_script, Script};

/// Execute the `run` command: load `script` and run it against `ctx.todos`.
///
/// Step failures are reported in the printed outcomes and do not fail the
/// command.
///
/// # Errors
///
/// Returns an error string if the script cannot be loaded.
pub fn run(ctx: &ServiceContext, script: &Path) -> Result<(), String> {
    let script_data = Script::load(script)?;
    tracing::info!(
        script = %script.display(),
        operations = script_data.operations.len(),
        "running script"
    );

    let outcomes = run_script(&*ctx.todos, &script_data);
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(steps = outcomes.len(), failed, "script finished");

    print_outcomes(&outcomes)
}
