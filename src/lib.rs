//! In-memory storage backend for the Todo-Backend contract.
//!
//! [`store::TodoStore`] implements the [`ports::DataLayer`] interface that a
//! todo service is written against. The remaining modules wrap it for
//! record/replay, configuration and the `todo-store` CLI.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod script;
pub mod store;
pub mod todo;

pub use error::{DataLayerError, Result};
pub use ports::{DataLayer, IdGenerator};
pub use store::TodoStore;
pub use todo::{NewTodo, Todo, TodoPatch};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration loading or
/// command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = config::Config::load(cli.config.as_deref()).map_err(|err| err.to_string())?;
    logging::init(&config);
    commands::dispatch(&cli.command, &config)
}
