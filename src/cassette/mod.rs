//! Cassette format for recording and replaying port interactions.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

/// Port name used for `IdGenerator` interactions.
pub const ID_GEN_PORT: &str = "id_gen";

/// Port name used for `DataLayer` interactions.
pub const TODOS_PORT: &str = "todos";
