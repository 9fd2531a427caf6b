//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. A port without a path is not replayed.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the ID generator port cassette file.
    pub id_gen: Option<PathBuf>,
    /// Path to the data layer port cassette file.
    pub todos: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the ID generator port.
    pub id_gen: Option<CassetteReplayer>,
    /// Replayer for the data layer port.
    pub todos: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Returns a config where all port paths are `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Uses the conventional file names inside a recording directory
    /// (`id_gen.cassette.yaml`, `todos.cassette.yaml`), keeping only the
    /// files that exist.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self { id_gen: existing(super::ID_GEN_PORT), todos: existing(super::TODOS_PORT) }
    }

    /// Load a single cassette file and create a replayer over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Ok(CassetteReplayer::new(&Cassette::load(path)?))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            id_gen: self.id_gen.as_deref().map(Self::load_port_cassette).transpose()?,
            todos: self.todos.as_deref().map(Self::load_port_cassette).transpose()?,
        })
    }
}
