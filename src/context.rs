//! Service context wiring a `DataLayer` to live, recording or replaying adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::{LiveIdGenerator, SequentialIdGenerator};
use crate::adapters::recording::{RecordingDataLayer, RecordingIdGenerator};
use crate::adapters::replaying::{ReplayingDataLayer, ReplayingIdGenerator};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::{Config, IdStrategy};
use crate::error::DataLayerError;
use crate::ports::{DataLayer, IdGenerator};
use crate::store::TodoStore;

/// Bundles the data layer a caller talks to.
///
/// Constructors decide which adapters sit behind the port; callers only
/// ever see `ctx.todos`.
pub struct ServiceContext {
    /// Todo storage.
    pub todos: Box<dyn DataLayer>,
}

impl ServiceContext {
    /// Creates a live context: a fresh in-memory store using the configured
    /// id strategy.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self::with_store(TodoStore::with_id_generator(id_generator_for(config.id_strategy)))
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn with_store(store: TodoStore) -> Self {
        Self { todos: Box::new(store) }
    }

    /// Creates a recording context writing per-port cassettes into `dir`.
    ///
    /// Both the id generator and the data layer are recorded. Drop the
    /// context before calling `finish()` on the returned session.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(
        dir: impl Into<PathBuf>,
        config: &Config,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(dir)?;
        tracing::info!(dir = %session.output_dir().display(), "recording cassettes");

        let id_gen = RecordingIdGenerator::new(
            id_generator_for(config.id_strategy),
            Arc::clone(&session.id_gen),
        );
        let store = TodoStore::with_id_generator(Box::new(id_gen));
        let todos = RecordingDataLayer::new(Box::new(store), Arc::clone(&session.todos));

        Ok((Self { todos: Box::new(todos) }, session))
    }

    /// Creates a replaying context from a single cassette file.
    ///
    /// If the cassette contains `todos` interactions the data layer is served
    /// from them directly; otherwise a real store runs on the recorded ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let has_todos =
            cassette.interactions.iter().any(|i| i.port == crate::cassette::TODOS_PORT);

        let todos: Box<dyn DataLayer> = if has_todos {
            Box::new(ReplayingDataLayer::new(CassetteReplayer::new(&cassette)))
        } else {
            Box::new(TodoStore::with_id_generator(Box::new(ReplayingIdGenerator::new(
                CassetteReplayer::new(&cassette),
            ))))
        };
        Ok(Self { todos })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// A `todos` cassette replays the data layer outright. Without one, a real
    /// store runs with ids from the `id_gen` cassette; with neither, every
    /// `add` fails with `Internal`.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        let todos: Box<dyn DataLayer> = match (replayers.todos, replayers.id_gen) {
            (Some(todos), _) => Box::new(ReplayingDataLayer::new(todos)),
            (None, Some(ids)) => {
                Box::new(TodoStore::with_id_generator(Box::new(ReplayingIdGenerator::new(ids))))
            }
            (None, None) => {
                Box::new(TodoStore::with_id_generator(Box::new(UnconfiguredIdGenerator)))
            }
        };
        Ok(Self { todos })
    }
}

fn id_generator_for(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
        IdStrategy::Uuid => Box::new(LiveIdGenerator::new()),
    }
}

const UNCONFIGURED_ID_GEN: &str =
    "IdGenerator port not configured in CassetteConfig: no cassette loaded for id_gen";

struct UnconfiguredIdGenerator;

impl IdGenerator for UnconfiguredIdGenerator {
    fn generate_id(&self) -> String {
        panic!("{UNCONFIGURED_ID_GEN}");
    }

    fn try_generate_id(&self) -> Result<String, DataLayerError> {
        Err(DataLayerError::Internal(UNCONFIGURED_ID_GEN.into()))
    }
}
