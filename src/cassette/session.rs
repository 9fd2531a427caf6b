//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use super::{ID_GEN_PORT, TODOS_PORT};

/// Shared handle to a recorder; adapters hold clones while recording.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Owns one `CassetteRecorder` per port for the duration of a recording.
///
/// Cassettes are written to `<dir>/<port>.cassette.yaml` by [`finish`].
///
/// [`finish`]: RecordingSession::finish
pub struct RecordingSession {
    /// Recorder for ID generator interactions.
    pub id_gen: SharedRecorder,
    /// Recorder for data layer interactions.
    pub todos: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a recording session writing into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", output_dir.display())
        })?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let make_recorder = |port: &str| -> SharedRecorder {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            id_gen: make_recorder(ID_GEN_PORT),
            todos: make_recorder(TODOS_PORT),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Every adapter holding a recorder must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: SharedRecorder, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            let count = recorder.len();
            let path =
                recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            tracing::debug!(port, count, path = %path.display(), "cassette written");
            Ok(())
        }

        finish_one(self.id_gen, ID_GEN_PORT)?;
        finish_one(self.todos, TODOS_PORT)?;

        Ok(self.output_dir)
    }
}
