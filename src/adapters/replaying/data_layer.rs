//! Replaying adapter for the `DataLayer` port.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{next_output, replay_result, warn_unconsumed};
use crate::adapters::recording::data_layer::{IdInput, UpdateInput};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::TODOS_PORT;
use crate::error::Result;
use crate::ports::DataLayer;
use crate::todo::{NewTodo, Todo, TodoPatch};

/// Serves recorded data layer results from a cassette.
///
/// Calls are answered from the recording in order; nothing is stored. A call
/// whose arguments differ from the recorded ones is still answered, with a
/// warning. A call the recording has no answer for fails with `Internal`.
pub struct ReplayingDataLayer {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingDataLayer {
    /// Create a replaying data layer backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn replay<T: DeserializeOwned, I: Serialize>(&self, method: &str, input: &I) -> Result<T> {
        let (recorded_input, output) = next_output(&self.replayer, TODOS_PORT, method)?;
        let actual = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);
        if actual != recorded_input {
            tracing::warn!(
                method,
                recorded = %recorded_input,
                actual = %actual,
                "replayed call differs from recording"
            );
        }
        replay_result(output)
    }
}

impl DataLayer for ReplayingDataLayer {
    fn list(&self) -> Result<Vec<Todo>> {
        self.replay("list", &())
    }

    fn get(&self, id: &str) -> Result<Todo> {
        self.replay("get", &IdInput { id })
    }

    fn add(&self, todo: NewTodo) -> Result<Todo> {
        self.replay("add", &todo)
    }

    fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        self.replay("update", &UpdateInput { id, patch: &patch })
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.replay("delete", &IdInput { id })
    }

    fn delete_all(&self) -> Result<()> {
        self.replay("delete_all", &())
    }
}

impl Drop for ReplayingDataLayer {
    fn drop(&mut self) {
        warn_unconsumed(&self.replayer, TODOS_PORT);
    }
}
