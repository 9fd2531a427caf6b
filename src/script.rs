//! Operation scripts: drive a `DataLayer` from YAML or JSON data.
//!
//! ```yaml
//! operations:
//!   - op: add
//!     title: Reticulate splines
//!     order: 0
//!   - op: update
//!     id: "1"
//!     completed: true
//!   - op: list
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataLayerError;
use crate::ports::DataLayer;
use crate::todo::{NewTodo, Todo, TodoPatch};

/// One call against the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// `DataLayer::list`.
    List,
    /// `DataLayer::get`.
    Get {
        /// Todo id.
        id: String,
    },
    /// `DataLayer::add`.
    Add {
        /// Title of the new todo.
        title: String,
        /// Optional sort hint.
        #[serde(default)]
        order: Option<i64>,
        /// Initial completion flag.
        #[serde(default)]
        completed: bool,
    },
    /// `DataLayer::update`.
    Update {
        /// Todo id.
        id: String,
        /// Replacement title.
        #[serde(default)]
        title: Option<String>,
        /// Replacement sort hint.
        #[serde(default)]
        order: Option<i64>,
        /// Replacement completion flag.
        #[serde(default)]
        completed: Option<bool>,
    },
    /// `DataLayer::delete`.
    Delete {
        /// Todo id.
        id: String,
    },
    /// `DataLayer::delete_all`.
    DeleteAll,
}

impl Operation {
    /// The `op` tag of this operation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::DeleteAll => "delete_all",
        }
    }
}

/// An ordered list of operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Operations, executed in order.
    pub operations: Vec<Operation>,
}

impl Script {
    /// Parses a script from YAML (JSON is accepted too, being a YAML subset).
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid script.
    pub fn parse(text: &str) -> Result<Self, String> {
        serde_yaml::from_str(text).map_err(|e| format!("Failed to parse script: {e}"))
    }

    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid script.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?;
        Self::parse(&text).map_err(|e| format!("{e} ({})", path.display()))
    }
}

/// Successful payload of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepValue {
    /// A single todo (`get`, `add`, `update`).
    Todo(Todo),
    /// All todos (`list`).
    Todos(Vec<Todo>),
    /// No payload (`delete`, `delete_all`).
    Done,
}

/// Outcome of one executed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// The `op` tag that ran.
    pub op: String,
    /// Result payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<StepValue>,
    /// Error on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DataLayerError>,
}

impl StepOutcome {
    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs a single operation against `todos`.
#[must_use]
pub fn execute(todos: &dyn DataLayer, operation: &Operation) -> StepOutcome {
    let result = match operation.clone() {
        Operation::List => todos.list().map(StepValue::Todos),
        Operation::Get { id } => todos.get(&id).map(StepValue::Todo),
        Operation::Add { title, order, completed } => {
            todos.add(NewTodo::new(title, order, completed)).map(StepValue::Todo)
        }
        Operation::Update { id, title, order, completed } => {
            todos.update(&id, TodoPatch { title, order, completed }).map(StepValue::Todo)
        }
        Operation::Delete { id } => todos.delete(&id).map(|()| StepValue::Done),
        Operation::DeleteAll => todos.delete_all().map(|()| StepValue::Done),
    };

    let op = operation.name().to_string();
    match result {
        Ok(value) => StepOutcome { op, ok: Some(value), error: None },
        Err(error) => {
            if error.is_not_found() {
                tracing::debug!(op = %op, kind = error.kind(), error = %error, "operation failed");
            } else {
                tracing::warn!(op = %op, kind = error.kind(), error = %error, "operation failed");
            }
            StepOutcome { op, ok: None, error: Some(error) }
        }
    }
}

/// Runs every operation of `script` in order. A failing step does not stop
/// the remaining ones.
#[must_use]
pub fn run_script(todos: &dyn DataLayer, script: &Script) -> Vec<StepOutcome> {
    script.operations.iter().map(|operation| execute(todos, operation)).collect()
}
