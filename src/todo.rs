//! Todo records and the request shapes used to create and modify them.

use serde::{Deserialize, Serialize};

/// A single todo item as exposed to callers.
///
/// Callers always receive owned copies; mutating a returned `Todo` never
/// affects the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier, immutable once issued.
    pub id: String,
    /// Free-form title. Empty strings are accepted.
    pub title: String,
    /// Client-supplied sort hint, opaque to the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Whether the item has been completed.
    pub completed: bool,
}

/// Fields supplied when adding a todo. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Title of the new item.
    pub title: String,
    /// Optional sort hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Initial completion flag.
    pub completed: bool,
}

impl NewTodo {
    /// Creates an add request.
    #[must_use]
    pub fn new(title: impl Into<String>, order: Option<i64>, completed: bool) -> Self {
        Self { title: title.into(), order, completed }
    }

    /// Builds the stored record for this request under the given id.
    #[must_use]
    pub fn into_todo(self, id: String) -> Todo {
        Todo { id, title: self.title, order: self.order, completed: self.completed }
    }
}

/// Partial update of a todo.
///
/// `None` leaves the stored field as it is, `Some` replaces it. There is no
/// way to clear `order` back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement sort hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Replacement completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only replaces the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    /// Patch that only replaces the sort hint.
    #[must_use]
    pub fn order(order: i64) -> Self {
        Self { order: Some(order), ..Self::default() }
    }

    /// Patch that only replaces the completion flag.
    #[must_use]
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Self::default() }
    }

    /// Returns `true` when applying this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.order.is_none() && self.completed.is_none()
    }

    /// Merges the supplied fields over `todo`, returning the merged record.
    #[must_use]
    pub fn apply(self, todo: &Todo) -> Todo {
        Todo {
            id: todo.id.clone(),
            title: self.title.unwrap_or_else(|| todo.title.clone()),
            order: self.order.or(todo.order),
            completed: self.completed.unwrap_or(todo.completed),
        }
    }
}
