//! Data layer port: the storage interface a todo service is written against.

use crate::error::Result;
use crate::todo::{NewTodo, Todo, TodoPatch};

/// CRUD storage for todo items.
///
/// Every method completes synchronously and returns an owned value. The
/// in-memory implementation is `crate::store::TodoStore`; the recording and
/// replaying adapters wrap or stand in for it.
pub trait DataLayer: Send + Sync {
    /// Returns a snapshot of every stored todo.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store's state is unusable.
    fn list(&self) -> Result<Vec<Todo>>;

    /// Returns the todo stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `TodoNotFound` if no todo has that id.
    fn get(&self, id: &str) -> Result<Todo>;

    /// Stores a new todo under a freshly generated id and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the id cannot be assigned.
    fn add(&self, todo: NewTodo) -> Result<Todo>;

    /// Overwrites the fields supplied in `patch` and returns the merged todo.
    ///
    /// # Errors
    ///
    /// Returns `TodoNotFound` if no todo has that id.
    fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo>;

    /// Removes the todo stored under `id`. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store's state is unusable.
    fn delete(&self, id: &str) -> Result<()>;

    /// Removes every stored todo.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store's state is unusable.
    fn delete_all(&self) -> Result<()>;
}
