//! In-memory todo store implementing the `DataLayer` port.
//!
//! All todos live in one map guarded by a single mutex, so compound
//! operations such as lookup-then-write in `update` are atomic with respect
//! to other callers. `list` returns todos in insertion order; `update` keeps
//! an entry's position in that order.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::adapters::live::id_gen::SequentialIdGenerator;
use crate::error::{DataLayerError, Result};
use crate::ports::{DataLayer, IdGenerator};
use crate::todo::{NewTodo, Todo, TodoPatch};

/// In-memory todo storage keyed by generated id.
pub struct TodoStore {
    todos: Mutex<TodoMap>,
    id_gen: Box<dyn IdGenerator>,
}

#[derive(Default)]
struct TodoMap {
    entries: HashMap<String, Slot>,
    next_seq: u64,
}

/// A stored todo plus its insertion sequence number.
struct Slot {
    seq: u64,
    todo: Todo,
}

impl TodoStore {
    /// Creates an empty store issuing sequential ids (`"1"`, `"2"`, ...).
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(SequentialIdGenerator::new()))
    }

    /// Creates an empty store that draws ids from `id_gen`.
    #[must_use]
    pub fn with_id_generator(id_gen: Box<dyn IdGenerator>) -> Self {
        Self { todos: Mutex::new(TodoMap::default()), id_gen }
    }

    /// Number of stored todos.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store's lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.entries.len())
    }

    /// Returns `true` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store's lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.entries.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, TodoMap>> {
        self.todos.lock().map_err(|_| DataLayerError::Internal("todo store lock poisoned".into()))
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLayer for TodoStore {
    fn list(&self) -> Result<Vec<Todo>> {
        let map = self.lock()?;
        let mut slots: Vec<&Slot> = map.entries.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        Ok(slots.into_iter().map(|slot| slot.todo.clone()).collect())
    }

    fn get(&self, id: &str) -> Result<Todo> {
        let map = self.lock()?;
        map.entries
            .get(id)
            .map(|slot| slot.todo.clone())
            .ok_or_else(|| DataLayerError::TodoNotFound(id.to_string()))
    }

    fn add(&self, todo: NewTodo) -> Result<Todo> {
        let mut map = self.lock()?;
        let id = self.id_gen.try_generate_id()?;
        if id.is_empty() {
            return Err(DataLayerError::Internal("id generator produced an empty id".into()));
        }
        if map.entries.contains_key(&id) {
            return Err(DataLayerError::Internal(format!(
                "id generator produced an id already in use: {id}"
            )));
        }

        let todo = todo.into_todo(id.clone());
        let seq = map.next_seq;
        map.next_seq += 1;
        map.entries.insert(id, Slot { seq, todo: todo.clone() });
        Ok(todo)
    }

    fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        let mut map = self.lock()?;
        let slot =
            map.entries.get_mut(id).ok_or_else(|| DataLayerError::TodoNotFound(id.to_string()))?;
        if !patch.is_empty() {
            slot.todo = patch.apply(&slot.todo);
        }
        Ok(slot.todo.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.lock()?.entries.remove(id);
        Ok(())
    }

    fn delete_all(&self) -> Result<()> {
        self.lock()?.entries.clear();
        Ok(())
    }
}
