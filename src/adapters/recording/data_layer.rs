//! Recording adapter for the `DataLayer` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::cassette::TODOS_PORT;
use crate::error::Result;
use crate::ports::DataLayer;
use crate::todo::{NewTodo, Todo, TodoPatch};

/// Records data layer calls while delegating to an inner implementation.
pub struct RecordingDataLayer {
    inner: Box<dyn DataLayer>,
    recorder: SharedRecorder,
}

impl RecordingDataLayer {
    /// Creates a recording data layer wrapping `inner`.
    pub fn new(inner: Box<dyn DataLayer>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }

    fn record<T: Serialize, I: Serialize>(&self, method: &str, input: &I, result: &Result<T>) {
        record_result(&self.recorder, TODOS_PORT, method, input, result);
    }
}

/// Recorded input of `get` and `delete`.
#[derive(Serialize)]
pub(crate) struct IdInput<'a> {
    pub(crate) id: &'a str,
}

/// Recorded input of `update`: the id plus the supplied patch fields.
#[derive(Serialize)]
pub(crate) struct UpdateInput<'a> {
    pub(crate) id: &'a str,
    #[serde(flatten)]
    pub(crate) patch: &'a TodoPatch,
}

impl DataLayer for RecordingDataLayer {
    fn list(&self) -> Result<Vec<Todo>> {
        let result = self.inner.list();
        self.record("list", &(), &result);
        result
    }

    fn get(&self, id: &str) -> Result<Todo> {
        let result = self.inner.get(id);
        self.record("get", &IdInput { id }, &result);
        result
    }

    fn add(&self, todo: NewTodo) -> Result<Todo> {
        let input = todo.clone();
        let result = self.inner.add(todo);
        self.record("add", &input, &result);
        result
    }

    fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        let input = patch.clone();
        let result = self.inner.update(id, patch);
        self.record("update", &UpdateInput { id, patch: &input }, &result);
        result
    }

    fn delete(&self, id: &str) -> Result<()> {
        let result = self.inner.delete(id);
        self.record("delete", &IdInput { id }, &result);
        result
    }

    fn delete_all(&self) -> Result<()> {
        let result = self.inner.delete_all();
        self.record("delete_all", &(), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::store::TodoStore;

    #[test]
    fn records_every_call_with_its_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        {
            let todos = RecordingDataLayer::new(Box::new(TodoStore::new()), Arc::clone(&recorder));
            let added = todos.add(NewTodo::new("Reticulate splines", Some(0), false)).unwrap();
            todos.update(&added.id, TodoPatch::completed(true)).unwrap();
            assert!(todos.get("dummyID").is_err());
            todos.delete_all().unwrap();
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        let methods: Vec<&str> = cassette.interactions.iter().map(|i| i.method.as_str()).collect();
        assert_eq!(methods, vec!["add", "update", "get", "delete_all"]);

        let update = &cassette.interactions[1];
        assert_eq!(update.input, json!({"id": "1", "completed": true}));
        assert_eq!(update.output["Ok"]["completed"], json!(true));

        let get = &cassette.interactions[2];
        assert_eq!(
            get.output,
            json!({"Err": {"kind": "todo_not_found", "message": "dummyID"}})
        );
        assert_eq!(cassette.interactions[3].output, json!({"Ok": null}));
    }
}
