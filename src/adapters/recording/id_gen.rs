//! Recording adapter for the `IdGenerator` port.

use super::record_interaction;
use crate::cassette::session::SharedRecorder;
use crate::cassette::ID_GEN_PORT;
use crate::error::Result;
use crate::ports::IdGenerator;

/// Records ID generator interactions while delegating to an inner implementation.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: SharedRecorder,
}

impl RecordingIdGenerator {
    /// Creates a new recording ID generator wrapping the given implementation.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_id(&self) -> String {
        let result = self.inner.generate_id();
        record_interaction(&self.recorder, ID_GEN_PORT, "generate_id", &(), &result);
        result
    }

    /// Only issued ids are recorded.
    fn try_generate_id(&self) -> Result<String> {
        let id = self.inner.try_generate_id()?;
        record_interaction(&self.recorder, ID_GEN_PORT, "generate_id", &(), &id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::live::SequentialIdGenerator;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;

    #[test]
    fn records_generate_id_interaction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id_gen.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        let ids = {
            let gen =
                RecordingIdGenerator::new(Box::new(SequentialIdGenerator::new()), Arc::clone(&recorder));
            vec![gen.generate_id(), gen.generate_id()]
        };
        assert_eq!(ids, vec!["1", "2"]);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].port, "id_gen");
        assert_eq!(cassette.interactions[0].method, "generate_id");
        assert_eq!(cassette.interactions[1].output, serde_json::json!("2"));
    }
}
