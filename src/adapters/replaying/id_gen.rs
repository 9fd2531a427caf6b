//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::{next_output, warn_unconsumed};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::ID_GEN_PORT;
use crate::error::{DataLayerError, Result};
use crate::ports::IdGenerator;

/// Replays recorded IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        self.try_generate_id().unwrap_or_else(|e| panic!("{e}"))
    }

    fn try_generate_id(&self) -> Result<String> {
        match next_output(&self.replayer, ID_GEN_PORT, "generate_id")?.1 {
            serde_json::Value::String(id) => Ok(id),
            other => Err(DataLayerError::Internal(format!(
                "id_gen::generate_id: expected string output, got {other}"
            ))),
        }
    }
}

impl Drop for ReplayingIdGenerator {
    fn drop(&mut self) {
        warn_unconsumed(&self.replayer, ID_GEN_PORT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(outputs: &[serde_json::Value]) -> CassetteReplayer {
        let interactions = outputs
            .iter()
            .zip(0..)
            .map(|(output, seq)| Interaction {
                seq,
                port: "id_gen".into(),
                method: "generate_id".into(),
                input: json!(null),
                output: output.clone(),
            })
            .collect();
        CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        })
    }

    #[test]
    fn replaying_id_generator() {
        let gen = ReplayingIdGenerator::new(make_replayer(&[json!("uuid-001"), json!("uuid-002")]));
        assert_eq!(gen.generate_id(), "uuid-001");
        assert_eq!(gen.generate_id(), "uuid-002");
    }

    #[test]
    fn non_string_output_is_an_internal_error() {
        let gen = ReplayingIdGenerator::new(make_replayer(&[json!(42)]));
        let err = gen.try_generate_id().unwrap_err();
        assert!(err.to_string().contains("expected string output"), "{err}");
    }

    #[test]
    fn running_dry_is_an_internal_error() {
        let gen = ReplayingIdGenerator::new(make_replayer(&[json!("only")]));
        assert_eq!(gen.try_generate_id().unwrap(), "only");

        let err = gen.try_generate_id().unwrap_err();
        assert!(matches!(err, DataLayerError::Internal(ref m) if m.contains("Cassette exhausted")));
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn infallible_form_panics_when_dry() {
        let gen = ReplayingIdGenerator::new(make_replayer(&[]));
        let _ = gen.generate_id();
    }
}
