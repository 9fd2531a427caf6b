//! Replaying adapters that serve recorded interactions.

pub mod data_layer;
pub mod id_gen;

pub use data_layer::ReplayingDataLayer;
pub use id_gen::ReplayingIdGenerator;

use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::{DataLayerError, Result};

/// Take the next recorded `(input, output)` for `port::method`.
///
/// Mirror of `recording::record_interaction`. A cassette with nothing left
/// for `port::method` yields an `Internal` error.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<(serde_json::Value, serde_json::Value)> {
    let mut guard = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    match guard.try_next_interaction(port, method) {
        Some(interaction) => Ok((interaction.input, interaction.output)),
        None => Err(DataLayerError::Internal(guard.exhausted_message(port, method))),
    }
}

/// Logs a warning when a replay ends with recorded interactions unserved.
pub(crate) fn warn_unconsumed(replayer: &Mutex<CassetteReplayer>, port: &str) {
    let guard = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    if !guard.is_exhausted() {
        tracing::warn!(
            port,
            remaining = guard.remaining(),
            "replay ended with unconsumed interactions"
        );
    }
}

/// Decode a recorded `{"Ok": v}` / `{"Err": e}` output.
///
/// Mirror of `recording::record_result`. Payloads that do not decode are
/// reported as `Internal` errors.
pub(crate) fn replay_result<T: DeserializeOwned>(output: serde_json::Value) -> Result<T> {
    let mut map = match output {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(DataLayerError::Internal(format!(
                "recorded output is not an Ok/Err object: {other}"
            )))
        }
    };

    if let Some(value) = map.remove("Ok") {
        return serde_json::from_value(value)
            .map_err(|e| DataLayerError::Internal(format!("malformed recorded value: {e}")));
    }
    if let Some(error) = map.remove("Err") {
        let error: DataLayerError = serde_json::from_value(error)
            .map_err(|e| DataLayerError::Internal(format!("malformed recorded error: {e}")))?;
        return Err(error);
    }
    Err(DataLayerError::Internal("recorded output has neither Ok nor Err".into()))
}
