//! Recording adapters that capture interactions to cassettes.

pub mod data_layer;
pub mod id_gen;

pub use data_layer::RecordingDataLayer;
pub use id_gen::RecordingIdGenerator;

use serde::Serialize;

use crate::cassette::session::SharedRecorder;

/// Record an interaction with a plain (non-`Result`) return value.
///
/// Mirror of `replaying::next_output`.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = to_json(input);
    let output_json = to_json(output);
    push(recorder, port, method, input_json, output_json);
}

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// - `Ok(v)` is recorded as `{"Ok": v}`
/// - `Err(e)` is recorded as `{"Err": e}`
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: Serialize,
    I: Serialize,
{
    let input_json = to_json(input);
    let output_json = match result {
        Ok(v) => serde_json::json!({ "Ok": to_json(v) }),
        Err(e) => serde_json::json!({ "Err": to_json(e) }),
    };
    push(recorder, port, method, input_json, output_json);
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize recorded value");
        serde_json::Value::Null
    })
}

fn push(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    match recorder.lock() {
        Ok(mut guard) => {
            guard.record(port, method, input, output);
            tracing::debug!(port, method, "recorded interaction");
        }
        Err(_) => tracing::warn!(port, method, "recorder lock poisoned; interaction dropped"),
    }
}
