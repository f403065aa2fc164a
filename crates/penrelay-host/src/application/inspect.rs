//! Debug event inspector: renders admitted raw events as JSON lines.
//!
//! An alternate top-level mode for calibrating and troubleshooting a device:
//! instead of driving the pointer, every admitted event is written as one
//! JSON object per line with both the numeric type/code and their symbolic
//! names.  The gesture state machine is bypassed entirely.

use std::io::Write;

use serde_json::json;
use thiserror::Error;

use penrelay_core::domain::ecodes;
use penrelay_core::{EventStream, PipelineError};

/// Why the inspector stopped.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The output sink rejected a write.
    #[error("failed to write event record: {0}")]
    Write(#[from] std::io::Error),

    /// The event stream below the inspector failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Drains `events`, writing one JSON record per event to `out`, then closes
/// the stream and surfaces its terminal error.
///
/// Unknown types and codes are rendered as their decimal value, so the
/// output is still usable against firmware that emits codes the name tables
/// do not cover.
pub fn run_inspector<S: EventStream, W: Write>(
    mut events: S,
    out: &mut W,
) -> Result<(), InspectError> {
    while let Some(ev) = events.next_event() {
        let type_name = ecodes::type_name(ev.event_type)
            .map(str::to_owned)
            .unwrap_or_else(|| ev.event_type.to_string());
        let code_name = ecodes::code_name(ev.event_type, ev.code)
            .map(str::to_owned)
            .unwrap_or_else(|| ev.code.to_string());
        let record = json!({
            "eventType": ev.event_type,
            "eventTypeName": type_name,
            "eventCode": ev.code,
            "eventCodeName": code_name,
            "eventValue": ev.value,
        });
        writeln!(out, "{record}")?;
    }
    events.close()?;
    Ok(())
}
