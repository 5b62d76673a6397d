//! Incremental drain of the result stream into the panel store.
//!
//! Transport chunks arrive at arbitrary byte boundaries; the shared
//! [`StreamDecoder`] reassembles complete event lines and everything decoded
//! from a chunk is applied to panel state in one pass. Malformed lines and
//! drop decisions are reported back so the caller can log them — one bad line
//! never stops the stream.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use events::{DecodeError, StreamDecoder};

use crate::state::panels::{ApplyOutcome, PanelsState};

/// Per-chunk application summary for caller-side logging.
#[derive(Debug, Default)]
pub struct ChunkOutcome {
    pub applied: usize,
    /// Events decoded fine but not routed (stale run, removed panel, …).
    pub dropped: Vec<ApplyOutcome>,
    /// Lines that failed to decode and were skipped.
    pub malformed: Vec<DecodeError>,
}

/// Feed one transport chunk through the decoder into panel state.
pub fn drain_chunk(
    decoder: &mut StreamDecoder,
    panels: &mut PanelsState,
    run_id: u64,
    chunk: &[u8],
) -> ChunkOutcome {
    let mut outcome = ChunkOutcome::default();
    for entry in decoder.push(chunk) {
        apply_entry(panels, run_id, entry, &mut outcome);
    }
    outcome
}

/// Flush the decoder at end-of-stream (recovers a truncated final record).
pub fn drain_end(decoder: &mut StreamDecoder, panels: &mut PanelsState, run_id: u64) -> ChunkOutcome {
    let mut outcome = ChunkOutcome::default();
    if let Some(entry) = decoder.finish() {
        apply_entry(panels, run_id, entry, &mut outcome);
    }
    outcome
}

fn apply_entry(
    panels: &mut PanelsState,
    run_id: u64,
    entry: Result<events::GenerationResult, DecodeError>,
    outcome: &mut ChunkOutcome,
) {
    match entry {
        Ok(event) => match panels.apply_result(run_id, &event) {
            ApplyOutcome::Applied => outcome.applied += 1,
            dropped => outcome.dropped.push(dropped),
        },
        Err(error) => outcome.malformed.push(error),
    }
}
