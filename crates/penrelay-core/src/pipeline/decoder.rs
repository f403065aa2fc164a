//! Bottom pipeline stage: raw bytes to decoded events.

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::domain::event::{InputEvent, RAW_RECORD_SIZE};
use crate::pipeline::error::PipelineError;
use crate::pipeline::EventStream;

/// Decodes fixed-size little-endian records from a byte source.
///
/// Each pull reads exactly [`RAW_RECORD_SIZE`] bytes and interprets them per
/// the wire layout in [`crate::domain::event`].  No event is skipped or
/// coalesced here; filtering is a downstream concern.
///
/// A read that ends cleanly on a record boundary terminates the stream
/// without error.  A partial record or any other read failure becomes the
/// terminal error, which [`close`](EventStream::close) reports.
pub struct RecordDecoder<R: Read> {
    // Taken on close so the source is dropped (and thus released) exactly
    // once even if close is called repeatedly.
    source: Option<R>,
    err: Option<PipelineError>,
}

impl<R: Read> RecordDecoder<R> {
    pub fn new(source: R) -> Self {
        Self {
            source: Some(source),
            err: None,
        }
    }

    /// Reads one full record, tolerating short intermediate reads.
    ///
    /// Returns `Ok(None)` on a clean end of stream (zero bytes read),
    /// `Ok(Some(..))` for a full record, and an error for a partial record
    /// or read failure.
    fn read_record(source: &mut R) -> Result<Option<[u8; RAW_RECORD_SIZE]>, PipelineError> {
        let mut buf = [0u8; RAW_RECORD_SIZE];
        let mut filled = 0;
        while filled < RAW_RECORD_SIZE {
            match source.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(PipelineError::TruncatedRecord {
                        expected: RAW_RECORD_SIZE,
                        read: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(PipelineError::Transport(e.to_string())),
            }
        }
        Ok(Some(buf))
    }
}

impl<R: Read> EventStream for RecordDecoder<R> {
    fn next_event(&mut self) -> Option<InputEvent> {
        if self.err.is_some() {
            // Prevent re-entry after an error.
            return None;
        }
        let source = self.source.as_mut()?;
        match Self::read_record(source) {
            Ok(Some(raw)) => Some(InputEvent::from_raw(&raw)),
            Ok(None) => {
                debug!("event source reached end of stream");
                None
            }
            Err(e) => {
                debug!(error = %e, "event source terminated");
                self.err = Some(e);
                None
            }
        }
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        // Decode/read errors take precedence over anything that happens at
        // close time; dropping the source is the close.
        drop(self.source.take());
        match &self.err {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}
