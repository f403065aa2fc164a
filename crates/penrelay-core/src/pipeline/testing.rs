//! In-memory stream fakes for unit and integration tests.
//!
//! The real pipeline bottoms out in a byte source that usually comes from a
//! remote device.  `StaticEvents` replaces everything below the stage under
//! test with a canned event sequence and an optional terminal error, so the
//! filtering, gesture, and limiting rules can be exercised hermetically.

use std::collections::VecDeque;
use std::time::UNIX_EPOCH;

use crate::domain::event::InputEvent;
use crate::pipeline::error::PipelineError;
use crate::pipeline::EventStream;

/// An [`EventStream`] over a fixed event list.
///
/// After the list is exhausted the stream reports the configured terminal
/// error from `close()`, mimicking a decoder that stopped on a read failure.
pub struct StaticEvents {
    events: VecDeque<InputEvent>,
    err: Option<PipelineError>,
}

impl StaticEvents {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
            err: None,
        }
    }

    /// Sets the terminal error reported once the events run out.
    pub fn with_error(mut self, err: PipelineError) -> Self {
        self.err = Some(err);
        self
    }

    /// Builds an event with a zero timestamp; the pipeline stages never
    /// inspect event time.
    pub fn event(event_type: u16, code: u16, value: i32) -> InputEvent {
        InputEvent {
            time: UNIX_EPOCH,
            event_type,
            code,
            value,
        }
    }
}

impl EventStream for StaticEvents {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        match &self.err {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}
