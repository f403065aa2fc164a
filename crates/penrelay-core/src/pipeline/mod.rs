//! Pull-based pipeline stages.
//!
//! Every stage implements [`EventStream`] (raw events) or
//! [`gesture::GestureSource`] (gesture changes) over its upstream.  Data
//! flows strictly downstream; a stage never holds a reference to its
//! consumer.  The whole chain is synchronous and single-threaded: the only
//! blocking operations are the byte-source read at the bottom and the
//! pacing sleep inside [`limiter::RateLimited`].
//!
//! Error policy (shared by all stages): the first error is remembered as the
//! terminal error, after which the stage reports "no more data" without side
//! effects.  `close()` surfaces the terminal error and is idempotent.  No
//! stage retries internally; recovery means rebuilding the whole pipeline.

pub mod decoder;
pub mod error;
pub mod filter;
pub mod gesture;
pub mod limiter;
pub mod testing;

use crate::domain::event::InputEvent;
use error::PipelineError;

/// A finite-until-error sequence of decoded input events.
///
/// Modeled as an explicit pull interface rather than `std::iter::Iterator`
/// because consumers need `close()` to retrieve the terminal error after the
/// stream ends, and because the blanket iterator adapters would bypass the
/// error-forwarding discipline of the stages.
pub trait EventStream {
    /// Pulls the next event.  Returns `None` when the stream is exhausted
    /// or a terminal error occurred; `close` distinguishes the two.
    fn next_event(&mut self) -> Option<InputEvent>;

    /// Releases the underlying source and reports the terminal error, if
    /// any.  Safe to call more than once; subsequent calls return the same
    /// result without touching the source again.
    fn close(&mut self) -> Result<(), PipelineError>;
}

impl<S: EventStream + ?Sized> EventStream for Box<S> {
    fn next_event(&mut self) -> Option<InputEvent> {
        (**self).next_event()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        (**self).close()
    }
}
