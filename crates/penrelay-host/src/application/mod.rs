//! Application-layer use cases.
//!
//! Two mutually exclusive top-level modes: the dispatch loop that drives a
//! pointer driver from gesture changes, and the event inspector that dumps
//! admitted raw events for debugging.  The inspector bypasses the gesture
//! state machine entirely; it is an alternate mode, not a pipeline stage.

pub mod dispatch;
pub mod inspect;
