//! # penrelay-core
//!
//! Pipeline library for Penrelay: turns a raw binary stream of
//! absolute-position digitizer events into discrete gesture changes and
//! calibrated screen coordinates.
//!
//! This crate is used by the host application that drives the actual pointer.
//! It has zero dependencies on OS APIs, network sockets, or UI frameworks;
//! the only I/O seam is a `std::io::Read` handed to the record decoder.
//!
//! # Architecture overview
//!
//! Penrelay remote-controls a host pointer from a pen tablet whose
//! coordinate space, resolution, and physical orientation differ from the
//! host screen.  The tablet side exposes a continuous byte feed of fixed
//! 16-byte input records; this crate consumes that feed through a chain of
//! pull-based stages:
//!
//! ```text
//! bytes -> RecordDecoder -> TypeSelector -> GestureStateMachine
//!       -> [RateLimited] -> dispatch (host crate) -> pointer driver
//! ```
//!
//! - **`domain`** – Pure data types: the decoded [`InputEvent`], the
//!   [`StateChange`] gesture sum type, the [`PositionScaler`] that remaps
//!   tablet coordinates onto the target surface, and the static event code
//!   name tables in [`domain::ecodes`].
//!
//! - **`pipeline`** – The stages themselves.  Each stage is a
//!   single-direction iterator over its upstream; no stage holds a reference
//!   to anything downstream, and each exclusively owns its own state, so the
//!   whole pipeline runs on one thread with no locking.

pub mod domain;
pub mod pipeline;

// Re-export the most-used types at the crate root so callers can write
// `penrelay_core::StateChange` instead of `penrelay_core::domain::change::StateChange`.
pub use domain::change::{ChangeKind, StateChange};
pub use domain::event::{InputEvent, RAW_RECORD_SIZE};
pub use domain::scaler::{Orientation, PositionScaler, ScalerConfig};
pub use pipeline::decoder::RecordDecoder;
pub use pipeline::error::PipelineError;
pub use pipeline::filter::{TypeExcluder, TypeSelector};
pub use pipeline::gesture::{GestureSource, GestureStateMachine};
pub use pipeline::limiter::{Clock, RateLimited, SystemClock};
pub use pipeline::EventStream;
