//! Domain types for the digitizer pipeline.
//!
//! Everything in this module is pure data and pure functions: decoded input
//! events, the gesture change sum type, the event code name tables, and the
//! position scaler.  Nothing here performs I/O or holds mutable state, which
//! keeps the types trivially testable and safe to share.

pub mod change;
pub mod ecodes;
pub mod event;
pub mod scaler;
