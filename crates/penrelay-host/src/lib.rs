//! # penrelay-host
//!
//! Host-side application for Penrelay.  Wires the core event pipeline from
//! `penrelay-core` to a pointer driver and runs the dispatch loop, or, in
//! debug mode, streams the raw device events as JSON for inspection.
//!
//! - **`application`** – The dispatch loop use case ([`Runtime`]) and the
//!   debug event inspector.  Defines the [`PointerDriver`] seam the
//!   infrastructure implements.
//! - **`infrastructure`** – Pointer driver implementations and TOML
//!   configuration loading.

pub mod application;
pub mod infrastructure;

pub use application::dispatch::{
    DispatchError, PointerAction, PointerDriver, PointerError, Runtime,
};
pub use infrastructure::config::{AppConfig, ConfigError};
