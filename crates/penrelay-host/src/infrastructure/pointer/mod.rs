//! Pointer driver implementations.
//!
//! The [`crate::application::dispatch::PointerDriver`] trait is the seam
//! between the dispatch loop and whatever actually moves the host cursor.
//! OS-level backends (X11 XTest, Win32 `SendInput`, CoreGraphics) plug in
//! here; the in-tree [`mock::MockPointerDriver`] records calls in memory and
//! backs the test suites and the default wiring.

pub mod mock;
