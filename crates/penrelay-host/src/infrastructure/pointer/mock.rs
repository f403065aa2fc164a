//! Recording pointer driver for tests.
//!
//! Real drivers make OS API calls that require a desktop session and
//! actually move the cursor on the machine running the tests.  The mock
//! replaces every call with in-memory recording so assertions can inspect
//! exactly which actions were dispatched and in what order.
//!
//! Set `should_fail` to make every call return a
//! [`PointerError::Backend`]; this exercises the dispatch loop's
//! terminal-error path without a broken OS.

use crate::application::dispatch::{PointerDriver, PointerError};

/// A pointer driver that records all calls without touching the OS.
#[derive(Debug)]
pub struct MockPointerDriver {
    /// Each (x, y) passed to `move_to`, in call order.
    pub moves: Vec<(i32, i32)>,
    /// Each (x, y) passed to `drag_to`, in call order.
    pub drags: Vec<(i32, i32)>,
    /// The `secondary` flag of each `press` call.
    pub presses: Vec<bool>,
    /// The `secondary` flag of each `release` call.
    pub releases: Vec<bool>,
    /// Surface size reported by `surface_size`.
    pub size: (i32, i32),
    /// When `true`, every method immediately returns a backend error.
    pub should_fail: bool,
}

impl Default for MockPointerDriver {
    fn default() -> Self {
        Self {
            moves: Vec::new(),
            drags: Vec::new(),
            presses: Vec::new(),
            releases: Vec::new(),
            size: (1920, 1080),
            should_fail: false,
        }
    }
}

impl MockPointerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), PointerError> {
        if self.should_fail {
            return Err(PointerError::Backend("mock failure".to_string()));
        }
        Ok(())
    }
}

impl PointerDriver for MockPointerDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), PointerError> {
        self.check()?;
        self.moves.push((x, y));
        Ok(())
    }

    fn drag_to(&mut self, x: i32, y: i32) -> Result<(), PointerError> {
        self.check()?;
        self.drags.push((x, y));
        Ok(())
    }

    fn press(&mut self, secondary: bool) -> Result<(), PointerError> {
        self.check()?;
        self.presses.push(secondary);
        Ok(())
    }

    fn release(&mut self, secondary: bool) -> Result<(), PointerError> {
        self.check()?;
        self.releases.push(secondary);
        Ok(())
    }

    fn surface_size(&mut self) -> Result<(i32, i32), PointerError> {
        self.check()?;
        Ok(self.size)
    }
}
