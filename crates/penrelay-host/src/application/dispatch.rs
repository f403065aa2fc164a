//! The dispatch loop: gesture changes in, pointer-control calls out.

use thiserror::Error;
use tracing::{error, trace};

use penrelay_core::{GestureSource, PipelineError, PositionScaler, StateChange};

/// Error returned by a pointer driver call.
///
/// Drivers wrap whatever their backend reports into an owned string so the
/// error stays `Clone + PartialEq` for terminal-error bookkeeping.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer backend error: {0}")]
    Backend(String),
}

/// The pointer-control capability the dispatch loop drives.
///
/// Implementations live in `infrastructure::pointer`.  Every call is
/// synchronous; a returned error is fatal to the loop (no retries).  The
/// `secondary` flag on press/release selects the alternate (eraser) button
/// and comes straight from the gesture accumulator.
pub trait PointerDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), PointerError>;
    fn drag_to(&mut self, x: i32, y: i32) -> Result<(), PointerError>;
    fn press(&mut self, secondary: bool) -> Result<(), PointerError>;
    fn release(&mut self, secondary: bool) -> Result<(), PointerError>;
    /// Width and height of the surface confining the pointer, used to
    /// default the scaler target when the configuration omits it.
    fn surface_size(&mut self) -> Result<(i32, i32), PointerError>;
}

/// Which driver call failed; carried in [`DispatchError::Pointer`] so the
/// terminal cause names the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Move,
    Drag,
    Press,
    Release,
}

impl std::fmt::Display for PointerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PointerAction::Move => "move",
            PointerAction::Drag => "drag",
            PointerAction::Press => "press",
            PointerAction::Release => "release",
        };
        f.write_str(name)
    }
}

/// Terminal error of the dispatch loop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A pointer-control call was rejected by the driver.
    #[error("pointer {action} failed: {source}")]
    Pointer {
        action: PointerAction,
        source: PointerError,
    },

    /// The gesture pipeline below the loop failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Binds a gesture source, the position scaler, and a pointer driver into
/// the application loop.
///
/// Each [`step`](Runtime::step) pulls exactly one state change and performs
/// exactly one driver call, resolving coordinates through the scaler for
/// moves and drags.  The first driver failure is stored as the terminal
/// error and halts the loop permanently; further steps return `false`
/// without side effects.
pub struct Runtime<G: GestureSource, D: PointerDriver> {
    gestures: G,
    scaler: PositionScaler,
    driver: D,
    err: Option<DispatchError>,
}

impl<G: GestureSource, D: PointerDriver> Runtime<G, D> {
    pub fn new(gestures: G, scaler: PositionScaler, driver: D) -> Self {
        Self {
            gestures,
            scaler,
            driver,
            err: None,
        }
    }

    /// Executes one step of the loop.  Returns `false` once the gesture
    /// source is exhausted or a terminal error occurred.
    pub fn step(&mut self) -> bool {
        if self.err.is_some() {
            // Prevent re-entry after an error.
            return false;
        }
        let Some(change) = self.gestures.next_change() else {
            return false;
        };
        trace!(?change, "dispatching state change");
        let result = match change {
            StateChange::Move { x, y } => {
                let (x, y) = self.scaler.scale(x, y);
                (PointerAction::Move, self.driver.move_to(x, y))
            }
            StateChange::Drag { x, y } => {
                let (x, y) = self.scaler.scale(x, y);
                (PointerAction::Drag, self.driver.drag_to(x, y))
            }
            StateChange::Click => (
                PointerAction::Press,
                self.driver.press(self.gestures.secondary_mode()),
            ),
            StateChange::Unclick => (
                PointerAction::Release,
                self.driver.release(self.gestures.secondary_mode()),
            ),
        };
        match result {
            (_, Ok(())) => true,
            (action, Err(source)) => {
                error!(%action, %source, "pointer driver rejected action; halting");
                self.err = Some(DispatchError::Pointer { action, source });
                false
            }
        }
    }

    /// Drives [`step`](Runtime::step) until the loop halts.
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Closes the underlying gesture source.  Reports the terminal dispatch
    /// error if one occurred, otherwise the source's close error.
    pub fn close(&mut self) -> Result<(), DispatchError> {
        let close_result = self.gestures.close();
        if let Some(e) = &self.err {
            return Err(e.clone());
        }
        close_result.map_err(DispatchError::from)
    }

    /// The wrapped driver, for inspection in tests.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
