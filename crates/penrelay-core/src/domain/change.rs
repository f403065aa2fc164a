//! Gesture state changes emitted by the state machine.

/// A semantically meaningful pointer state change.
///
/// This is a closed set: the dispatch loop matches on it exhaustively, so an
/// unhandled kind is impossible by construction rather than a runtime check.
/// `Move` and `Drag` carry identical payloads; the distinction is whether the
/// stylus was pressed when the coordinates were emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The pointer moved while not pressed.
    Move { x: i32, y: i32 },
    /// The pointer moved while pressed (drawing / dragging).
    Drag { x: i32, y: i32 },
    /// The stylus made contact (pressure crossed above the threshold).
    Click,
    /// The stylus lifted (pressure crossed below the threshold).
    Unclick,
}

/// Payload-free discriminant of a [`StateChange`].
///
/// The rate limiter compares kinds to decide whether two consecutive changes
/// count as "the same kind" without caring about coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Move,
    Drag,
    Click,
    Unclick,
}

impl StateChange {
    /// Returns the discriminant of this change.
    pub fn kind(&self) -> ChangeKind {
        match self {
            StateChange::Move { .. } => ChangeKind::Move,
            StateChange::Drag { .. } => ChangeKind::Drag,
            StateChange::Click => ChangeKind::Click,
            StateChange::Unclick => ChangeKind::Unclick,
        }
    }
}
