//! Gesture detection: raw axis and pressure events to discrete state changes.

use tracing::trace;

use crate::domain::change::StateChange;
use crate::domain::ecodes;
use crate::domain::event::InputEvent;
use crate::pipeline::error::PipelineError;
use crate::pipeline::EventStream;

/// A finite-until-error sequence of gesture state changes.
///
/// Produced by [`GestureStateMachine`] and decorated by
/// [`crate::pipeline::limiter::RateLimited`].  `secondary_mode` exposes the
/// eraser flag so the dispatch loop can pass it to press/release calls; it is
/// accumulator-local state, never shared globally.
pub trait GestureSource {
    /// Pulls the next state change, consuming as many upstream events as it
    /// takes to produce one.  Returns `None` when the upstream is exhausted.
    fn next_change(&mut self) -> Option<StateChange>;

    /// Whether the device is currently in secondary (eraser) mode.
    fn secondary_mode(&self) -> bool;

    /// Closes the upstream event stream and forwards its terminal error.
    fn close(&mut self) -> Result<(), PipelineError>;
}

impl<G: GestureSource + ?Sized> GestureSource for Box<G> {
    fn next_change(&mut self) -> Option<StateChange> {
        (**self).next_change()
    }

    fn secondary_mode(&self) -> bool {
        (**self).secondary_mode()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        (**self).close()
    }
}

/// Accumulates axis and pressure updates into move/drag/click/unclick
/// changes.
///
/// The machine owns its accumulator exclusively: last-known x/y, the
/// per-axis "updated since last emission" flags, the pressed flag, and the
/// secondary-mode flag.  At most one change is emitted per admitted event; a
/// click or unclick suppresses the move check for the event that caused it.
///
/// With `drag_enabled`, a move produced while pressed is reclassified as
/// [`StateChange::Drag`] with the same coordinates.  The reclassification is
/// a single branch at the emission point, so the click/unclick transition
/// rules exist exactly once regardless of the flag.
pub struct GestureStateMachine<S: EventStream> {
    upstream: S,
    pressure_threshold: i32,
    drag_enabled: bool,
    x: i32,
    y: i32,
    x_updated: bool,
    y_updated: bool,
    pressed: bool,
    secondary: bool,
}

impl<S: EventStream> GestureStateMachine<S> {
    /// Creates a machine that emits plain `Move` changes regardless of
    /// pressure state.
    pub fn new(upstream: S, pressure_threshold: i32) -> Self {
        Self {
            upstream,
            pressure_threshold,
            drag_enabled: false,
            x: 0,
            y: 0,
            x_updated: false,
            y_updated: false,
            pressed: false,
            secondary: false,
        }
    }

    /// Creates a machine that reclassifies moves as drags while pressed.
    pub fn with_drag(upstream: S, pressure_threshold: i32) -> Self {
        Self {
            drag_enabled: true,
            ..Self::new(upstream, pressure_threshold)
        }
    }

    /// Applies one admitted event to the accumulator.  Returns the emitted
    /// change, if the event produced one.
    fn transition(&mut self, ev: &InputEvent) -> Option<StateChange> {
        if ev.event_type == ecodes::EV_KEY {
            match ev.code {
                ecodes::BTN_TOOL_RUBBER => self.secondary = true,
                ecodes::BTN_TOOL_PEN => self.secondary = false,
                _ => {}
            }
            // The mode toggle itself never emits.
        }
        if ev.event_type != ecodes::EV_ABS {
            return None;
        }
        match ev.code {
            ecodes::ABS_X => {
                self.x = ev.value;
                self.x_updated = true;
            }
            ecodes::ABS_Y => {
                self.y = ev.value;
                self.y_updated = true;
            }
            ecodes::ABS_PRESSURE => {
                if ev.value > self.pressure_threshold && !self.pressed {
                    self.pressed = true;
                    return Some(StateChange::Click);
                }
                if ev.value < self.pressure_threshold && self.pressed {
                    self.pressed = false;
                    return Some(StateChange::Unclick);
                }
                // Dead zone, or the transition already happened.
            }
            _ => {}
        }
        if self.x_updated && self.y_updated {
            // Both flags clear together; a move emission must never leave
            // one of them set.
            self.x_updated = false;
            self.y_updated = false;
            let (x, y) = (self.x, self.y);
            return Some(if self.drag_enabled && self.pressed {
                StateChange::Drag { x, y }
            } else {
                StateChange::Move { x, y }
            });
        }
        None
    }
}

impl<S: EventStream> GestureSource for GestureStateMachine<S> {
    fn next_change(&mut self) -> Option<StateChange> {
        while let Some(ev) = self.upstream.next_event() {
            if let Some(change) = self.transition(&ev) {
                trace!(?change, "gesture state change");
                return Some(change);
            }
        }
        None
    }

    fn secondary_mode(&self) -> bool {
        self.secondary
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::StaticEvents;

    const THRESHOLD: i32 = 1000;

    fn abs(code: u16, value: i32) -> crate::domain::event::InputEvent {
        StaticEvents::event(ecodes::EV_ABS, code, value)
    }

    fn key(code: u16) -> crate::domain::event::InputEvent {
        StaticEvents::event(ecodes::EV_KEY, code, 1)
    }

    fn machine(events: Vec<crate::domain::event::InputEvent>) -> GestureStateMachine<StaticEvents> {
        GestureStateMachine::new(StaticEvents::new(events), THRESHOLD)
    }

    #[test]
    fn pressure_above_threshold_clicks_once() {
        let mut sm = machine(vec![
            abs(ecodes::ABS_PRESSURE, 1500),
            abs(ecodes::ABS_PRESSURE, 1600), // already pressed, no emission
            abs(ecodes::ABS_PRESSURE, 500),
        ]);
        assert_eq!(sm.next_change(), Some(StateChange::Click));
        assert_eq!(sm.next_change(), Some(StateChange::Unclick));
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn pressure_at_threshold_is_a_dead_zone() {
        let mut sm = machine(vec![
            abs(ecodes::ABS_PRESSURE, THRESHOLD),
            abs(ecodes::ABS_PRESSURE, THRESHOLD),
        ]);
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn unclick_requires_a_prior_click() {
        let mut sm = machine(vec![abs(ecodes::ABS_PRESSURE, 10)]);
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn move_emits_once_both_axes_updated() {
        let mut sm = machine(vec![abs(ecodes::ABS_X, 5), abs(ecodes::ABS_Y, 7)]);
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 5, y: 7 }));
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn axis_order_does_not_matter() {
        let mut sm = machine(vec![abs(ecodes::ABS_Y, 7), abs(ecodes::ABS_X, 5)]);
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 5, y: 7 }));
    }

    #[test]
    fn single_axis_update_does_not_emit() {
        let mut sm = machine(vec![abs(ecodes::ABS_X, 5), abs(ecodes::ABS_X, 6)]);
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn repeated_axis_pairs_emit_repeated_moves() {
        let mut sm = machine(vec![
            abs(ecodes::ABS_X, 1),
            abs(ecodes::ABS_Y, 2),
            abs(ecodes::ABS_X, 3),
            abs(ecodes::ABS_Y, 4),
        ]);
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 1, y: 2 }));
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 3, y: 4 }));
    }

    #[test]
    fn click_suppresses_move_for_the_same_event() {
        // X and Y are pending when the pressure event arrives: the click
        // wins, and the still-set axis flags emit the move on the next pull
        // only after another axis event completes the pair.
        let mut sm = machine(vec![
            abs(ecodes::ABS_X, 5),
            abs(ecodes::ABS_Y, 7),
        ]);
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 5, y: 7 }));

        let mut sm = machine(vec![
            abs(ecodes::ABS_X, 5),
            abs(ecodes::ABS_PRESSURE, 1500),
            abs(ecodes::ABS_Y, 7),
        ]);
        assert_eq!(sm.next_change(), Some(StateChange::Click));
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 5, y: 7 }));
    }

    #[test]
    fn non_abs_events_do_not_emit() {
        let mut sm = machine(vec![
            StaticEvents::event(ecodes::EV_SYN, ecodes::SYN_REPORT, 0),
            key(ecodes::BTN_TOOL_RUBBER),
        ]);
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn tool_keys_toggle_secondary_mode() {
        let mut sm = machine(vec![key(ecodes::BTN_TOOL_RUBBER)]);
        assert!(!sm.secondary_mode());
        assert_eq!(sm.next_change(), None);
        assert!(sm.secondary_mode());

        let mut sm = machine(vec![
            key(ecodes::BTN_TOOL_RUBBER),
            key(ecodes::BTN_TOOL_PEN),
        ]);
        assert_eq!(sm.next_change(), None);
        assert!(!sm.secondary_mode());
    }

    #[test]
    fn drag_machine_reclassifies_moves_while_pressed() {
        let mut sm = GestureStateMachine::with_drag(
            StaticEvents::new(vec![
                abs(ecodes::ABS_PRESSURE, 1500),
                abs(ecodes::ABS_X, 5),
                abs(ecodes::ABS_Y, 7),
                abs(ecodes::ABS_PRESSURE, 500),
                abs(ecodes::ABS_X, 8),
                abs(ecodes::ABS_Y, 9),
            ]),
            THRESHOLD,
        );
        assert_eq!(sm.next_change(), Some(StateChange::Click));
        assert_eq!(sm.next_change(), Some(StateChange::Drag { x: 5, y: 7 }));
        assert_eq!(sm.next_change(), Some(StateChange::Unclick));
        assert_eq!(sm.next_change(), Some(StateChange::Move { x: 8, y: 9 }));
    }

    #[test]
    fn drag_machine_clicks_like_the_base_machine() {
        let mut sm = GestureStateMachine::with_drag(
            StaticEvents::new(vec![
                abs(ecodes::ABS_PRESSURE, 1500),
                abs(ecodes::ABS_PRESSURE, 1600),
            ]),
            THRESHOLD,
        );
        assert_eq!(sm.next_change(), Some(StateChange::Click));
        assert_eq!(sm.next_change(), None);
    }

    #[test]
    fn close_forwards_upstream_error() {
        let mut sm = GestureStateMachine::new(
            StaticEvents::new(Vec::new())
                .with_error(PipelineError::Transport("reset".to_string())),
            THRESHOLD,
        );
        assert_eq!(sm.next_change(), None);
        assert_eq!(
            sm.close(),
            Err(PipelineError::Transport("reset".to_string()))
        );
    }
}
