//! Event type filters: allow-set selection and deny-set exclusion.

use crate::domain::event::InputEvent;
use crate::pipeline::error::PipelineError;
use crate::pipeline::EventStream;

/// Passes through only events whose type is in the allow-set.
///
/// Discarded events are skipped silently and ordering is preserved.  The
/// pipeline uses this to narrow the raw feed to the event classes the state
/// machine understands (`EV_ABS`, plus `EV_KEY` when the secondary-mode
/// toggle is wanted).
pub struct TypeSelector<S: EventStream> {
    upstream: S,
    allowed: Vec<u16>,
}

impl<S: EventStream> TypeSelector<S> {
    pub fn new(upstream: S, allowed: Vec<u16>) -> Self {
        Self { upstream, allowed }
    }
}

impl<S: EventStream> EventStream for TypeSelector<S> {
    fn next_event(&mut self) -> Option<InputEvent> {
        while let Some(ev) = self.upstream.next_event() {
            if self.allowed.contains(&ev.event_type) {
                return Some(ev);
            }
        }
        None
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

/// Passes through only events whose type is *not* in the deny-set.
pub struct TypeExcluder<S: EventStream> {
    upstream: S,
    denied: Vec<u16>,
}

impl<S: EventStream> TypeExcluder<S> {
    pub fn new(upstream: S, denied: Vec<u16>) -> Self {
        Self { upstream, denied }
    }
}

impl<S: EventStream> EventStream for TypeExcluder<S> {
    fn next_event(&mut self) -> Option<InputEvent> {
        while let Some(ev) = self.upstream.next_event() {
            if !self.denied.contains(&ev.event_type) {
                return Some(ev);
            }
        }
        None
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.upstream.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::StaticEvents;

    fn events_of_types(types: &[u16]) -> StaticEvents {
        StaticEvents::new(
            types
                .iter()
                .enumerate()
                .map(|(i, &t)| StaticEvents::event(t, 0, i as i32))
                .collect(),
        )
    }

    #[test]
    fn selector_keeps_only_allowed_types() {
        let mut selector = TypeSelector::new(events_of_types(&[2, 2, 3]), vec![3]);
        let kept = selector.next_event().expect("the type-3 event");
        assert_eq!(kept.event_type, 3);
        assert!(selector.next_event().is_none());
    }

    #[test]
    fn excluder_drops_denied_types_preserving_order() {
        let mut excluder = TypeExcluder::new(events_of_types(&[2, 2, 3]), vec![3]);
        let first = excluder.next_event().expect("first type-2 event");
        let second = excluder.next_event().expect("second type-2 event");
        assert_eq!((first.event_type, first.value), (2, 0));
        assert_eq!((second.event_type, second.value), (2, 1));
        assert!(excluder.next_event().is_none());
    }

    #[test]
    fn filters_forward_upstream_errors_on_close() {
        let failed = StaticEvents::new(Vec::new())
            .with_error(PipelineError::Transport("reset".to_string()));
        let mut selector = TypeSelector::new(failed, vec![3]);
        assert!(selector.next_event().is_none());
        assert_eq!(
            selector.close(),
            Err(PipelineError::Transport("reset".to_string()))
        );
        // Idempotent: same error again.
        assert_eq!(
            selector.close(),
            Err(PipelineError::Transport("reset".to_string()))
        );
    }
}
