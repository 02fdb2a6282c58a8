use std::fmt;

use crate::foundation::core::{Tick, TickSpan};
use crate::timeline::shape::Shape;

/// The attribute group an event changes.
///
/// The three groups are independent: changes of different kinds may run
/// concurrently on one shape, while two changes of the same kind must not
/// overlap in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChangeKind {
    /// Reference-point change.
    Move,
    /// Extent change.
    Resize,
    /// Fill-color change.
    Recolor,
}

/// One timed transformation of a named shape.
///
/// An event carries the shape's full start state and end state over a span
/// `[start, end]`. Creation events mark a shape's appearance: their start
/// and end states are the same value and their change tag is `None`; the
/// end time of a creation event is the shape's disappearance time and is
/// the only event field ever mutated after insertion (revised upward to
/// extend the lifetime). The tag is stored explicitly so a permitted no-op
/// move, whose states are also value-equal, can never masquerade as a
/// creation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    start_state: Shape,
    end_state: Shape,
    span: TickSpan,
    change: Option<ChangeKind>,
}

impl Event {
    /// A creation event: the shape appears at `span.start` and disappears
    /// at `span.end`.
    pub(crate) fn creation(shape: Shape, span: TickSpan) -> Self {
        Self {
            start_state: shape.clone(),
            end_state: shape,
            span,
            change: None,
        }
    }

    /// A transformation event from `from` to `to` over `span`.
    pub(crate) fn transform(kind: ChangeKind, from: Shape, to: Shape, span: TickSpan) -> Self {
        Self {
            start_state: from,
            end_state: to,
            span,
            change: Some(kind),
        }
    }

    /// The name of the shape this event applies to.
    pub fn shape_name(&self) -> &str {
        self.start_state.name()
    }

    /// The shape's state when the event begins.
    pub fn start_state(&self) -> &Shape {
        &self.start_state
    }

    /// The shape's state when the event completes.
    pub fn end_state(&self) -> &Shape {
        &self.end_state
    }

    /// The event's time window.
    pub fn span(&self) -> TickSpan {
        self.span
    }

    /// The attribute group this event changes, or `None` for a creation.
    pub fn change(&self) -> Option<ChangeKind> {
        self.change
    }

    /// Whether this event marks a shape's appearance.
    pub fn is_creation(&self) -> bool {
        self.change.is_none()
    }

    /// Raise the end time. Only creation events are ever extended, and only
    /// upward; the model enforces both.
    pub(crate) fn extend_end(&mut self, until: Tick) {
        self.span.end = until;
    }
}

impl fmt::Display for Event {
    /// One structured-text paragraph describing the event.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            None => write!(
                f,
                "Shape created:\n{}\nAppears at t={}\nDisappears at t={}",
                self.end_state, self.span.start.0, self.span.end.0
            ),
            Some(ChangeKind::Move) => write!(
                f,
                "Shape {} moves from {} to {} from t={} to t={}",
                self.shape_name(),
                self.start_state.origin_text(),
                self.end_state.origin_text(),
                self.span.start.0,
                self.span.end.0
            ),
            Some(ChangeKind::Resize) => write!(
                f,
                "Shape {} scales from {} to {} from t={} to t={}",
                self.shape_name(),
                self.start_state.dimensions_text(),
                self.end_state.dimensions_text(),
                self.span.start.0,
                self.span.end.0
            ),
            Some(ChangeKind::Recolor) => write!(
                f,
                "Shape {} changes color from {} to {} from t={} to t={}",
                self.shape_name(),
                self.start_state.color().unit_triplet(),
                self.end_state.color().unit_triplet(),
                self.span.start.0,
                self.span.end.0
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/event.rs"]
mod tests;
