use crate::foundation::core::{Bounds, Point, Rgb, Tick, TickSpan};
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::timeline::event::{ChangeKind, Event};
use crate::timeline::shape::Shape;

/// The animation timeline: a registry of named shapes plus the ordered list
/// of timed transformation events applied to them.
///
/// Every mutating operation validates before touching state; on error
/// nothing is mutated. The registry holds each shape's most recently
/// validated end state and replaces whole values by name, never individual
/// fields. Registry order is creation order and never changes; the event
/// list stays sorted ascending by start tick with ties in insertion order.
///
/// The model is single-threaded and synchronous. Callers that need
/// concurrent access must serialize externally; collection reads hand out
/// copies or immutable borrows, so a caller can never corrupt internal
/// state through a returned value.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Timeline {
    shapes: Vec<Shape>,
    events: Vec<Event>,
    bounds: Bounds,
    final_tick: Tick,
}

impl Timeline {
    /// An empty timeline with zeroed bounds and final tick 0.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            events: Vec::new(),
            bounds: Bounds::default(),
            final_tick: Tick(0),
        }
    }

    /// Replace the viewing rectangle. Any integers are accepted.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// The current viewing rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The maximum end time across all events, monotonically non-decreasing
    /// as events are added.
    pub fn final_tick(&self) -> Tick {
        self.final_tick
    }

    /// Register a shape and record its creation event over
    /// `[appear, disappear]`.
    ///
    /// A name can be created exactly once; a duplicate is
    /// [`TimelineError::InvalidState`]. Negative or inverted times are
    /// [`TimelineError::InvalidArgument`].
    #[tracing::instrument(skip(self, shape), fields(name = shape.name()))]
    pub fn create_shape(
        &mut self,
        shape: Shape,
        appear: Tick,
        disappear: Tick,
    ) -> TimelineResult<()> {
        let span = TickSpan::new(appear, disappear)?;
        if self.find_shape(shape.name()).is_some() {
            return Err(TimelineError::invalid_state(format!(
                "a shape named '{}' already exists",
                shape.name()
            )));
        }
        self.shapes.push(shape.clone());
        self.insert_event(Event::creation(shape, span));
        Ok(())
    }

    /// Record a move of shape `name` to `(x, y)` over `[start, end]`.
    ///
    /// Moving to the shape's current point is not rejected; only the
    /// same-kind overlap rule constrains redundant moves. (Scale and
    /// recolor do reject no-op targets; the asymmetry is inherited
    /// behavior and deliberate.)
    #[tracing::instrument(skip(self))]
    pub fn move_shape(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        start: Tick,
        end: Tick,
    ) -> TimelineResult<()> {
        let current = self.current_state(name)?.clone();
        let span = TickSpan::new(start, end)?;
        self.check_lifetime(name, span)?;
        self.check_no_overlap(name, ChangeKind::Move, span.start)?;

        let updated = current.move_to(x, y);
        self.insert_event(Event::transform(
            ChangeKind::Move,
            current,
            updated.clone(),
            span,
        ));
        self.replace_shape(updated);
        Ok(())
    }

    /// Record a resize of shape `name` to `width x height` over
    /// `[start, end]`.
    ///
    /// Scaling to the current size is [`TimelineError::InvalidArgument`].
    #[tracing::instrument(skip(self))]
    pub fn scale_shape(
        &mut self,
        name: &str,
        width: f64,
        height: f64,
        start: Tick,
        end: Tick,
    ) -> TimelineResult<()> {
        let current = self.current_state(name)?.clone();
        let span = TickSpan::new(start, end)?;
        let updated = current.scale_to(width, height)?;
        if updated == current {
            return Err(TimelineError::invalid_argument(format!(
                "shape '{name}' is already this size"
            )));
        }
        self.check_lifetime(name, span)?;
        self.check_no_overlap(name, ChangeKind::Resize, span.start)?;

        self.insert_event(Event::transform(
            ChangeKind::Resize,
            current,
            updated.clone(),
            span,
        ));
        self.replace_shape(updated);
        Ok(())
    }

    /// Record a color change of shape `name` to `color` over
    /// `[start, end]`.
    ///
    /// Recoloring to the current color is
    /// [`TimelineError::InvalidArgument`].
    #[tracing::instrument(skip(self))]
    pub fn change_color(
        &mut self,
        name: &str,
        color: Rgb,
        start: Tick,
        end: Tick,
    ) -> TimelineResult<()> {
        let current = self.current_state(name)?.clone();
        let span = TickSpan::new(start, end)?;
        if current.color() == color {
            return Err(TimelineError::invalid_argument(format!(
                "shape '{name}' is already this color"
            )));
        }
        self.check_lifetime(name, span)?;
        self.check_no_overlap(name, ChangeKind::Recolor, span.start)?;

        let updated = current.recolor(color);
        self.insert_event(Event::transform(
            ChangeKind::Recolor,
            current,
            updated.clone(),
            span,
        ));
        self.replace_shape(updated);
        Ok(())
    }

    /// Raise a shape's disappearance time to `until`.
    ///
    /// This revises the creation event's end upward, the only
    /// post-insertion event mutation the model allows. An earlier `until`
    /// is a no-op; the lifetime never shrinks.
    #[tracing::instrument(skip(self))]
    pub fn extend_shape_lifetime(&mut self, name: &str, until: Tick) -> TimelineResult<()> {
        if until.is_negative() {
            return Err(TimelineError::invalid_argument("time cannot be negative"));
        }
        self.current_state(name)?;
        let creation = self
            .events
            .iter_mut()
            .find(|e| e.is_creation() && e.shape_name() == name);
        if let Some(event) = creation
            && until.0 > event.span().end.0
        {
            event.extend_end(until);
            if until.0 > self.final_tick.0 {
                self.final_tick = until;
            }
        }
        Ok(())
    }

    /// The visually correct instantaneous state of every shape present at
    /// `tick`, in registry (creation) order.
    ///
    /// Shapes with no active event at `tick` are omitted. A shape whose
    /// only active event is its creation window reports its most recently
    /// completed end state; a shape with transformations in progress
    /// reports a tweened intermediate state.
    pub fn shapes_at_tick(&self, tick: Tick) -> TimelineResult<Vec<Shape>> {
        if tick.is_negative() {
            return Err(TimelineError::invalid_argument(
                "time frame cannot be negative",
            ));
        }
        let mut out = Vec::new();
        for shape in &self.shapes {
            let active: Vec<&Event> = self
                .events
                .iter()
                .filter(|e| e.shape_name() == shape.name() && e.span().active_at(tick))
                .collect();
            if active.is_empty() {
                continue; // not yet appeared, or already disappeared
            }
            let recent = self.most_recent_state(shape, tick);
            if active.len() == 1 {
                out.push(recent);
            } else {
                out.push(intermediate_state(recent, &active, tick));
            }
        }
        Ok(out)
    }

    /// All events in effect at `tick`, in event-list order.
    pub fn events_at_tick(&self, tick: Tick) -> TimelineResult<Vec<Event>> {
        if tick.is_negative() {
            return Err(TimelineError::invalid_argument(
                "time frame cannot be negative",
            ));
        }
        Ok(self
            .events
            .iter()
            .filter(|e| e.span().active_at(tick))
            .cloned()
            .collect())
    }

    /// All events touching shape `name`, in event-list order. Unknown
    /// names yield an empty list.
    pub fn events_for_shape(&self, name: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.shape_name() == name)
            .cloned()
            .collect()
    }

    /// The full event log, sorted ascending by start tick with ties in
    /// insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// A defensive copy of the shape registry in creation order, each shape
    /// in its most recently validated end state.
    pub fn shape_list(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    fn find_shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name() == name)
    }

    fn current_state(&self, name: &str) -> TimelineResult<&Shape> {
        self.find_shape(name).ok_or_else(|| {
            TimelineError::unknown_shape(format!("no shape named '{name}' exists"))
        })
    }

    /// Atomic replace-by-key; registry order is untouched.
    fn replace_shape(&mut self, updated: Shape) {
        if let Some(slot) = self.shapes.iter_mut().find(|s| s.name() == updated.name()) {
            *slot = updated;
        }
    }

    /// Sorted-stable insertion: the new event lands after every event with
    /// an equal or earlier start tick. Also raises the final tick.
    fn insert_event(&mut self, event: Event) {
        if event.span().end.0 > self.final_tick.0 {
            self.final_tick = event.span().end;
        }
        let start = event.span().start;
        let idx = self.events.partition_point(|e| e.span().start.0 <= start.0);
        self.events.insert(idx, event);
    }

    /// A transform window must sit inside the shape's creation window.
    fn check_lifetime(&self, name: &str, span: TickSpan) -> TimelineResult<()> {
        let creation = self
            .events
            .iter()
            .find(|e| e.is_creation() && e.shape_name() == name);
        if let Some(event) = creation
            && (span.start.0 < event.span().start.0 || span.end.0 > event.span().end.0)
        {
            return Err(TimelineError::invalid_state(format!(
                "shape '{name}' does not exist across t={} to t={}",
                span.start.0, span.end.0
            )));
        }
        Ok(())
    }

    /// At most one in-flight change per kind per shape: a same-kind event
    /// still running at `start` (end after `start`) blocks the new one.
    fn check_no_overlap(&self, name: &str, kind: ChangeKind, start: Tick) -> TimelineResult<()> {
        let conflict = self.events.iter().any(|e| {
            e.shape_name() == name && e.change() == Some(kind) && e.span().end.0 > start.0
        });
        if conflict {
            let verb = match kind {
                ChangeKind::Move => "moving",
                ChangeKind::Resize => "being scaled",
                ChangeKind::Recolor => "changing color",
            };
            return Err(TimelineError::invalid_state(format!(
                "shape '{name}' is already {verb} in this time frame"
            )));
        }
        Ok(())
    }

    /// The latest end state `shape` had committed by `tick`: the creation
    /// state, overwritten by each event (in event-list order) that has
    /// completed by then.
    fn most_recent_state(&self, shape: &Shape, tick: Tick) -> Shape {
        let mut state: Option<&Shape> = None;
        for event in self.events.iter().filter(|e| e.shape_name() == shape.name()) {
            if state.is_none() && event.is_creation() {
                state = Some(event.start_state());
            }
            if event.span().end.0 <= tick.0 {
                state = Some(event.end_state());
            }
        }
        state.cloned().unwrap_or_else(|| shape.clone())
    }
}

/// Linear interpolation of one scalar attribute from `v0` at `t0` to `v1`
/// at `t1`, rounded half-away-from-zero to the nearest integer.
///
/// `t0 == t1` short-circuits to `v1`: only active events reach this, and a
/// zero-length active event is complete at its single instant.
fn tween(v0: f64, v1: f64, t0: Tick, t1: Tick, t: Tick) -> f64 {
    if t0 == t1 {
        return v1;
    }
    let total = (t1.0 - t0.0) as f64;
    let before = (t1.0 - t.0) as f64 / total;
    let after = (t.0 - t0.0) as f64 / total;
    (v0 * before + v1 * after).round()
}

/// Adjust `seed` per active in-progress event, tweening each changed
/// attribute group independently and reassembling one shape value.
fn intermediate_state(seed: Shape, active: &[&Event], tick: Tick) -> Shape {
    let mut origin = seed.origin();
    let mut width = seed.width();
    let mut height = seed.height();
    let mut color = seed.color();

    for event in active {
        let (t0, t1) = (event.span().start, event.span().end);
        let (from, to) = (event.start_state(), event.end_state());
        match event.change() {
            None => {} // the creation window carries no attribute change
            Some(ChangeKind::Move) => {
                origin = Point::new(
                    tween(from.origin().x, to.origin().x, t0, t1, tick),
                    tween(from.origin().y, to.origin().y, t0, t1, tick),
                );
            }
            Some(ChangeKind::Resize) => {
                width = tween(from.width(), to.width(), t0, t1, tick);
                height = tween(from.height(), to.height(), t0, t1, tick);
            }
            Some(ChangeKind::Recolor) => {
                let channel = |a: u8, b: u8| {
                    tween(f64::from(a), f64::from(b), t0, t1, tick).clamp(0.0, 255.0) as u8
                };
                color = Rgb::new(
                    channel(from.color().r, to.color().r),
                    channel(from.color().g, to.color().g),
                    channel(from.color().b, to.color().b),
                );
            }
        }
    }
    seed.with_state(origin, width, height, color)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
