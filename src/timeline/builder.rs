use std::collections::BTreeMap;

use crate::foundation::core::{Bounds, Point, Rgb, Tick};
use crate::foundation::error::TimelineResult;
use crate::timeline::model::Timeline;
use crate::timeline::shape::{Shape, ShapeKind};

/// One absolute snapshot of a shape's full attribute set at a tick.
///
/// Motions are pairs of these; the builder derives events from the deltas
/// between the two snapshots of a single motion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// The tick this snapshot holds at.
    pub tick: Tick,
    /// Reference-point x.
    pub x: f64,
    /// Reference-point y.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Fill color.
    pub color: Rgb,
}

/// Incremental ingestion of a timeline from declared shapes and keyframe
/// snapshot pairs.
///
/// The builder is a derivation layer over [`Timeline`]'s validated API: the
/// first motion seen for a declared name synthesizes the creation event from
/// the start snapshot, every later motion extends the shape's lifetime, and
/// each attribute group that differs between a motion's two snapshots
/// becomes one move/scale/recolor event. The builder performs no validation
/// of its own; model failures surface unchanged.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    timeline: Timeline,
    declared: BTreeMap<String, ShapeKind>,
}

impl TimelineBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            declared: BTreeMap::new(),
        }
    }

    /// Set the viewing rectangle of the animation.
    pub fn set_bounds(mut self, x: i64, y: i64, width: i64, height: i64) -> Self {
        self.timeline.set_bounds(Bounds::new(x, y, width, height));
        self
    }

    /// Declare a shape name with a kind, ahead of its first motion.
    ///
    /// `kind` parses case-insensitively (`"rectangle"`, `"rect"`,
    /// `"ellipse"`, `"oval"`); anything else is
    /// [`InvalidArgument`](crate::TimelineError::InvalidArgument).
    /// Re-declaring a pending name replaces its kind.
    pub fn declare_shape(mut self, name: impl Into<String>, kind: &str) -> TimelineResult<Self> {
        let kind: ShapeKind = kind.parse()?;
        self.declared.insert(name.into(), kind);
        Ok(self)
    }

    /// Ingest one motion: the named shape holds the `from` snapshot at
    /// `from.tick` and the `to` snapshot at `to.tick`.
    pub fn add_motion(mut self, name: &str, from: Keyframe, to: Keyframe) -> TimelineResult<Self> {
        if let Some(kind) = self.declared.remove(name) {
            // First motion for a declared name creates the shape from the
            // start snapshot.
            let shape = Shape::new(
                name,
                kind,
                Point::new(from.x, from.y),
                from.width,
                from.height,
                from.color,
            )?;
            self.timeline.create_shape(shape, from.tick, to.tick)?;
        } else {
            self.timeline.extend_shape_lifetime(name, to.tick)?;
        }

        if from.x != to.x || from.y != to.y {
            self.timeline
                .move_shape(name, to.x, to.y, from.tick, to.tick)?;
        }
        if from.width != to.width || from.height != to.height {
            self.timeline
                .scale_shape(name, to.width, to.height, from.tick, to.tick)?;
        }
        if from.color != to.color {
            self.timeline
                .change_color(name, to.color, from.tick, to.tick)?;
        }
        Ok(self)
    }

    /// Finish and hand back the populated timeline.
    ///
    /// Declared names that never received a motion are dropped: nothing
    /// ever gave them a concrete appearance, so the model never saw them.
    pub fn build(self) -> Timeline {
        self.timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
