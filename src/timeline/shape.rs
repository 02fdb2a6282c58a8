use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Point, Rgb};
use crate::foundation::error::{TimelineError, TimelineResult};

/// The geometric kind of a shape.
///
/// A closed variant: the model has no kind-specific behavior, so kinds only
/// dispatch once at the formatter boundary (tag names, attribute names, and
/// whether the reference point is a corner or a center).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle; reference point is the top-left corner.
    Rectangle,
    /// Axis-aligned ellipse; reference point is the center.
    Ellipse,
}

impl ShapeKind {
    /// Human-readable label used by the structured-text output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = TimelineError;

    /// Parses a kind name case-insensitively. `"oval"` is accepted as a
    /// legacy spelling of an ellipse.
    fn from_str(s: &str) -> TimelineResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "ellipse" | "oval" => Ok(Self::Ellipse),
            other => Err(TimelineError::invalid_argument(format!(
                "unknown shape kind '{other}'"
            ))),
        }
    }
}

/// An immutable 2D shape value.
///
/// The name is the shape's identity within a timeline and never changes.
/// Transforms ([`Shape::move_to`], [`Shape::scale_to`], [`Shape::recolor`])
/// return new values; nothing mutates a shape in place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    origin: Point,
    width: f64,
    height: f64,
    color: Rgb,
}

impl Shape {
    /// Build a shape, validating that the name is non-empty and the extents
    /// are finite and non-negative.
    pub fn new(
        name: impl Into<String>,
        kind: ShapeKind,
        origin: Point,
        width: f64,
        height: f64,
        color: Rgb,
    ) -> TimelineResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TimelineError::invalid_argument(
                "shape name must be non-empty",
            ));
        }
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(TimelineError::invalid_argument(
                "shape extents must be finite and >= 0",
            ));
        }
        Ok(Self {
            name,
            kind,
            origin,
            width,
            height,
            color,
        })
    }

    /// The shape's unique, case-sensitive name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The geometric kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The reference point: top-left corner for rectangles, center for
    /// ellipses.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Horizontal extent (width of a rectangle, x radius of an ellipse).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent (height of a rectangle, y radius of an ellipse).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The fill color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// A copy of this shape with a new reference point.
    pub fn move_to(&self, x: f64, y: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            ..self.clone()
        }
    }

    /// A copy of this shape with new extents.
    pub fn scale_to(&self, width: f64, height: f64) -> TimelineResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height < 0.0 {
            return Err(TimelineError::invalid_argument(
                "a shape cannot take up negative space",
            ));
        }
        Ok(Self {
            width,
            height,
            ..self.clone()
        })
    }

    /// A copy of this shape with a new fill color.
    pub fn recolor(&self, color: Rgb) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Reassemble an interpolated state. Callers interpolate between
    /// already-validated endpoint shapes, so the extents stay non-negative
    /// and no re-validation is needed.
    pub(crate) fn with_state(&self, origin: Point, width: f64, height: f64, color: Rgb) -> Self {
        Self {
            origin,
            width,
            height,
            color,
            ..self.clone()
        }
    }

    /// Just the dimension part of the description, e.g.
    /// `Width: 25.0, Height: 30.0` or `X radius: 5.0, Y radius: 10.0`.
    pub(crate) fn dimensions_text(&self) -> String {
        match self.kind {
            ShapeKind::Rectangle => {
                format!("Width: {:.1}, Height: {:.1}", self.width, self.height)
            }
            ShapeKind::Ellipse => {
                format!("X radius: {:.1}, Y radius: {:.1}", self.width, self.height)
            }
        }
    }

    pub(crate) fn origin_text(&self) -> String {
        format!("({:.1},{:.1})", self.origin.x, self.origin.y)
    }
}

impl fmt::Display for Shape {
    /// The multi-line description used by creation paragraphs in the
    /// structured-text output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anchor = match self.kind {
            ShapeKind::Rectangle => "Min corner",
            ShapeKind::Ellipse => "Center",
        };
        write!(
            f,
            "Name: {}\nType: {}\n{}: {}, {}, Color: {}",
            self.name,
            self.kind.label(),
            anchor,
            self.origin_text(),
            self.dimensions_text(),
            self.color.unit_triplet()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/shape.rs"]
mod tests;
