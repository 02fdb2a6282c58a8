use crate::foundation::error::{TimelineError, TimelineResult};

pub use kurbo::Point;

/// One abstract unit of timeline time.
///
/// Ticks are unitless integers; they convert to milliseconds only at the
/// serialization boundary via a ticks-per-second rate. The representation is
/// signed so that negative times surface as validation errors instead of
/// being unrepresentable.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Tick(pub i64);

impl Tick {
    /// `true` when the tick is before time zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// A time window `[start, end]` in ticks, `start <= end`, both non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TickSpan {
    /// First tick of the window.
    pub start: Tick,
    /// Last tick of the window (inclusive).
    pub end: Tick,
}

impl TickSpan {
    /// Builds a span, rejecting negative ticks and `start > end`.
    pub fn new(start: Tick, end: Tick) -> TimelineResult<Self> {
        if start.is_negative() || end.is_negative() {
            return Err(TimelineError::invalid_argument("time cannot be negative"));
        }
        if start.0 > end.0 {
            return Err(TimelineError::invalid_argument(
                "start time must not be after end time",
            ));
        }
        Ok(Self { start, end })
    }

    /// Length of the span in ticks (`end - start`).
    pub fn duration(self) -> i64 {
        self.end.0 - self.start.0
    }

    /// Whether an event over this span is in effect at `t`.
    ///
    /// An event is active at its start tick, through its interior, and not
    /// at its end tick (a completed event contributes its end state through
    /// the most-recent-state seed instead).
    pub fn active_at(self, t: Tick) -> bool {
        self.start == t || (self.start.0 <= t.0 && self.end.0 > t.0)
    }
}

/// The viewing rectangle of an animation.
///
/// Any integers are accepted; the SVG formatter computes its viewport as
/// `(width - x, height - y)` and uses the raw values as the view box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Left edge of the view box.
    pub x: i64,
    /// Top edge of the view box.
    pub y: i64,
    /// View box width value.
    pub width: i64,
    /// View box height value.
    pub height: i64,
}

impl Bounds {
    /// Builds a bounds rectangle from its raw components.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A shape fill color with three 0-255 channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black, the default fill color.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Builds a color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style `rgb(r,g,b)` string used in SVG attributes.
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Unit-scale `(r,g,b)` string with one decimal per channel, the form
    /// used by the structured-text output. Black is `(0.0,0.0,0.0)`.
    pub fn unit_triplet(self) -> String {
        fn unit(c: u8) -> f64 {
            f64::from(c) / 255.0
        }
        format!(
            "({:.1},{:.1},{:.1})",
            unit(self.r),
            unit(self.g),
            unit(self.b)
        )
    }
}
