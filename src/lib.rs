//! Tweenline is a keyframe shape-animation timeline model.
//!
//! The crate owns the data structures and algorithms behind a 2D keyframe
//! animation: a registry of named shapes, a validated list of timed
//! transformation events, and the interpolation ("tweening") that
//! reconstructs every shape's exact visual state at an arbitrary tick.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: [`TimelineBuilder`] (or [`parse_script`] / [`parse_json`])
//!    derives validated events from absolute keyframe snapshots
//! 2. **Query**: `Timeline + Tick -> Vec<Shape>` (what is visible, in what
//!    state) via [`Timeline::shapes_at_tick`]
//! 3. **Serialize** (optional): [`render_text`] / [`render_svg`] turn the
//!    event log into a structured description or an SVG 1.1 document
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail fast**: every mutating operation validates before touching
//!   state; there is no partial mutation on error.
//! - **Immutable shape values**: transforms never mutate a [`Shape`] in
//!   place; the registry replaces whole values by name.
//! - **No IO in the model**: formatters are pure; sink variants exist only
//!   at the crate edge and never hide validation errors.
//!
//! A live playback driver, pixel surface, and CLI are external
//! collaborators; they consume [`Timeline::shapes_at_tick`],
//! [`Timeline::final_tick`], and [`Timeline::bounds`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod render;
mod timeline;

pub use foundation::core::{Bounds, Point, Rgb, Tick, TickSpan};
pub use foundation::error::{TimelineError, TimelineResult};
pub use render::svg::{render_svg, write_svg};
pub use render::text::{render_text, write_text};
pub use timeline::builder::{Keyframe, TimelineBuilder};
pub use timeline::event::{ChangeKind, Event};
pub use timeline::model::Timeline;
pub use timeline::script::{parse_json, parse_script};
pub use timeline::shape::{Shape, ShapeKind};
