//! SVG 1.1 rendering of the timeline.
//!
//! Each shape becomes one declaration element (from its creation event)
//! with nested `<animate>` children, one per attribute that changes in each
//! event touching the shape. Abstract ticks convert to milliseconds here
//! and nowhere else, via the caller-supplied ticks-per-second rate.

use std::io;

use crate::foundation::core::Tick;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::timeline::event::ChangeKind;
use crate::timeline::model::Timeline;
use crate::timeline::shape::{Shape, ShapeKind};

/// Render the timeline as a complete SVG 1.1 document.
///
/// The viewport is `(bounds.width - bounds.x, bounds.height - bounds.y)`
/// with the raw bounds as the view box. Shapes appear in registry
/// (creation) order. `ticks_per_sec` must be positive; milliseconds are
/// computed as `ticks * 1000 / ticks_per_sec`. A registered shape with no
/// creation event in the log is [`TimelineError::InvalidState`], since it
/// cannot be declared. Position and size animations carry `fill="freeze"`;
/// color animations do not.
#[tracing::instrument(skip(timeline))]
pub fn render_svg(timeline: &Timeline, ticks_per_sec: u32) -> TimelineResult<String> {
    if ticks_per_sec == 0 {
        return Err(TimelineError::invalid_argument(
            "ticks-per-second rate must be > 0",
        ));
    }
    let bounds = timeline.bounds();
    let mut doc = format!(
        "<svg width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" \
         version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n\n",
        bounds.width - bounds.x,
        bounds.height - bounds.y,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height
    );
    for shape in timeline.shape_list() {
        doc.push_str(&shape_block(timeline, &shape, ticks_per_sec)?);
    }
    doc.push_str("</svg>");
    Ok(doc)
}

/// Render the SVG document into an output sink.
///
/// Model and validation errors propagate; only a failure of the sink
/// itself is reported and swallowed, so a broken sink cannot take down a
/// long-running driver.
pub fn write_svg(
    timeline: &Timeline,
    ticks_per_sec: u32,
    sink: &mut dyn io::Write,
) -> TimelineResult<()> {
    let doc = render_svg(timeline, ticks_per_sec)?;
    if let Err(e) = sink.write_all(doc.as_bytes()) {
        tracing::error!(error = %e, "failed to write SVG document to sink");
    }
    Ok(())
}

fn ms(tick: Tick, rate: u32) -> i64 {
    tick.0 * 1000 / i64::from(rate)
}

/// One shape's declaration element plus its animation children.
fn shape_block(timeline: &Timeline, shape: &Shape, rate: u32) -> TimelineResult<String> {
    let events = timeline.events_for_shape(shape.name());
    let creation = events.iter().find(|e| e.is_creation()).ok_or_else(|| {
        TimelineError::invalid_state(format!(
            "shape '{}' has no creation event to declare it",
            shape.name()
        ))
    })?;

    let mut block = declaration(creation.start_state());
    for event in &events {
        let Some(kind) = event.change() else {
            continue;
        };
        let begin = ms(event.span().start, rate);
        let dur = ms(event.span().end, rate) - begin;
        let (from, to) = (event.start_state(), event.end_state());
        match kind {
            ChangeKind::Move => {
                let (x_attr, y_attr) = match shape.kind() {
                    ShapeKind::Rectangle => ("x", "y"),
                    ShapeKind::Ellipse => ("cx", "cy"),
                };
                push_int_animate(
                    &mut block,
                    x_attr,
                    begin,
                    dur,
                    from.origin().x,
                    to.origin().x,
                );
                push_int_animate(
                    &mut block,
                    y_attr,
                    begin,
                    dur,
                    from.origin().y,
                    to.origin().y,
                );
            }
            ChangeKind::Resize => {
                let (w_attr, h_attr) = match shape.kind() {
                    ShapeKind::Rectangle => ("width", "height"),
                    ShapeKind::Ellipse => ("rx", "ry"),
                };
                push_int_animate(&mut block, w_attr, begin, dur, from.width(), to.width());
                push_int_animate(&mut block, h_attr, begin, dur, from.height(), to.height());
            }
            ChangeKind::Recolor => {
                block.push_str(&animate(
                    "fill",
                    begin,
                    dur,
                    &from.color().css(),
                    &to.color().css(),
                    false,
                ));
            }
        }
    }

    let close = match shape.kind() {
        ShapeKind::Rectangle => "</rect>",
        ShapeKind::Ellipse => "</ellipse>",
    };
    block.push_str(close);
    block.push_str("\n\n");
    Ok(block)
}

/// The kind-specific declaration element, taken from the creation state.
fn declaration(shape: &Shape) -> String {
    let x = shape.origin().x as i64;
    let y = shape.origin().y as i64;
    let w = shape.width() as i64;
    let h = shape.height() as i64;
    let fill = shape.color().css();
    match shape.kind() {
        ShapeKind::Rectangle => format!(
            "<rect id=\"{}\" x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" \
             fill=\"{fill}\" visibility=\"visible\" >\n",
            shape.name()
        ),
        ShapeKind::Ellipse => format!(
            "<ellipse id=\"{}\" cx=\"{x}\" cy=\"{y}\" rx=\"{w}\" ry=\"{h}\" \
             fill=\"{fill}\" visibility=\"visible\" >\n",
            shape.name()
        ),
    }
}

/// Emit one integer-valued `<animate>`, skipped when the value is constant.
fn push_int_animate(block: &mut String, attr: &str, begin: i64, dur: i64, from: f64, to: f64) {
    let (from, to) = (from as i64, to as i64);
    if from == to {
        return;
    }
    block.push_str(&animate(
        attr,
        begin,
        dur,
        &from.to_string(),
        &to.to_string(),
        true,
    ));
}

fn animate(attr: &str, begin: i64, dur: i64, from: &str, to: &str, freeze: bool) -> String {
    let freeze = if freeze { " fill=\"freeze\"" } else { "" };
    format!(
        "<animate attributeType=\"xml\" begin=\"{begin}ms\" dur=\"{dur}ms\" \
         attributeName=\"{attr}\" from=\"{from}\" to=\"{to}\"{freeze} />\n"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
