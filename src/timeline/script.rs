//! Ingestion of animation description scripts.
//!
//! Two equivalent front ends feed [`TimelineBuilder`]: a line-oriented text
//! format (`canvas` / `shape` / `motion` records, `#` comments) and a JSON
//! document. Neither validates timeline semantics itself; model failures
//! surface unchanged.

use std::str::FromStr;

use crate::foundation::core::{Rgb, Tick};
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::timeline::builder::{Keyframe, TimelineBuilder};
use crate::timeline::model::Timeline;

/// Parse the line-oriented animation description format.
///
/// Records, one per line (blank lines and `#` comments ignored):
///
/// ```text
/// canvas X Y WIDTH HEIGHT
/// shape NAME KIND
/// motion NAME T X Y W H R G B  T X Y W H R G B
/// ```
///
/// The two seven-value groups of a `motion` are the shape's full attribute
/// snapshots at the start and end ticks. Malformed lines are
/// [`TimelineError::InvalidArgument`] naming the line number.
#[tracing::instrument(skip(input))]
pub fn parse_script(input: &str) -> TimelineResult<Timeline> {
    let mut builder = TimelineBuilder::new();
    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();
        builder = match keyword {
            "canvas" => {
                let [x, y, w, h] = expect_args::<4>(&rest, line_no, "canvas")?;
                builder.set_bounds(
                    num(x, line_no)?,
                    num(y, line_no)?,
                    num(w, line_no)?,
                    num(h, line_no)?,
                )
            }
            "shape" => {
                let [name, kind] = expect_args::<2>(&rest, line_no, "shape")?;
                builder.declare_shape(name, kind)?
            }
            "motion" => {
                let args = expect_args::<17>(&rest, line_no, "motion")?;
                let name = args[0];
                let from = keyframe(&args[1..9], line_no)?;
                let to = keyframe(&args[9..17], line_no)?;
                builder.add_motion(name, from, to)?
            }
            other => {
                return Err(TimelineError::invalid_argument(format!(
                    "line {line_no}: unknown record '{other}'"
                )));
            }
        };
    }
    Ok(builder.build())
}

fn expect_args<'a, const N: usize>(
    rest: &[&'a str],
    line_no: usize,
    keyword: &str,
) -> TimelineResult<[&'a str; N]> {
    <[&str; N]>::try_from(rest).map_err(|_| {
        TimelineError::invalid_argument(format!(
            "line {line_no}: '{keyword}' takes {N} fields, got {}",
            rest.len()
        ))
    })
}

fn num<T: FromStr>(token: &str, line_no: usize) -> TimelineResult<T> {
    token.parse().map_err(|_| {
        TimelineError::invalid_argument(format!("line {line_no}: invalid number '{token}'"))
    })
}

fn keyframe(fields: &[&str], line_no: usize) -> TimelineResult<Keyframe> {
    Ok(Keyframe {
        tick: Tick(num(fields[0], line_no)?),
        x: num(fields[1], line_no)?,
        y: num(fields[2], line_no)?,
        width: num(fields[3], line_no)?,
        height: num(fields[4], line_no)?,
        color: Rgb::new(
            num(fields[5], line_no)?,
            num(fields[6], line_no)?,
            num(fields[7], line_no)?,
        ),
    })
}

#[derive(serde::Deserialize)]
struct SceneDoc {
    #[serde(default)]
    bounds: Option<[i64; 4]>,
    #[serde(default)]
    shapes: Vec<DeclaredShape>,
    #[serde(default)]
    motions: Vec<MotionRecord>,
}

#[derive(serde::Deserialize)]
struct DeclaredShape {
    name: String,
    kind: String,
}

#[derive(serde::Deserialize)]
struct MotionRecord {
    name: String,
    from: Keyframe,
    to: Keyframe,
}

/// Parse the JSON equivalent of the animation description format.
///
/// ```json
/// {
///   "bounds": [200, 70, 360, 360],
///   "shapes": [{"name": "R", "kind": "rectangle"}],
///   "motions": [{"name": "R",
///                "from": {"tick": 1, "x": 200.0, "y": 200.0,
///                         "width": 50.0, "height": 100.0,
///                         "color": {"r": 255, "g": 0, "b": 0}},
///                "to":   {"tick": 10, "x": 300.0, "y": 200.0,
///                         "width": 50.0, "height": 100.0,
///                         "color": {"r": 255, "g": 0, "b": 0}}}]
/// }
/// ```
///
/// Decode failures are [`TimelineError::Serde`]; semantic failures are the
/// model's own errors, unchanged.
#[tracing::instrument(skip(input))]
pub fn parse_json(input: &str) -> TimelineResult<Timeline> {
    let doc: SceneDoc =
        serde_json::from_str(input).map_err(|e| TimelineError::serde(e.to_string()))?;

    let mut builder = TimelineBuilder::new();
    if let Some([x, y, w, h]) = doc.bounds {
        builder = builder.set_bounds(x, y, w, h);
    }
    for shape in &doc.shapes {
        builder = builder.declare_shape(&shape.name, &shape.kind)?;
    }
    for motion in &doc.motions {
        builder = builder.add_motion(&motion.name, motion.from, motion.to)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/script.rs"]
mod tests;
