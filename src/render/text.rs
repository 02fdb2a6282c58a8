//! Structured-text rendering of the full event log.

use std::io;

use crate::timeline::model::Timeline;

/// Render the timeline's event log as structured text.
///
/// One paragraph per event in event-list order, blank-line separated,
/// trailing whitespace trimmed. The wording of each paragraph is a
/// compatibility contract (see [`crate::Event`]'s `Display`).
#[tracing::instrument(skip(timeline))]
pub fn render_text(timeline: &Timeline) -> String {
    let mut log = String::new();
    for event in timeline.events() {
        log.push_str(&event.to_string());
        log.push_str("\n\n");
    }
    log.trim_end().to_string()
}

/// Render the event log into an output sink.
///
/// Sink failures are reported and swallowed: a broken sink should not take
/// down a long-running driver. Only the sink is forgiven; model errors
/// never pass through here.
pub fn write_text(timeline: &Timeline, sink: &mut dyn io::Write) {
    let text = render_text(timeline);
    if let Err(e) = sink.write_all(text.as_bytes()) {
        tracing::error!(error = %e, "failed to write text description to sink");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
