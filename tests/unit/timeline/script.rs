use super::*;
use crate::foundation::core::Point;
use crate::timeline::shape::ShapeKind;

const SMALLDEMO: &str = "\
# simple two-shape scene
canvas 200 70 360 360

shape R rectangle
shape C oval
motion R 1 200 200 50 100 255 0 0  10 200 200 50 100 255 0 0
motion R 10 200 200 50 100 255 0 0  50 300 300 50 100 255 0 0
motion C 6 440 70 120 60 0 0 255  20 440 70 120 60 0 0 255
";

#[test]
fn parses_a_small_scene() {
    let timeline = parse_script(SMALLDEMO).unwrap();

    assert_eq!(timeline.bounds(), crate::Bounds::new(200, 70, 360, 360));
    let shapes = timeline.shape_list();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].name(), "R");
    assert_eq!(shapes[0].kind(), ShapeKind::Rectangle);
    assert_eq!(shapes[1].name(), "C");
    assert_eq!(shapes[1].kind(), ShapeKind::Ellipse);

    // Creation, hold-extended to t=50, plus one move event.
    let r_events = timeline.events_for_shape("R");
    assert_eq!(r_events.len(), 2);
    assert_eq!(r_events[0].span().end, Tick(50));
    assert!(!r_events[1].is_creation());
    assert_eq!(r_events[1].end_state().origin(), Point::new(300.0, 300.0));

    assert_eq!(timeline.final_tick(), Tick(50));
}

#[test]
fn blank_lines_and_comments_are_ignored() {
    let timeline = parse_script("\n  \n# nothing here\n").unwrap();
    assert!(timeline.events().is_empty());
}

#[test]
fn unknown_record_names_the_line() {
    let err = parse_script("canvas 0 0 10 10\nwobble R\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"), "{msg}");
    assert!(msg.contains("wobble"), "{msg}");
}

#[test]
fn wrong_field_count_names_the_keyword() {
    let err = parse_script("shape R\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 1"), "{msg}");
    assert!(msg.contains("'shape' takes 2 fields"), "{msg}");

    let err = parse_script("motion R 1 2 3\n").unwrap_err();
    assert!(err.to_string().contains("'motion' takes 17 fields"));
}

#[test]
fn bad_numbers_name_the_token() {
    let err = parse_script("canvas 0 zero 10 10\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 1"), "{msg}");
    assert!(msg.contains("'zero'"), "{msg}");
}

#[test]
fn model_errors_surface_unchanged() {
    // Motion for a name that was never declared.
    let err = parse_script("motion R 1 0 0 5 5 0 0 0  4 1 0 5 5 0 0 0\n").unwrap_err();
    assert!(matches!(err, TimelineError::UnknownShape(_)));
}

#[test]
fn parses_the_json_equivalent() {
    let doc = r#"{
        "bounds": [200, 70, 360, 360],
        "shapes": [{"name": "R", "kind": "rectangle"}],
        "motions": [
            {"name": "R",
             "from": {"tick": 1, "x": 200.0, "y": 200.0,
                      "width": 50.0, "height": 100.0,
                      "color": {"r": 255, "g": 0, "b": 0}},
             "to":   {"tick": 10, "x": 300.0, "y": 200.0,
                      "width": 50.0, "height": 100.0,
                      "color": {"r": 255, "g": 0, "b": 0}}}
        ]
    }"#;
    let timeline = parse_json(doc).unwrap();

    assert_eq!(timeline.shape_list().len(), 1);
    let events = timeline.events_for_shape("R");
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].end_state().origin(), Point::new(300.0, 200.0));
}

#[test]
fn json_fields_are_optional() {
    let timeline = parse_json("{}").unwrap();
    assert!(timeline.events().is_empty());
    assert_eq!(timeline.bounds(), crate::Bounds::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        parse_json("{ not json"),
        Err(TimelineError::Serde(_))
    ));
}
