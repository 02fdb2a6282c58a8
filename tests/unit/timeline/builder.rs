use super::*;
use crate::foundation::core::TickSpan;
use crate::foundation::error::TimelineError;
use crate::timeline::event::ChangeKind;

fn kf(tick: i64, x: f64, y: f64, w: f64, h: f64, color: Rgb) -> Keyframe {
    Keyframe {
        tick: Tick(tick),
        x,
        y,
        width: w,
        height: h,
        color,
    }
}

#[test]
fn first_motion_synthesizes_the_creation() {
    let timeline = TimelineBuilder::new()
        .declare_shape("R", "rectangle")
        .unwrap()
        .add_motion(
            "R",
            kf(1, 200.0, 200.0, 50.0, 100.0, Rgb::new(255, 0, 0)),
            kf(10, 200.0, 200.0, 50.0, 100.0, Rgb::new(255, 0, 0)),
        )
        .unwrap()
        .build();

    let events = timeline.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].is_creation());
    assert_eq!(events[0].span().start, Tick(1));
    assert_eq!(events[0].span().end, Tick(10));

    let shape = &timeline.shape_list()[0];
    assert_eq!(shape.name(), "R");
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.origin(), Point::new(200.0, 200.0));
    assert_eq!(shape.color(), Rgb::new(255, 0, 0));
}

#[test]
fn later_motions_extend_the_lifetime() {
    let timeline = TimelineBuilder::new()
        .declare_shape("R", "rect")
        .unwrap()
        .add_motion(
            "R",
            kf(1, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
            kf(10, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
        )
        .unwrap()
        .add_motion(
            "R",
            kf(10, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
            kf(50, 8.0, 0.0, 10.0, 10.0, Rgb::BLACK),
        )
        .unwrap()
        .build();

    let creation = &timeline.events_for_shape("R")[0];
    assert_eq!(creation.span(), TickSpan::new(Tick(1), Tick(50)).unwrap());
    assert_eq!(timeline.final_tick(), Tick(50));
}

#[test]
fn differing_groups_become_separate_events() {
    let timeline = TimelineBuilder::new()
        .declare_shape("R", "rectangle")
        .unwrap()
        .add_motion(
            "R",
            kf(0, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
            kf(5, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
        )
        .unwrap()
        .add_motion(
            "R",
            kf(5, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
            kf(20, 9.0, 9.0, 30.0, 40.0, Rgb::new(0, 255, 0)),
        )
        .unwrap()
        .build();

    let kinds: Vec<_> = timeline
        .events_for_shape("R")
        .iter()
        .map(|e| e.change())
        .collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(ChangeKind::Move),
            Some(ChangeKind::Resize),
            Some(ChangeKind::Recolor)
        ]
    );
}

#[test]
fn hold_motions_emit_no_change_events() {
    let timeline = TimelineBuilder::new()
        .declare_shape("R", "rectangle")
        .unwrap()
        .add_motion(
            "R",
            kf(0, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
            kf(5, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
        )
        .unwrap()
        .add_motion(
            "R",
            kf(5, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
            kf(30, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
        )
        .unwrap()
        .build();

    // Only the creation: the hold extended the lifetime without events.
    assert_eq!(timeline.events().len(), 1);
    assert_eq!(timeline.events()[0].span().end, Tick(30));
}

#[test]
fn undeclared_name_surfaces_unknown_shape() {
    let result = TimelineBuilder::new().add_motion(
        "ghost",
        kf(0, 0.0, 0.0, 10.0, 10.0, Rgb::BLACK),
        kf(5, 1.0, 0.0, 10.0, 10.0, Rgb::BLACK),
    );
    assert!(matches!(result, Err(TimelineError::UnknownShape(_))));
}

#[test]
fn unknown_kind_is_rejected_at_declaration() {
    assert!(matches!(
        TimelineBuilder::new().declare_shape("T", "triangle"),
        Err(TimelineError::InvalidArgument(_))
    ));
}

#[test]
fn dangling_declarations_are_dropped() {
    let timeline = TimelineBuilder::new()
        .declare_shape("never", "ellipse")
        .unwrap()
        .build();
    assert!(timeline.shape_list().is_empty());
    assert!(timeline.events().is_empty());
}

#[test]
fn bounds_pass_through() {
    let timeline = TimelineBuilder::new().set_bounds(200, 70, 360, 360).build();
    assert_eq!(timeline.bounds(), Bounds::new(200, 70, 360, 360));
}
