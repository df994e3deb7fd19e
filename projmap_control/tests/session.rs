// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `ProjectorSession`.
//!
//! These drive the session the way a host would, through pointer events and
//! the two switches, and check the frames it hands to the presentation layer.

use kurbo::{Point, Rect};
use projmap_compositor::{MappingMode, Silhouette};
use projmap_control::{ProjectorSession, SceneConfig, SceneViewport};

const TARGET: Rect = Rect::new(520.0, 130.0, 680.0, 430.0);

fn session() -> ProjectorSession {
    ProjectorSession::new(SceneConfig::default(), Silhouette::statue()).unwrap()
}

fn drag_to(session: &mut ProjectorSession, to: Point) {
    let from = session.projector();
    assert!(session.pointer_down(from));
    session.pointer_move(to);
    session.pointer_up();
}

#[test]
fn raw_content_follows_the_beam_everywhere() {
    let mut s = session();
    for to in [
        Point::new(60.0, 60.0),
        Point::new(260.0, 250.0),
        Point::new(350.0, 440.0),
    ] {
        drag_to(&mut s, to);
        let frame = s.frame();
        let lit = frame.scene.unwrap();
        assert_eq!(lit.composition.content_rect, s.beam_rect());
        assert_eq!(lit.composition.beam_clip, s.beam_rect());
        assert!(lit.composition.silhouette_clip.is_none());
    }
}

#[test]
fn mapped_content_is_the_target_everywhere() {
    let mut s = session();
    assert!(s.toggle_mapping());
    for to in [
        Point::new(60.0, 60.0),
        Point::new(260.0, 250.0),
        Point::new(350.0, 440.0),
    ] {
        drag_to(&mut s, to);
        let lit = s.frame().scene.unwrap();
        assert_eq!(lit.composition.content_rect, TARGET);
        assert_eq!(lit.composition.beam_clip, s.beam_rect());
        assert!(lit.composition.silhouette_clip.is_some());
    }
}

#[test]
fn raw_beam_inside_statue_bounds_still_spills() {
    let mut s = session();
    assert!(s.set_projector(Point::new(242.5, 250.0)));
    assert_eq!(s.beam_rect(), Rect::new(540.0, 167.5, 660.0, 392.5));

    let frame = s.frame();
    let lit = frame.scene.unwrap();
    assert!(lit.composition.spills_beyond(frame.silhouette));

    assert!(s.toggle_mapping());
    let frame = s.frame();
    let lit = frame.scene.unwrap();
    assert!(!lit.composition.spills_beyond(frame.silhouette));
}

#[test]
fn dragging_closer_reproduces_reference_numbers() {
    let mut s = session();
    drag_to(&mut s, Point::new(260.0, 250.0));
    let beam = s.frame().scene.unwrap().cone.rect;
    assert!((beam.width() - 112.432).abs() < 1e-3);
    assert!((beam.height() - 210.811).abs() < 1e-3);
    assert!((beam.center().x - 600.0).abs() < 1e-9);
    assert!((beam.y0 - 174.595).abs() < 1e-3);
}

#[test]
fn drag_is_clamped_to_work_area() {
    let mut s = session();
    drag_to(&mut s, Point::new(700.0, 0.0));
    assert_eq!(s.projector(), Point::new(350.0, 60.0));
    // Scale at the nearest allowed position stays above the floor.
    assert!(s.optics().scale_at(s.projector().x) >= 0.1);
}

#[test]
fn press_outside_marker_does_not_drag() {
    let mut s = session();
    assert!(!s.pointer_down(Point::new(400.0, 250.0)));
    assert!(!s.pointer_move(Point::new(300.0, 250.0)));
    assert_eq!(s.projector(), Point::new(150.0, 250.0));
}

#[test]
fn pointer_leave_ends_drag() {
    let mut s = session();
    assert!(s.pointer_down(Point::new(150.0, 250.0)));
    assert!(s.frame().dragging);
    s.pointer_leave();
    assert!(!s.is_dragging());
    assert!(!s.pointer_move(Point::new(300.0, 300.0)));
}

#[test]
fn power_off_suppresses_geometry() {
    let mut s = session();
    assert!(!s.toggle_power());
    let frame = s.frame();
    assert!(frame.scene.is_none());
    assert_eq!(frame.status.to_string(), "STATUS: OFF | MODE: RAW PROJECTION");
    // The projector can still be moved; only the light is off.
    drag_to(&mut s, Point::new(200.0, 200.0));
    assert_eq!(s.projector(), Point::new(200.0, 200.0));
    assert!(s.frame().scene.is_none());
}

#[test]
fn mapping_toggle_is_ignored_while_off() {
    let mut s = session();
    s.toggle_mapping();
    assert_eq!(s.mapping_mode(), MappingMode::Mapped);

    s.toggle_power();
    let revision = s.revision();
    assert!(!s.status().mapping_control_enabled());
    assert!(!s.toggle_mapping());
    assert!(!s.toggle_mapping());
    assert_eq!(s.revision(), revision);

    s.toggle_power();
    assert_eq!(s.mapping_mode(), MappingMode::Mapped);
    let lit = s.frame().scene.unwrap();
    assert_eq!(lit.composition.content_rect, TARGET);
}

#[test]
fn animation_stops_while_off_and_restarts_from_zero() {
    let mut s = session();
    s.tick(0);
    assert!(s.tick(160));
    assert!(s.ticker().phase() > 0);

    s.toggle_power();
    assert!(!s.ticker().is_running());
    assert!(!s.tick(10_000));

    s.toggle_power();
    assert!(!s.tick(20_000));
    assert!(s.ticker().is_running());
    assert_eq!(s.ticker().phase(), 0);
    assert!(s.tick(20_016));
}

#[test]
fn revision_tracks_effective_changes() {
    let mut s = session();
    let r0 = s.revision();
    drag_to(&mut s, Point::new(200.0, 250.0));
    let r1 = s.revision();
    assert!(r1 > r0);
    assert_eq!(s.frame().revision, r1);

    s.toggle_mapping();
    assert!(s.revision() > r1);
}

#[test]
fn screen_pointer_converts_through_viewport() {
    let mut s = session();
    // Scene shown at half size inside a window with a 100px left margin.
    let viewport = SceneViewport::new(Rect::new(100.0, 0.0, 500.0, 250.0));
    let grab = viewport.model_to_view_point(s.projector());
    assert!(s.pointer_down(viewport.view_to_model_point(grab)));
    s.pointer_move(viewport.view_to_model_point(Point::new(230.0, 125.0)));
    s.pointer_up();
    let pos = s.projector();
    assert!((pos.x - 260.0).abs() < 1e-9);
    assert!((pos.y - 250.0).abs() < 1e-9);
}
