// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted walkthrough of the interactive demo.
//!
//! Simulates a host window showing the scene letterboxed at 1280x720: the
//! projector is dragged towards the statue, mapping is switched on, and the
//! projector is switched off and on again. Each step logs the status readout
//! and the beam footprint.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p projmap_demos --example drag_walkthrough`

use kurbo::{Point, Rect, Vec2};
use log::info;
use projmap_control::{ProjectorSession, SceneViewport};

const FRAME_MS: u64 = 16;

fn report(session: &ProjectorSession, label: &str) {
    let frame = session.frame();
    match &frame.scene {
        Some(scene) => {
            let beam = scene.cone.rect;
            let lit = scene.composition.visible_bounds();
            info!(
                "{label}: {} | beam {:.1}x{:.1} | lit {:.1}x{:.1} | spill {}",
                frame.status,
                beam.width(),
                beam.height(),
                lit.width(),
                lit.height(),
                scene.composition.spills_beyond(frame.silhouette)
            );
        }
        None => info!("{label}: {} | dark", frame.status),
    }
}

fn main() -> anyhow::Result<()> {
    projmap_demos::init_logging();

    let mut session = projmap_demos::open_session(None, None)?;
    let viewport = SceneViewport::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
    let mut now = 0_u64;

    report(&session, "start");

    // Press on the marker as the host would see it, then drag in screen space.
    let grab = viewport.model_to_view_point(session.projector());
    session.pointer_down(viewport.view_to_model_point(grab));
    for step in 1..=10 {
        let screen = grab + Vec2::new(f64::from(step) * 25.0, 0.0);
        session.pointer_move(viewport.view_to_model_point(screen));
        now += FRAME_MS;
        session.tick(now);
    }
    session.pointer_up();
    report(&session, "dragged closer");

    session.toggle_mapping();
    report(&session, "mapping on");

    session.toggle_power();
    let ignored = !session.toggle_mapping();
    report(&session, "power off");
    info!("mapping toggle ignored while off: {ignored}");

    session.toggle_power();
    report(&session, "power on");

    // Pull back past the reference position: the beam outgrows the target,
    // but mapped content stays on it.
    let grab = viewport.model_to_view_point(session.projector());
    session.pointer_down(viewport.view_to_model_point(grab));
    session.pointer_move(Point::new(60.0, 250.0));
    session.pointer_leave();
    report(&session, "pulled back");

    Ok(())
}
