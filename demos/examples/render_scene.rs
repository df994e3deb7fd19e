// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render one demo frame to SVG.
//!
//! Run:
//! - `cargo run -p projmap_demos --example render_scene -- --x 260 --mapped -o scene.svg`

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use log::info;
use projmap_demos::FrameOverrides;
use projmap_svg::render_frame;

/// Render the projection mapping scene for a given projector state.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Projector X position (model units); defaults to the reference position.
    #[arg(long)]
    x: Option<f64>,
    /// Projector Y position (model units); defaults to the reference position.
    #[arg(long)]
    y: Option<f64>,
    /// Enable projection mapping.
    #[arg(long)]
    mapped: bool,
    /// Render with the projector switched off.
    #[arg(long)]
    off: bool,
    /// JSON scene configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// SVG path data for the target outline.
    #[arg(long)]
    silhouette: Option<String>,
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    projmap_demos::init_logging();
    let args = Args::parse();

    let mut session =
        projmap_demos::open_session(args.config.as_deref(), args.silhouette.as_deref())?;
    FrameOverrides {
        x: args.x,
        y: args.y,
        mapped: args.mapped,
        off: args.off,
    }
    .apply(&mut session);

    let frame = session.frame();
    if let Some(scene) = &frame.scene {
        let beam = scene.cone.rect;
        info!(
            "projector ({:.1}, {:.1}) scale {:.3}: beam {:.1}x{:.1} at ({:.1}, {:.1})",
            frame.projector.x,
            frame.projector.y,
            session.optics().scale_at(frame.projector.x),
            beam.width(),
            beam.height(),
            beam.x0,
            beam.y0
        );
    }
    info!("{}", frame.status);

    let svg = render_frame(&frame);
    match args.output {
        Some(path) => {
            fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{svg}"),
    }
    Ok(())
}
