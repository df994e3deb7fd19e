// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Projmap demos.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use kurbo::Point;
use projmap_compositor::{MappingMode, Silhouette};
use projmap_control::{ProjectorSession, SceneConfig};

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Reads a JSON [`SceneConfig`]; missing fields take their defaults.
pub fn load_scene_config(path: &Path) -> anyhow::Result<SceneConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scene config {}", path.display()))
}

/// Builds a session from an optional config file and optional SVG outline.
pub fn open_session(
    config: Option<&Path>,
    silhouette: Option<&str>,
) -> anyhow::Result<ProjectorSession> {
    let config = match config {
        Some(path) => load_scene_config(path)?,
        None => SceneConfig::default(),
    };
    let silhouette = match silhouette {
        Some(data) => Silhouette::from_svg(data).context("invalid silhouette path data")?,
        None => Silhouette::statue(),
    };
    log::debug!("scene config: {config:?}");
    ProjectorSession::new(config, silhouette).context("invalid scene configuration")
}

/// Command-line adjustments applied on top of a configured session.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOverrides {
    /// Projector X position; the configured one when `None`.
    pub x: Option<f64>,
    /// Projector Y position; the configured one when `None`.
    pub y: Option<f64>,
    /// Requested mapping mode.
    pub mapped: bool,
    /// Force the projector off.
    pub off: bool,
}

impl FrameOverrides {
    /// Applies the overrides to `session`.
    ///
    /// The mapping switch is ignored while the projector is off, so power is
    /// briefly enabled to set the mode and then restored. The projector ends
    /// up off if it was configured off or `off` is set.
    pub fn apply(&self, session: &mut ProjectorSession) {
        let start = session.projector();
        session.set_projector(Point::new(
            self.x.unwrap_or(start.x),
            self.y.unwrap_or(start.y),
        ));

        let was_on = session.is_projector_on();
        session.set_power(true);
        if MappingMode::from(self.mapped) != session.mapping_mode() {
            session.toggle_mapping();
        }
        if self.off || !was_on {
            session.set_power(false);
        }
    }
}
