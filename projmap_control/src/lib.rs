// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=projmap_control --heading-base-level=0

//! Projmap Control: interaction state for the projection mapping demo.
//!
//! This crate sits between a host UI and the pure models in `projmap_optics`
//! and `projmap_compositor`. It owns the demo's mutable state and turns input
//! events into [`Frame`]s for the presentation layer:
//!
//! - [`drag`]: the projector drag gesture and the work area it is clamped to
//! - [`ticker`]: the cancellable clock that scrolls the content pattern
//! - [`SceneViewport`]: device pixel to model coordinate conversion
//! - [`ProjectorSession`]: power and mapping switches, projector position,
//!   and frame assembly
//! - [`Status`]: the read-only status readout
//!
//! The power and mapping switches form four display states. While the
//! projector is off, no beam or content is produced and the mapping switch is
//! disabled; its last value is kept for when the projector comes back on.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use projmap_compositor::{MappingMode, Silhouette};
//! use projmap_control::{ProjectorSession, SceneConfig};
//!
//! let mut session = ProjectorSession::new(SceneConfig::default(), Silhouette::statue()).unwrap();
//!
//! // Grab the projector and drag it towards the statue.
//! assert!(session.pointer_down(Point::new(150.0, 250.0)));
//! session.pointer_move(Point::new(260.0, 250.0));
//! session.pointer_up();
//!
//! let frame = session.frame();
//! let lit = frame.scene.unwrap();
//! assert!(lit.cone.rect.width() < 160.0);
//! assert_eq!(lit.composition.content_rect, lit.cone.rect);
//!
//! // Mapping locks the content to the target rectangle.
//! session.toggle_mapping();
//! let frame = session.frame();
//! assert_eq!(frame.status.mode, MappingMode::Mapped);
//! assert_eq!(frame.scene.unwrap().composition.content_rect, frame.target_rect);
//!
//! // Off means nothing to draw.
//! session.toggle_power();
//! assert!(session.frame().scene.is_none());
//! ```
//!
//! State transitions are reported through the `log` facade at `debug` and
//! `trace` level.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod session;
mod status;
pub mod ticker;
mod viewport;

pub use session::{Frame, LitScene, ProjectorSession, SceneConfig, SceneError};
pub use status::Status;
pub use viewport::{MODEL_BOUNDS, SceneViewport};
