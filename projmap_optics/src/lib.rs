// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=projmap_optics --heading-base-level=0

//! Projmap Optics: the projector throw model.
//!
//! A projector's image grows with its distance from the surface it lands on.
//! This crate models that with the simplest possible optics: the beam
//! footprint on a fixed target plane is the target rectangle scaled by
//! `distance / reference_distance`, where the reference distance is the one at
//! which the beam exactly covers the target.
//!
//! - The throw axis is X. The target plane sits at a fixed X coordinate.
//! - The beam is always horizontally centred on the target.
//! - Moving the projector up or down pans the beam by the same amount without
//!   changing its size.
//! - The scale factor has a positive floor, so the footprint never collapses
//!   or flips as the projector approaches or crosses the plane.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use projmap_optics::{Optics, OpticsConfig};
//!
//! let optics = Optics::new(OpticsConfig::default()).unwrap();
//!
//! // At the calibration position the beam is exactly the target.
//! let beam = optics.beam_rect(Point::new(150.0, 250.0));
//! assert_eq!(beam, Rect::new(520.0, 130.0, 680.0, 430.0));
//!
//! // Moving closer shrinks it around the same horizontal centre.
//! let beam = optics.beam_rect(Point::new(260.0, 250.0));
//! assert!(beam.width() < 160.0);
//! assert!((beam.center().x - 600.0).abs() < 1e-9);
//! ```
//!
//! ## Configuration errors
//!
//! A rig whose reference position lies on the target plane has no meaningful
//! reference distance. [`Optics::new`] rejects it, together with non-finite
//! inputs, degenerate targets, and non-positive scale floors:
//!
//! ```rust
//! use kurbo::Point;
//! use projmap_optics::{ConfigError, Optics, OpticsConfig};
//!
//! let config = OpticsConfig {
//!     reference_pos: Point::new(520.0, 250.0),
//!     ..OpticsConfig::default()
//! };
//! assert!(matches!(
//!     Optics::new(config),
//!     Err(ConfigError::ZeroReferenceDistance { .. })
//! ));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

mod config;
mod optics;

pub use config::{
    ConfigError, DEFAULT_MIN_SCALE, DEFAULT_REFERENCE_POS, DEFAULT_TARGET_PLANE_X,
    DEFAULT_TARGET_RECT, OpticsConfig,
};
pub use optics::{BeamCone, LENS_HALF_APERTURE, LENS_OFFSET, Optics};
