// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=projmap_compositor --heading-base-level=0

//! Projmap Compositor: raw versus mapped projection.
//!
//! Given the physical beam footprint and the target's reference rectangle,
//! [`compose`] decides where content is drawn and how it is clipped:
//!
//! - [`MappingMode::Raw`]: content fills the beam. Anything the beam covers is
//!   lit, including whatever lies beyond the target object ("spill").
//! - [`MappingMode::Mapped`]: content is locked to the target rectangle and
//!   masked by the target's [`Silhouette`]. The beam still bounds it, since
//!   software correction cannot produce light where the projector throws none.
//!
//! The beam clip applies in both modes; the silhouette clip only when mapped.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use projmap_compositor::{MappingMode, Silhouette, compose};
//!
//! let statue = Silhouette::statue();
//! let target = Rect::new(520.0, 130.0, 680.0, 430.0);
//! let beam = Rect::new(543.8, 174.6, 656.2, 385.4);
//!
//! let raw = compose(beam, target, &statue, MappingMode::Raw);
//! assert_eq!(raw.content_rect, beam);
//!
//! let mapped = compose(beam, target, &statue, MappingMode::Mapped);
//! assert_eq!(mapped.content_rect, target);
//! // The statue's head is outside this smaller beam, so it stays dark.
//! assert!(!mapped.is_lit(Point::new(600.0, 160.0)));
//! ```
//!
//! This crate is `no_std`. Parsing silhouettes from SVG path data needs the
//! `std` feature.

#![no_std]

mod compose;
mod silhouette;

pub use compose::{Composition, MappingMode, compose};
pub use silhouette::{STATUE_PATH_DATA, Silhouette, SilhouetteError};
