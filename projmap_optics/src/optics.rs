// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Insets, Point, Rect, Vec2};

use crate::config::{ConfigError, OpticsConfig};

/// Offset from the projector position to the centre of its lens.
pub const LENS_OFFSET: Vec2 = Vec2::new(40.0, 0.0);

/// Half height of the lens opening the beam cone starts from.
pub const LENS_HALF_APERTURE: f64 = 5.0;

/// A validated projector/target rig.
///
/// `Optics` turns a projector position into the physical beam footprint on the
/// target plane using linear inverse-distance scaling: the beam is
/// `distance / ref_distance` times the size of the target rectangle, never
/// smaller than [`OpticsConfig::min_scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Optics {
    config: OpticsConfig,
    ref_distance: f64,
}

impl Optics {
    /// Validates `config` and builds the model.
    ///
    /// A reference position on the target plane (zero reference distance) is
    /// rejected here; every other operation is total once this succeeds.
    pub fn new(config: OpticsConfig) -> Result<Self, ConfigError> {
        let ref_distance = config.validate()?;
        Ok(Self {
            config,
            ref_distance,
        })
    }

    /// Returns the configuration the model was built from.
    #[must_use]
    pub fn config(&self) -> &OpticsConfig {
        &self.config
    }

    /// Returns the reference throw distance.
    #[must_use]
    pub fn ref_distance(&self) -> f64 {
        self.ref_distance
    }

    /// Returns the target rectangle.
    #[must_use]
    pub fn target_rect(&self) -> Rect {
        self.config.target_rect
    }

    /// Scale factor of the beam for a projector at `projector_x`.
    ///
    /// Positions at or past the target plane clamp to the minimum scale instead
    /// of producing zero or inverted geometry.
    #[must_use]
    pub fn scale_at(&self, projector_x: f64) -> f64 {
        let current = self.config.target_plane_x - projector_x;
        // `f64::max` discards NaN, so a NaN ratio also lands on the floor.
        (current / self.ref_distance).max(self.config.min_scale)
    }

    /// Physical beam footprint for a projector at `projector`.
    ///
    /// The beam is horizontally centred on the target. Vertically it pans with
    /// the projector's offset from the reference position; that offset does not
    /// change its size.
    #[must_use]
    pub fn beam_rect(&self, projector: Point) -> Rect {
        let scale = self.scale_at(projector.x);
        let target = self.config.target_rect;
        // Shrinking by an inset keeps the reference case bit-exact.
        let inset_x = target.width() * (1.0 - scale) * 0.5;
        let inset_y = target.height() * (1.0 - scale) * 0.5;
        let pan = projector.y - self.config.reference_pos.y;
        target.inset(Insets::uniform_xy(-inset_x, -inset_y)) + Vec2::new(0.0, pan)
    }

    /// Lens centre for a projector at `projector`.
    #[must_use]
    pub fn lens_point(&self, projector: Point) -> Point {
        projector + LENS_OFFSET
    }

    /// Beam footprint together with the lens it is thrown from.
    #[must_use]
    pub fn beam(&self, projector: Point) -> BeamCone {
        BeamCone {
            lens: self.lens_point(projector),
            rect: self.beam_rect(projector),
        }
    }
}

/// The light cone between the lens and the beam footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamCone {
    /// Lens centre.
    pub lens: Point,
    /// Beam footprint on the target plane.
    pub rect: Rect,
}

impl BeamCone {
    /// Upper edge of the lens opening.
    #[must_use]
    pub fn lens_top(&self) -> Point {
        self.lens - Vec2::new(0.0, LENS_HALF_APERTURE)
    }

    /// Lower edge of the lens opening.
    #[must_use]
    pub fn lens_bottom(&self) -> Point {
        self.lens + Vec2::new(0.0, LENS_HALF_APERTURE)
    }

    /// Closed quadrilateral from the lens to the near edge of the footprint.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.lens_top());
        path.line_to(Point::new(self.rect.x0, self.rect.y0));
        path.line_to(Point::new(self.rect.x0, self.rect.y1));
        path.line_to(self.lens_bottom());
        path.close_path();
        path
    }
}
