// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Target footprint used by the default scene: the statue's reference projection area.
pub const DEFAULT_TARGET_RECT: Rect = Rect::new(520.0, 130.0, 680.0, 430.0);

/// Calibration position at which the default beam exactly covers [`DEFAULT_TARGET_RECT`].
pub const DEFAULT_REFERENCE_POS: Point = Point::new(150.0, 250.0);

/// Throw-axis coordinate of the plane the default target sits on.
pub const DEFAULT_TARGET_PLANE_X: f64 = 520.0;

/// Smallest scale factor the beam may collapse to.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Static description of a projector/target rig.
///
/// The throw axis is X: the projector moves along it towards or away from the
/// plane at [`OpticsConfig::target_plane_x`]. A configuration only becomes
/// usable after validation by [`Optics::new`](crate::Optics::new).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OpticsConfig {
    /// Ideal projection area on the target object.
    pub target_rect: Rect,
    /// Projector position at which the beam equals `target_rect`.
    pub reference_pos: Point,
    /// Fixed X coordinate of the target plane.
    pub target_plane_x: f64,
    /// Floor applied to the distance-derived scale factor.
    pub min_scale: f64,
}

impl Default for OpticsConfig {
    fn default() -> Self {
        Self {
            target_rect: DEFAULT_TARGET_RECT,
            reference_pos: DEFAULT_REFERENCE_POS,
            target_plane_x: DEFAULT_TARGET_PLANE_X,
            min_scale: DEFAULT_MIN_SCALE,
        }
    }
}

impl OpticsConfig {
    /// Distance from the reference position to the target plane along the throw axis.
    #[must_use]
    pub fn ref_distance(&self) -> f64 {
        self.target_plane_x - self.reference_pos.x
    }

    /// Checks the configuration, returning the reference distance on success.
    pub fn validate(&self) -> Result<f64, ConfigError> {
        let t = self.target_rect;
        let scalars = [
            ("target_rect", [t.x0, t.y0, t.x1, t.y1]),
            (
                "reference_pos",
                [self.reference_pos.x, self.reference_pos.y, 0.0, 0.0],
            ),
            ("target_plane_x", [self.target_plane_x, 0.0, 0.0, 0.0]),
            ("min_scale", [self.min_scale, 0.0, 0.0, 0.0]),
        ];
        for (field, values) in scalars {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if t.width() <= 0.0 || t.height() <= 0.0 {
            return Err(ConfigError::DegenerateTarget {
                width: t.width(),
                height: t.height(),
            });
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }

        let ref_distance = self.ref_distance();
        if ref_distance == 0.0 {
            return Err(ConfigError::ZeroReferenceDistance {
                plane_x: self.target_plane_x,
            });
        }
        Ok(ref_distance)
    }
}

/// Reasons a rig configuration is rejected at initialization.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The reference position lies on the target plane.
    #[error("reference position lies on the target plane (x = {plane_x}); reference distance is zero")]
    ZeroReferenceDistance {
        /// The offending plane coordinate.
        plane_x: f64,
    },
    /// A coordinate or scalar is NaN or infinite.
    #[error("configuration value `{field}` is not finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `min_scale` is zero or negative.
    #[error("minimum scale must be positive, got {0}")]
    NonPositiveMinScale(f64),
    /// The target rectangle has no area.
    #[error("target rectangle has degenerate size {width}x{height}")]
    DegenerateTarget {
        /// Target width.
        width: f64,
        /// Target height.
        height: f64,
    },
}
