// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::silhouette::Silhouette;

/// Whether software correction is applied to the projected content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MappingMode {
    /// Content fills the physical beam; no correction.
    #[default]
    Raw,
    /// Content is locked to the target and masked by its silhouette.
    Mapped,
}

impl MappingMode {
    /// Returns `true` for [`MappingMode::Mapped`].
    #[must_use]
    pub fn is_mapped(self) -> bool {
        self == Self::Mapped
    }

    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Raw => Self::Mapped,
            Self::Mapped => Self::Raw,
        }
    }
}

impl From<bool> for MappingMode {
    fn from(mapped: bool) -> Self {
        if mapped { Self::Mapped } else { Self::Raw }
    }
}

/// What gets drawn for one projector state, and where it may appear.
///
/// Rendering draws [`Composition::content_rect`], clipped first to
/// [`Composition::beam_clip`] and then, when present, to
/// [`Composition::silhouette_clip`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition<'a> {
    /// Mode the composition was built for.
    pub mode: MappingMode,
    /// Logical content footprint before clipping.
    pub content_rect: Rect,
    /// Physical light limit; applies in every mode.
    pub beam_clip: Rect,
    /// Target mask; only present in mapped mode.
    pub silhouette_clip: Option<&'a Silhouette>,
}

/// Composes the content footprint for a beam.
///
/// Raw content is the beam itself. Mapped content is exactly `target`, but it
/// stays clipped to the beam: correction cannot put light where none lands.
#[must_use]
pub fn compose(
    beam: Rect,
    target: Rect,
    silhouette: &Silhouette,
    mode: MappingMode,
) -> Composition<'_> {
    match mode {
        MappingMode::Raw => Composition {
            mode,
            content_rect: beam,
            beam_clip: beam,
            silhouette_clip: None,
        },
        MappingMode::Mapped => Composition {
            mode,
            content_rect: target,
            beam_clip: beam,
            silhouette_clip: Some(silhouette),
        },
    }
}

impl Composition<'_> {
    /// Conservative bounds of the lit region.
    ///
    /// Zero-area when the content and beam do not overlap.
    #[must_use]
    pub fn visible_bounds(&self) -> Rect {
        let lit = self.content_rect.intersect(self.beam_clip);
        match self.silhouette_clip {
            Some(silhouette) => lit.intersect(silhouette.bounding_box()),
            None => lit,
        }
    }

    /// Returns `true` if content is drawn at `pt`.
    #[must_use]
    pub fn is_lit(&self, pt: Point) -> bool {
        self.content_rect.contains(pt)
            && self.beam_clip.contains(pt)
            && self.silhouette_clip.is_none_or(|s| s.contains(pt))
    }

    /// Returns `true` if lit content lands outside the target's outline.
    ///
    /// Mapped content is masked, so only raw projection can spill.
    #[must_use]
    pub fn spills_beyond(&self, silhouette: &Silhouette) -> bool {
        if self.silhouette_clip.is_some() {
            return false;
        }
        let lit = self.visible_bounds();
        lit.area() > 0.0 && !silhouette.contains_rect(lit)
    }
}
