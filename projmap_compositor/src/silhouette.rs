// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable outlines of physical projection targets.

use kurbo::{BezPath, Line, PathEl, Point, Rect, Shape};

/// SVG path data of the default target: a low-poly head on a plinth.
pub const STATUE_PATH_DATA: &str =
    "M550,400 L550,300 L540,250 L550,200 L580,150 L620,150 L650,200 L660,250 L650,300 L650,400 Z";

const STATUE_VERTICES: [Point; 10] = [
    Point::new(550.0, 400.0),
    Point::new(550.0, 300.0),
    Point::new(540.0, 250.0),
    Point::new(550.0, 200.0),
    Point::new(580.0, 150.0),
    Point::new(620.0, 150.0),
    Point::new(650.0, 200.0),
    Point::new(660.0, 250.0),
    Point::new(650.0, 300.0),
    Point::new(650.0, 400.0),
];

/// A closed outline of the object being projected onto.
///
/// Every subpath is closed on construction. Point membership uses the
/// non-zero winding rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Silhouette {
    path: BezPath,
    bbox: Rect,
}

impl Silhouette {
    /// Builds a silhouette from `path`, closing any open subpaths.
    pub fn new(path: BezPath) -> Result<Self, SilhouetteError> {
        let mut closed = BezPath::new();
        let mut open = false;
        let mut vertices = 0_usize;
        for el in path.elements() {
            let end = match *el {
                PathEl::MoveTo(p) => {
                    if open {
                        closed.close_path();
                    }
                    open = true;
                    Some(p)
                }
                PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => Some(p),
                PathEl::ClosePath => {
                    open = false;
                    None
                }
            };
            if let Some(p) = end {
                if !(p.x.is_finite() && p.y.is_finite()) {
                    return Err(SilhouetteError::NonFinite);
                }
                vertices += 1;
            }
            closed.push(*el);
        }
        if open {
            closed.close_path();
        }

        if vertices < 3 {
            return Err(SilhouetteError::TooFewVertices(vertices));
        }
        let bbox = closed.bounding_box();
        // Collinear outlines can have non-empty bounds yet enclose nothing.
        if bbox.area() <= 0.0 || closed.area().abs() <= f64::EPSILON {
            return Err(SilhouetteError::ZeroArea);
        }
        Ok(Self { path: closed, bbox })
    }

    /// Builds a closed polygon through `points`.
    pub fn from_points(points: &[Point]) -> Result<Self, SilhouetteError> {
        let mut path = BezPath::new();
        let mut iter = points.iter().copied();
        if let Some(first) = iter.next() {
            path.move_to(first);
        }
        for p in iter {
            path.line_to(p);
        }
        Self::new(path)
    }

    /// Parses SVG path data such as [`STATUE_PATH_DATA`].
    #[cfg(feature = "std")]
    pub fn from_svg(data: &str) -> Result<Self, SilhouetteError> {
        let path = BezPath::from_svg(data)?;
        Self::new(path)
    }

    /// The default statue outline.
    #[must_use]
    pub fn statue() -> Self {
        let mut path = BezPath::new();
        path.move_to(STATUE_VERTICES[0]);
        for p in &STATUE_VERTICES[1..] {
            path.line_to(*p);
        }
        path.close_path();
        let bbox = path.bounding_box();
        Self { path, bbox }
    }

    /// The closed outline.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Axis-aligned bounds of the outline.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.bbox
    }

    /// Returns `true` if `pt` lies inside the outline.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.bbox.contains(pt) && self.path.winding(pt) != 0
    }

    /// Returns `true` if all of `rect` lies inside the outline.
    ///
    /// The outline may be concave, so inside corners are not enough: no
    /// outline segment may cross the rectangle's edges either.
    #[must_use]
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        if !corners.iter().all(|&c| self.contains(c)) {
            return false;
        }
        let edges = [
            Line::new(corners[0], corners[1]),
            Line::new(corners[1], corners[2]),
            Line::new(corners[2], corners[3]),
            Line::new(corners[3], corners[0]),
        ];
        !self
            .path
            .segments()
            .any(|seg| edges.iter().any(|&edge| !seg.intersect_line(edge).is_empty()))
    }
}

impl Default for Silhouette {
    fn default() -> Self {
        Self::statue()
    }
}

/// Reasons an outline cannot serve as a silhouette.
#[derive(Debug, thiserror::Error)]
pub enum SilhouetteError {
    /// Fewer than three vertices; nothing can be enclosed.
    #[error("silhouette needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// The outline encloses no area.
    #[error("silhouette encloses no area")]
    ZeroArea,
    /// A vertex is NaN or infinite.
    #[error("silhouette has a non-finite vertex")]
    NonFinite,
    /// The SVG path data could not be parsed.
    #[cfg(feature = "std")]
    #[error("invalid SVG path data: {0}")]
    Svg(#[from] kurbo::SvgParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statue_bounds_match_outline() {
        let statue = Silhouette::statue();
        assert_eq!(statue.bounding_box(), Rect::new(540.0, 150.0, 660.0, 400.0));
    }

    #[test]
    fn statue_membership() {
        let statue = Silhouette::statue();
        assert!(statue.contains(Point::new(600.0, 280.0)));
        // Inside the bounds but outside the tapered head.
        assert!(!statue.contains(Point::new(545.0, 160.0)));
        assert!(!statue.contains(Point::new(700.0, 280.0)));
    }

    #[test]
    fn rect_containment_respects_concave_outline() {
        let statue = Silhouette::statue();
        assert!(statue.contains_rect(Rect::new(580.0, 250.0, 620.0, 350.0)));
        // Inside the bounds, but the corners sit beside the tapered head.
        assert!(!statue.contains_rect(Rect::new(540.0, 167.5, 660.0, 392.5)));

        // All four corners inside, yet the notch cuts across the lower edge.
        let notched = Silhouette::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(50.0, 40.0),
            Point::new(0.0, 100.0),
        ])
        .unwrap();
        let rect = Rect::new(10.0, 10.0, 90.0, 60.0);
        assert!(notched.contains(Point::new(10.0, 59.0)));
        assert!(notched.contains(Point::new(89.0, 59.0)));
        assert!(!notched.contains_rect(rect));
    }

    #[test]
    fn open_polygon_is_closed() {
        let triangle = Silhouette::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        assert_eq!(
            triangle.path().elements().last(),
            Some(&PathEl::ClosePath)
        );
        assert!(triangle.contains(Point::new(2.0, 2.0)));
        assert!(!triangle.contains(Point::new(9.0, 9.0)));
    }

    #[test]
    fn degenerate_outlines_are_rejected() {
        assert!(matches!(
            Silhouette::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]),
            Err(SilhouetteError::TooFewVertices(2))
        ));
        assert!(matches!(
            Silhouette::from_points(&[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
            ]),
            Err(SilhouetteError::ZeroArea)
        ));
        assert!(matches!(
            Silhouette::from_points(&[
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
            ]),
            Err(SilhouetteError::ZeroArea)
        ));
        assert!(matches!(
            Silhouette::from_points(&[
                Point::new(0.0, 0.0),
                Point::new(f64::NAN, 0.0),
                Point::new(2.0, 2.0),
            ]),
            Err(SilhouetteError::NonFinite)
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn svg_statue_matches_builtin() {
        let parsed = Silhouette::from_svg(STATUE_PATH_DATA).unwrap();
        assert_eq!(parsed.bounding_box(), Silhouette::statue().bounding_box());
        assert!(matches!(
            Silhouette::from_svg("M0,0 X"),
            Err(SilhouetteError::Svg(_))
        ));
    }
}
