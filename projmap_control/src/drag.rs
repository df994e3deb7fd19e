// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projector drag gesture: press on the marker, move while pressed, release.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`ProjectorDrag::press`] with the pointer and the
//!    current projector position. The drag only starts if the pointer hits the
//!    marker's grab area.
//! 2) On each move, call [`ProjectorDrag::update`]; while dragging it returns
//!    the new projector position, which is the pointer clamped to the
//!    [`WorkArea`].
//! 3) On pointer up or leave, call [`ProjectorDrag::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use projmap_control::drag::{ProjectorDrag, WorkArea};
//!
//! let area = WorkArea::default();
//! let mut drag = ProjectorDrag::default();
//!
//! assert!(drag.press(Point::new(160.0, 260.0), Point::new(150.0, 250.0)));
//! let pos = drag.update(Point::new(500.0, 20.0), &area).unwrap();
//! assert_eq!(pos, Point::new(350.0, 60.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Rect, Vec2};

/// Grab area of the projector marker, relative to the projector position.
pub const MARKER_HITBOX: Rect = Rect::new(-50.0, -40.0, 50.0, 100.0);

/// Region the projector may be dragged within.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkArea {
    /// Allowed projector positions, inclusive on every edge.
    pub bounds: Rect,
}

impl Default for WorkArea {
    fn default() -> Self {
        Self {
            bounds: Rect::new(60.0, 60.0, 350.0, 440.0),
        }
    }
}

impl WorkArea {
    /// Clamps `pt` into the work area, each axis independently.
    #[must_use]
    pub fn clamp(&self, pt: Point) -> Point {
        let b = self.bounds;
        Point::new(pt.x.max(b.x0).min(b.x1), pt.y.max(b.y0).min(b.y1))
    }

    /// Returns `true` if `pt` is inside the area, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let b = self.bounds;
        (b.x0..=b.x1).contains(&pt.x) && (b.y0..=b.y1).contains(&pt.y)
    }
}

/// Returns the marker grab area for a projector at `projector`.
#[must_use]
pub fn marker_hitbox(projector: Point) -> Rect {
    MARKER_HITBOX + projector.to_vec2()
}

/// Tracks a projector drag across pointer events.
#[derive(Debug, Clone, Default, Copy)]
pub struct ProjectorDrag {
    /// Pointer position the drag started at.
    pub start_pos: Option<Point>,
    /// Last pointer position seen during the drag.
    pub last_pos: Option<Point>,
}

impl ProjectorDrag {
    /// Starts a drag if `pointer` hits the marker of a projector at `projector`.
    ///
    /// Returns whether the drag started. A press that misses leaves any
    /// ongoing drag untouched.
    pub fn press(&mut self, pointer: Point, projector: Point) -> bool {
        if !marker_hitbox(projector).contains(pointer) {
            return false;
        }
        self.start_pos = Some(pointer);
        self.last_pos = Some(pointer);
        true
    }

    /// Feeds a pointer move, returning the new projector position while dragging.
    ///
    /// The projector follows the pointer directly, clamped to `area`.
    pub fn update(&mut self, pointer: Point, area: &WorkArea) -> Option<Point> {
        if !self.is_dragging() {
            return None;
        }
        self.last_pos = Some(pointer);
        Some(area.clamp(pointer))
    }

    /// Pointer movement since the drag started.
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTOR: Point = Point::new(150.0, 250.0);

    #[test]
    fn new_drag_is_idle() {
        let drag = ProjectorDrag::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.total_offset(), None);
    }

    #[test]
    fn press_on_marker_starts_drag() {
        let mut drag = ProjectorDrag::default();
        assert!(drag.press(Point::new(150.0, 340.0), PROJECTOR));
        assert!(drag.is_dragging());
        assert_eq!(drag.start_pos, drag.last_pos);
    }

    #[test]
    fn press_off_marker_is_ignored() {
        let mut drag = ProjectorDrag::default();
        assert!(!drag.press(Point::new(150.0, 200.0), PROJECTOR));
        assert!(!drag.press(Point::new(210.0, 250.0), PROJECTOR));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn update_without_press_does_nothing() {
        let mut drag = ProjectorDrag::default();
        assert_eq!(drag.update(Point::new(200.0, 200.0), &WorkArea::default()), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn update_follows_pointer_inside_area() {
        let mut drag = ProjectorDrag::default();
        drag.press(PROJECTOR, PROJECTOR);
        let pos = drag.update(Point::new(260.0, 250.0), &WorkArea::default());
        assert_eq!(pos, Some(Point::new(260.0, 250.0)));
        assert_eq!(drag.total_offset(), Some(Vec2::new(110.0, 0.0)));
    }

    #[test]
    fn update_clamps_each_axis() {
        let area = WorkArea::default();
        let mut drag = ProjectorDrag::default();
        drag.press(PROJECTOR, PROJECTOR);

        assert_eq!(
            drag.update(Point::new(0.0, 250.0), &area),
            Some(Point::new(60.0, 250.0))
        );
        assert_eq!(
            drag.update(Point::new(700.0, 900.0), &area),
            Some(Point::new(350.0, 440.0))
        );
        assert_eq!(
            drag.update(Point::new(200.0, -5.0), &area),
            Some(Point::new(200.0, 60.0))
        );
    }

    #[test]
    fn end_resets_state() {
        let mut drag = ProjectorDrag::default();
        drag.press(PROJECTOR, PROJECTOR);
        drag.update(Point::new(200.0, 200.0), &WorkArea::default());
        drag.end();
        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());

        // Ending twice is harmless.
        drag.end();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn work_area_contains_edges() {
        let area = WorkArea::default();
        assert!(area.contains(Point::new(60.0, 440.0)));
        assert!(area.contains(Point::new(350.0, 60.0)));
        assert!(!area.contains(Point::new(350.1, 60.0)));
    }
}
