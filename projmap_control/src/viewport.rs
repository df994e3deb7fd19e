// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Model-space extent of the demo scene.
pub const MODEL_BOUNDS: Rect = Rect::new(0.0, 0.0, 800.0, 500.0);

/// Maps between device pixels and scene model coordinates.
///
/// The model bounds are fitted into the view rect with a uniform scale and
/// centred on both axes, so the whole scene stays visible whatever the view's
/// aspect ratio (SVG's `xMidYMid meet`). Pointer positions from the host are
/// converted with [`SceneViewport::view_to_model_point`] before they reach the
/// session.
#[derive(Clone, Debug)]
pub struct SceneViewport {
    view_rect: Rect,
    model_bounds: Rect,
    zoom: f64,
    model_to_view: Affine,
    view_to_model: Affine,
}

impl SceneViewport {
    /// Creates a viewport fitting [`MODEL_BOUNDS`] into `view_rect`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_model_bounds(view_rect, MODEL_BOUNDS)
    }

    /// Creates a viewport fitting `model_bounds` into `view_rect`.
    #[must_use]
    pub fn with_model_bounds(view_rect: Rect, model_bounds: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            model_bounds,
            zoom: 1.0,
            model_to_view: Affine::IDENTITY,
            view_to_model: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle, for example after a window resize.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns the fitted model bounds.
    #[must_use]
    pub fn model_bounds(&self) -> Rect {
        self.model_bounds
    }

    /// Device pixels per model unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Converts a device-space point into model coordinates.
    #[must_use]
    pub fn view_to_model_point(&self, pt: Point) -> Point {
        self.view_to_model * pt
    }

    /// Converts a model-space point into device coordinates.
    #[must_use]
    pub fn model_to_view_point(&self, pt: Point) -> Point {
        self.model_to_view * pt
    }

    /// Converts a model-space rectangle into device coordinates.
    #[must_use]
    pub fn model_to_view_rect(&self, rect: Rect) -> Rect {
        // Uniform positive scale plus translation keeps rectangles axis-aligned.
        Rect::from_points(
            self.model_to_view * rect.origin(),
            self.model_to_view * Point::new(rect.x1, rect.y1),
        )
    }

    /// The transform from model to device coordinates.
    #[must_use]
    pub fn model_to_view(&self) -> Affine {
        self.model_to_view
    }

    fn rebuild_transforms(&mut self) {
        let model = self.model_bounds;
        let view = self.view_rect;
        if model.width() <= 0.0
            || model.height() <= 0.0
            || view.width() <= 0.0
            || view.height() <= 0.0
        {
            self.zoom = 1.0;
            self.model_to_view = Affine::IDENTITY;
            self.view_to_model = Affine::IDENTITY;
            return;
        }

        let zoom = (view.width() / model.width()).min(view.height() / model.height());
        let pan: Vec2 = view.center().to_vec2() - model.center().to_vec2() * zoom;
        self.zoom = zoom;
        self.model_to_view = Affine::translate(pan) * Affine::scale(zoom);
        self.view_to_model = self.model_to_view.inverse();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{MODEL_BOUNDS, SceneViewport};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn identical_view_is_identity() {
        let vp = SceneViewport::new(MODEL_BOUNDS);
        assert_eq!(vp.zoom(), 1.0);
        assert!(close(
            vp.view_to_model_point(Point::new(150.0, 250.0)),
            Point::new(150.0, 250.0)
        ));
    }

    #[test]
    fn wide_view_letterboxes_horizontally() {
        // Twice as wide as the scene's aspect ratio: height limits the zoom.
        let vp = SceneViewport::new(Rect::new(0.0, 0.0, 1600.0, 500.0));
        assert_eq!(vp.zoom(), 1.0);
        // The scene is centred, leaving 400px on each side.
        assert!(close(
            vp.view_to_model_point(Point::new(400.0, 0.0)),
            Point::new(0.0, 0.0)
        ));
        assert!(close(
            vp.model_to_view_point(Point::new(800.0, 500.0)),
            Point::new(1200.0, 500.0)
        ));
    }

    #[test]
    fn offset_and_scaled_view_roundtrips() {
        let vp = SceneViewport::new(Rect::new(100.0, 50.0, 500.0, 300.0));
        assert!((vp.zoom() - 0.5).abs() < 1e-12);

        let model = Point::new(520.0, 130.0);
        let view = vp.model_to_view_point(model);
        assert!(close(view, Point::new(360.0, 115.0)));
        assert!(close(vp.view_to_model_point(view), model));

        let rect = vp.model_to_view_rect(Rect::new(0.0, 0.0, 800.0, 500.0));
        assert_eq!(rect, Rect::new(100.0, 50.0, 500.0, 300.0));
    }

    #[test]
    fn resize_rebuilds_transforms() {
        let mut vp = SceneViewport::new(MODEL_BOUNDS);
        vp.set_view_rect(Rect::new(0.0, 0.0, 400.0, 250.0));
        assert!((vp.zoom() - 0.5).abs() < 1e-12);
        assert!(close(
            vp.view_to_model_point(Point::new(200.0, 125.0)),
            Point::new(400.0, 250.0)
        ));
    }

    #[test]
    fn degenerate_view_falls_back_to_identity() {
        let vp = SceneViewport::new(Rect::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(vp.zoom(), 1.0);
        assert!(close(
            vp.view_to_model_point(Point::new(10.0, 10.0)),
            Point::new(10.0, 10.0)
        ));
    }
}
