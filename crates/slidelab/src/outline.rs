//! Outline providers: exact silhouettes for shapes whose outline is not
//! their bounding box.
//!
//! The engine only consults a provider for kinds classified as
//! [`OutlineSupport::Traceable`](slidelab_core::shape::OutlineSupport). A
//! provider that cannot trace a placement returns `None` and the engine
//! falls back to the rotated bounding box.

use std::fmt;

use indexmap::IndexMap;

use slidelab_core::{
    geometry::{Point, Silhouette},
    shape::{Placement, ShapeKind},
};

/// Source of exact outline extremes.
///
/// Implementations must not panic; any failure is reported as `None`.
pub trait OutlineProvider: fmt::Debug {
    /// Returns the silhouette of the shape at `placement`, or `None` to
    /// request the bounding-box fallback.
    fn outline(&self, placement: &Placement) -> Option<Silhouette>;
}

/// Provider that never traces, so every shape is measured by its rotated
/// bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxOutline;

impl OutlineProvider for BoundingBoxOutline {
    fn outline(&self, _placement: &Placement) -> Option<Silhouette> {
        None
    }
}

/// Traces polygonal kinds from their vertices.
///
/// Vertices are stored in unit coordinates, `(0, 0)` being the top-left and
/// `(1, 1)` the bottom-right corner of the unrotated bounding box. Adjustment
/// handles are not modelled; every kind uses its default proportions.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexOutline {
    vertices: IndexMap<ShapeKind, Vec<Point>>,
}

impl VertexOutline {
    /// Creates a provider that knows no kinds.
    pub fn empty() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    /// Creates a provider with the built-in polygon table.
    pub fn standard() -> Self {
        let p = Point::new;
        let mut provider = Self::empty();

        provider.register(
            ShapeKind::Diamond,
            [p(0.5, 0.0), p(1.0, 0.5), p(0.5, 1.0), p(0.0, 0.5)],
        );
        provider.register(
            ShapeKind::IsoscelesTriangle,
            [p(0.5, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
        );
        provider.register(
            ShapeKind::RightTriangle,
            [p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
        );
        provider.register(
            ShapeKind::Parallelogram,
            [p(0.25, 0.0), p(1.0, 0.0), p(0.75, 1.0), p(0.0, 1.0)],
        );
        provider.register(
            ShapeKind::Trapezoid,
            [p(0.25, 0.0), p(0.75, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
        );
        provider.register(
            ShapeKind::Hexagon,
            [
                p(0.25, 0.0),
                p(0.75, 0.0),
                p(1.0, 0.5),
                p(0.75, 1.0),
                p(0.25, 1.0),
                p(0.0, 0.5),
            ],
        );
        provider.register(
            ShapeKind::Pentagon,
            [p(0.0, 0.0), p(0.75, 0.0), p(1.0, 0.5), p(0.75, 1.0), p(0.0, 1.0)],
        );
        provider.register(
            ShapeKind::Chevron,
            [
                p(0.0, 0.0),
                p(0.75, 0.0),
                p(1.0, 0.5),
                p(0.75, 1.0),
                p(0.0, 1.0),
                p(0.25, 0.5),
            ],
        );
        provider.register(
            ShapeKind::RightArrow,
            [
                p(0.0, 0.25),
                p(0.5, 0.25),
                p(0.5, 0.0),
                p(1.0, 0.5),
                p(0.5, 1.0),
                p(0.5, 0.75),
                p(0.0, 0.75),
            ],
        );
        provider.register(
            ShapeKind::LeftArrow,
            [
                p(1.0, 0.25),
                p(0.5, 0.25),
                p(0.5, 0.0),
                p(0.0, 0.5),
                p(0.5, 1.0),
                p(0.5, 0.75),
                p(1.0, 0.75),
            ],
        );
        provider.register(
            ShapeKind::UpArrow,
            [
                p(0.25, 1.0),
                p(0.25, 0.5),
                p(0.0, 0.5),
                p(0.5, 0.0),
                p(1.0, 0.5),
                p(0.75, 0.5),
                p(0.75, 1.0),
            ],
        );
        provider.register(
            ShapeKind::DownArrow,
            [
                p(0.25, 0.0),
                p(0.25, 0.5),
                p(0.0, 0.5),
                p(0.5, 1.0),
                p(1.0, 0.5),
                p(0.75, 0.5),
                p(0.75, 0.0),
            ],
        );

        provider
    }

    /// Returns the provider with `vertices` registered for `kind`.
    pub fn with_vertices(mut self, kind: ShapeKind, vertices: Vec<Point>) -> Self {
        self.register(kind, vertices);
        self
    }

    /// Returns true if `kind` can be traced.
    pub fn supports(&self, kind: ShapeKind) -> bool {
        self.vertices.contains_key(&kind)
    }

    fn register(&mut self, kind: ShapeKind, vertices: impl IntoIterator<Item = Point>) {
        self.vertices.insert(kind, vertices.into_iter().collect());
    }
}

impl Default for VertexOutline {
    fn default() -> Self {
        Self::standard()
    }
}

impl OutlineProvider for VertexOutline {
    fn outline(&self, placement: &Placement) -> Option<Silhouette> {
        let unit_vertices = self.vertices.get(&placement.kind())?;
        let bounds = placement.bounds();
        let center = bounds.center();

        Silhouette::from_vertices(
            unit_vertices
                .iter()
                .map(|unit| bounds.lerp(*unit).rotate_around(center, placement.rotation())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidelab_core::geometry::{Bounds, Size};

    fn placement(kind: ShapeKind, rotation: f32) -> Placement {
        Placement::new(
            Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 50.0)),
            rotation,
            kind,
        )
    }

    #[test]
    fn test_bounding_box_outline_declines() {
        assert!(
            BoundingBoxOutline
                .outline(&placement(ShapeKind::Diamond, 0.0))
                .is_none()
        );
    }

    #[test]
    fn test_unknown_kind_is_declined() {
        let provider = VertexOutline::standard();
        assert!(!provider.supports(ShapeKind::LightningBolt));
        assert!(
            provider
                .outline(&placement(ShapeKind::LightningBolt, 0.0))
                .is_none()
        );
    }

    #[test]
    fn test_diamond_extremes_are_edge_midpoints() {
        let silhouette = VertexOutline::standard()
            .outline(&placement(ShapeKind::Diamond, 0.0))
            .expect("diamond is traceable");

        assert_eq!(silhouette.leftmost(), Point::new(0.0, 25.0));
        assert_eq!(silhouette.topmost(), Point::new(50.0, 0.0));
        assert_eq!(silhouette.rightmost(), Point::new(100.0, 25.0));
        assert_eq!(silhouette.bottommost(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_rotated_diamond_is_narrower_than_its_box() {
        let silhouette = VertexOutline::standard()
            .outline(&placement(ShapeKind::Diamond, 90.0))
            .expect("diamond is traceable");

        // Rotating a 100x50 diamond a quarter turn swaps its extents.
        assert!((silhouette.width() - 50.0).abs() < 1e-3);
        assert!((silhouette.height() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_with_vertices_registers_custom_kind() {
        let provider = VertexOutline::empty().with_vertices(
            ShapeKind::LightningBolt,
            vec![Point::new(0.5, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 0.5)],
        );

        let silhouette = provider
            .outline(&placement(ShapeKind::LightningBolt, 0.0))
            .expect("registered kind is traceable");
        assert_eq!(silhouette.to_bounds().max_y(), 50.0);
        assert_eq!(silhouette.leftmost(), Point::new(0.0, 25.0));
    }
}
