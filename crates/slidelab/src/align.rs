//! Align operations.
//!
//! Edge alignment moves shapes by their visual extremes so that a rotated or
//! non-rectangular shape touches the target line with its outline, not its
//! bounding box. Middle and center alignment against a reference shape use
//! bounding-box centers instead.

use log::debug;

use slidelab_core::{geometry::Silhouette, shape::Shape};

use crate::{
    LayoutEngine, LayoutError,
    config::ReferenceMode,
    error::require_selection,
    measure::{Axis, center_point},
};

#[derive(Debug, Clone, Copy)]
enum Edge {
    Leading,
    Trailing,
}

impl LayoutEngine {
    /// Aligns left edges, to the slide's left edge or to the first shape's.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn align_left<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        self.align_edge(shapes, Axis::Horizontal, Edge::Leading, 0.0)
    }

    /// Aligns right edges, to the slide's right edge at `slide_width` or to
    /// the first shape's.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn align_right<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_width: f32,
    ) -> Result<(), LayoutError> {
        self.align_edge(shapes, Axis::Horizontal, Edge::Trailing, slide_width)
    }

    /// Aligns top edges.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn align_top<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        self.align_edge(shapes, Axis::Vertical, Edge::Leading, 0.0)
    }

    /// Aligns bottom edges, to `slide_height` or to the first shape's.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn align_bottom<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_height: f32,
    ) -> Result<(), LayoutError> {
        self.align_edge(shapes, Axis::Vertical, Edge::Trailing, slide_height)
    }

    /// Aligns vertical centers.
    ///
    /// Against the slide, the middle of each shape's visible outline is put
    /// on the horizontal centerline. Against the first shape, bounding-box
    /// centers are matched.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn align_middle<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_height: f32,
    ) -> Result<(), LayoutError> {
        self.align_centers(shapes, &[(Axis::Vertical, slide_height)])
    }

    /// Aligns centers on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn align_center<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_width: f32,
        slide_height: f32,
    ) -> Result<(), LayoutError> {
        self.align_centers(
            shapes,
            &[(Axis::Vertical, slide_height), (Axis::Horizontal, slide_width)],
        )
    }

    fn align_edge<S: Shape>(
        &self,
        shapes: &mut [S],
        axis: Axis,
        edge: Edge,
        slide_edge: f32,
    ) -> Result<(), LayoutError> {
        let edge_of = |silhouette: Silhouette| match edge {
            Edge::Leading => axis.leading(silhouette),
            Edge::Trailing => axis.trailing(silhouette),
        };

        match self.config().align_reference() {
            ReferenceMode::Slide => {
                debug!(axis:?, edge:?, position = slide_edge; "Aligning to slide");
                for shape in shapes.iter_mut() {
                    let current = edge_of(self.extreme_points(&*shape));
                    axis.shift(shape, slide_edge - current);
                }
            }
            ReferenceMode::FirstShape => {
                require_selection(shapes, 2)?;
                let (reference, others) = shapes.split_at_mut(1);
                let target = edge_of(self.extreme_points(&reference[0]));
                debug!(axis:?, edge:?, position = target; "Aligning to first shape");

                for shape in others {
                    let current = edge_of(self.extreme_points(&*shape));
                    axis.shift(shape, target - current);
                }
            }
        }

        Ok(())
    }

    fn align_centers<S: Shape>(
        &self,
        shapes: &mut [S],
        axes: &[(Axis, f32)],
    ) -> Result<(), LayoutError> {
        match self.config().align_reference() {
            ReferenceMode::Slide => {
                for shape in shapes.iter_mut() {
                    let silhouette = self.extreme_points(&*shape);
                    for &(axis, slide_extent) in axes {
                        let middle = axis.leading(silhouette) + axis.extent(silhouette) / 2.0;
                        axis.shift(shape, slide_extent / 2.0 - middle);
                    }
                }
            }
            ReferenceMode::FirstShape => {
                require_selection(shapes, 2)?;
                let (reference, others) = shapes.split_at_mut(1);
                let target = center_point(&reference[0]);

                for shape in others {
                    let center = center_point(&*shape);
                    for &(axis, _) in axes {
                        axis.shift(shape, axis.coordinate(target) - axis.coordinate(center));
                    }
                }
            }
        }

        Ok(())
    }
}
