//! Adjoin operations: pack shapes edge to edge around the first shape.

use log::trace;

use slidelab_core::shape::Shape;

use crate::{
    LayoutEngine, LayoutError,
    error::require_selection,
    measure::{Axis, center_point},
};

impl LayoutEngine {
    /// Packs shapes into a row through the first shape.
    ///
    /// Shapes keep their left-to-right order. Those left of the first shape
    /// are pushed against it from the left, those right of it from the
    /// right, and every shape is vertically centered on the first shape.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn adjoin_horizontal<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        self.adjoin(shapes, Axis::Horizontal)
    }

    /// Packs shapes into a column through the first shape.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn adjoin_vertical<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        self.adjoin(shapes, Axis::Vertical)
    }

    fn adjoin<S: Shape>(&self, shapes: &mut [S], axis: Axis) -> Result<(), LayoutError> {
        require_selection(shapes, 2)?;

        let order = axis.sort(shapes);
        let Some(anchor_position) = order.iter().position(|&index| index == 0) else {
            return Ok(());
        };

        let anchor = self.extreme_points(&shapes[0]);
        let cross = axis.cross();
        let cross_center = cross.coordinate(center_point(&shapes[0]));

        // Walking away from the anchor, each neighbour's facing edge is
        // moved onto the running edge.
        let mut edge = axis.leading(anchor);
        for &index in order[..anchor_position].iter().rev() {
            let shape = &mut shapes[index];
            let silhouette = self.extreme_points(&*shape);
            let delta = edge - axis.trailing(silhouette);
            axis.shift(shape, delta);
            cross.shift(shape, cross_center - cross.coordinate(center_point(&*shape)));
            edge = axis.leading(silhouette) + delta;
            trace!(index, delta; "Adjoined before anchor");
        }

        let mut edge = axis.trailing(anchor);
        for &index in &order[anchor_position + 1..] {
            let shape = &mut shapes[index];
            let silhouette = self.extreme_points(&*shape);
            let delta = edge - axis.leading(silhouette);
            axis.shift(shape, delta);
            cross.shift(shape, cross_center - cross.coordinate(center_point(&*shape)));
            edge = axis.trailing(silhouette) + delta;
            trace!(index, delta; "Adjoined after anchor");
        }

        Ok(())
    }
}
