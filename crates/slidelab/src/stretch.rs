//! Stretch operations: move one edge of every shape onto the first shape's.
//!
//! Stretching works on the unrotated bounding box. The opposite edge stays
//! where it is, so a shape whose opposite edge lies beyond the reference
//! edge would be turned inside out; such shapes are skipped.

use log::{debug, warn};

use slidelab_core::{geometry::Bounds, shape::Shape};

use crate::{LayoutEngine, LayoutError, Outcome, error::require_selection};

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Stretches `shape` so this side meets the same side of `reference`.
    ///
    /// Returns false, leaving the shape untouched, when that would give it a
    /// negative size.
    fn stretch<S: Shape + ?Sized>(self, shape: &mut S, reference: Bounds) -> bool {
        match self {
            Side::Left => {
                if shape.right() < reference.min_x() {
                    return false;
                }
                shape.set_width(shape.width() + shape.left() - reference.min_x());
                shape.set_left(reference.min_x());
            }
            Side::Right => {
                if shape.left() > reference.max_x() {
                    return false;
                }
                shape.set_width(shape.width() + reference.max_x() - shape.right());
            }
            Side::Top => {
                if shape.bottom() < reference.min_y() {
                    return false;
                }
                shape.set_height(shape.height() + shape.top() - reference.min_y());
                shape.set_top(reference.min_y());
            }
            Side::Bottom => {
                if shape.top() > reference.max_y() {
                    return false;
                }
                shape.set_height(shape.height() + reference.max_y() - shape.bottom());
            }
        }
        true
    }
}

impl LayoutEngine {
    /// Moves every shape's left edge onto the first shape's left edge,
    /// keeping right edges in place.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes. Shapes lying entirely left of the reference edge are skipped
    /// and listed in the returned [`Outcome`].
    pub fn stretch_left<S: Shape>(&self, shapes: &mut [S]) -> Result<Outcome, LayoutError> {
        self.stretch(shapes, Side::Left)
    }

    /// Moves every shape's right edge onto the first shape's right edge.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn stretch_right<S: Shape>(&self, shapes: &mut [S]) -> Result<Outcome, LayoutError> {
        self.stretch(shapes, Side::Right)
    }

    /// Moves every shape's top edge onto the first shape's top edge.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn stretch_top<S: Shape>(&self, shapes: &mut [S]) -> Result<Outcome, LayoutError> {
        self.stretch(shapes, Side::Top)
    }

    /// Moves every shape's bottom edge onto the first shape's bottom edge.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn stretch_bottom<S: Shape>(&self, shapes: &mut [S]) -> Result<Outcome, LayoutError> {
        self.stretch(shapes, Side::Bottom)
    }

    fn stretch<S: Shape>(&self, shapes: &mut [S], side: Side) -> Result<Outcome, LayoutError> {
        require_selection(shapes, 2)?;

        let (reference, others) = shapes.split_at_mut(1);
        let reference = reference[0].bounds();
        debug!(side:?, reference:?; "Stretching to first shape");

        let mut skipped = Vec::new();
        for (offset, shape) in others.iter_mut().enumerate() {
            if !side.stretch(shape, reference) {
                skipped.push(offset + 1);
            }
        }

        if !skipped.is_empty() {
            warn!(side:?, skipped:?; "Some shapes could not be stretched");
        }

        Ok(Outcome::with_skipped(skipped))
    }
}
