//! Rotation-aware measurement of shapes.
//!
//! Layout operations never look at a shape's `width`/`height` fields
//! directly when placing it. They measure its [`Silhouette`], the extreme
//! points of what is actually visible on the slide after rotation.

use std::cmp::Ordering;

use log::trace;

use slidelab_core::{
    document::SlideBounds,
    geometry::{Point, Silhouette},
    shape::Shape,
};

use crate::LayoutEngine;

impl LayoutEngine {
    /// Returns the extreme points of `shape`'s visible outline.
    ///
    /// Kinds that fill their bounding box, have no vertices, or cannot be
    /// traced are measured by their rotated bounding box. Every other kind is
    /// handed to the outline provider, falling back to the rotated bounding
    /// box when the provider declines.
    pub fn extreme_points<S: Shape + ?Sized>(&self, shape: &S) -> Silhouette {
        let placement = shape.placement();
        let fallback = || Silhouette::of_rotated_bounds(placement.bounds(), placement.rotation());

        if !placement.kind().outline_support().is_traceable() {
            return fallback();
        }

        match self.outline_provider().outline(&placement) {
            Some(silhouette) => silhouette,
            None => {
                trace!(kind:% = placement.kind(); "Outline declined, using bounding box");
                fallback()
            }
        }
    }

    /// Horizontal extent of the visible outline.
    pub fn real_width<S: Shape + ?Sized>(&self, shape: &S) -> f32 {
        self.extreme_points(shape).width()
    }

    /// Vertical extent of the visible outline.
    pub fn real_height<S: Shape + ?Sized>(&self, shape: &S) -> f32 {
        self.extreme_points(shape).height()
    }
}

/// Bounding-box center of `shape`; rotation does not move it.
pub fn center_point<S: Shape + ?Sized>(shape: &S) -> Point {
    shape.center()
}

/// Indices of `shapes` ordered by ascending `left`.
///
/// The sort is stable, so shapes sharing a left edge keep their selection
/// order.
pub fn sort_by_left<S: Shape>(shapes: &[S]) -> Vec<usize> {
    sorted_indices(shapes, |s| s.left())
}

/// Indices of `shapes` ordered by ascending `top`; stable.
pub fn sort_by_top<S: Shape>(shapes: &[S]) -> Vec<usize> {
    sorted_indices(shapes, |s| s.top())
}

fn sorted_indices<S: Shape>(shapes: &[S], key: impl Fn(&S) -> f32) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..shapes.len()).collect();
    indices.sort_by(|&a, &b| {
        key(&shapes[a])
            .partial_cmp(&key(&shapes[b]))
            .unwrap_or(Ordering::Equal)
    });
    indices
}

/// One of the two slide axes, used to write each axis-symmetric operation
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub(crate) fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Left edge or top edge of the silhouette
    pub(crate) fn leading(self, silhouette: Silhouette) -> f32 {
        match self {
            Axis::Horizontal => silhouette.leftmost().x(),
            Axis::Vertical => silhouette.topmost().y(),
        }
    }

    /// Right edge or bottom edge of the silhouette
    pub(crate) fn trailing(self, silhouette: Silhouette) -> f32 {
        match self {
            Axis::Horizontal => silhouette.rightmost().x(),
            Axis::Vertical => silhouette.bottommost().y(),
        }
    }

    pub(crate) fn extent(self, silhouette: Silhouette) -> f32 {
        match self {
            Axis::Horizontal => silhouette.width(),
            Axis::Vertical => silhouette.height(),
        }
    }

    pub(crate) fn coordinate(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x(),
            Axis::Vertical => point.y(),
        }
    }

    pub(crate) fn slide_extent(self, slide: SlideBounds) -> f32 {
        match self {
            Axis::Horizontal => slide.width(),
            Axis::Vertical => slide.height(),
        }
    }

    /// Moves `shape` by `delta` along this axis.
    pub(crate) fn shift<S: Shape + ?Sized>(self, shape: &mut S, delta: f32) {
        match self {
            Axis::Horizontal => shape.increment_left(delta),
            Axis::Vertical => shape.increment_top(delta),
        }
    }

    /// Indices of `shapes` sorted along this axis.
    pub(crate) fn sort<S: Shape>(self, shapes: &[S]) -> Vec<usize> {
        match self {
            Axis::Horizontal => sort_by_left(shapes),
            Axis::Vertical => sort_by_top(shapes),
        }
    }
}
