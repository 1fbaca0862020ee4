//! Geometric primitives for slide layout.
//!
//! This module provides the value types the layout engine computes with:
//!
//! - [`Point`] - A 2D coordinate in slide space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//! - [`Insets`] - Spacing values for four sides (used for grid margins)
//! - [`Silhouette`] - The four extreme points of a shape's visible outline
//!
//! It also hosts the angle helpers shared by the snapping algorithms
//! ([`angle_between`], [`add_angles`], [`subtract_angles`], [`nearly_equal`]).
//!
//! # Coordinate System
//!
//! Slides use the usual screen convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the slide at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//! - **Rotation**: Degrees, clockwise, `0` meaning upright

/// A 2D point representing a position in slide coordinate space.
///
/// # Examples
///
/// ```
/// # use slidelab_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Rotates this point clockwise around `pivot` by `degrees`.
    ///
    /// With Y growing downward, a positive angle turns the point clockwise
    /// on screen, matching how slide shapes are rotated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slidelab_core::geometry::Point;
    /// let pivot = Point::new(0.0, 0.0);
    /// let p = Point::new(10.0, 0.0).rotate_around(pivot, 90.0);
    /// assert!((p.x() - 0.0).abs() < 1e-4);
    /// assert!((p.y() - 10.0).abs() < 1e-4);
    /// ```
    pub fn rotate_around(self, pivot: Point, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self {
            x: pivot.x + dx * cos - dy * sin,
            y: pivot.y + dx * sin + dy * cos,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if the size is taller than it is wide
    pub fn is_tall(self) -> bool {
        self.height > self.width
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the four corners in clockwise order starting at the top-left
    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Maps a point given in unit coordinates (`0..=1` on both axes) into
    /// these bounds.
    pub fn lerp(self, unit: Point) -> Point {
        Point::new(
            self.min_x + unit.x * self.width(),
            self.min_y + unit.y * self.height(),
        )
    }
}

/// Represents spacing around an element with potentially different values
/// for each side.
///
/// The layout engine uses insets as the margins between grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns a new Insets with the specified top value
    pub fn with_top(self, top: f32) -> Self {
        Self { top, ..self }
    }

    /// Returns a new Insets with the specified right value
    pub fn with_right(self, right: f32) -> Self {
        Self { right, ..self }
    }

    /// Returns a new Insets with the specified bottom value
    pub fn with_bottom(self, bottom: f32) -> Self {
        Self { bottom, ..self }
    }

    /// Returns a new Insets with the specified left value
    pub fn with_left(self, left: f32) -> Self {
        Self { left, ..self }
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// The extreme points of a shape's visible outline.
///
/// A silhouette is never stored; it is derived on demand from a shape's
/// current placement. For shapes that fill their bounding box it is taken
/// from the rotated box corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Silhouette {
    leftmost: Point,
    topmost: Point,
    rightmost: Point,
    bottommost: Point,
}

impl Silhouette {
    pub fn new(leftmost: Point, topmost: Point, rightmost: Point, bottommost: Point) -> Self {
        Self {
            leftmost,
            topmost,
            rightmost,
            bottommost,
        }
    }

    /// Builds a silhouette from the extremes of a set of outline vertices.
    ///
    /// Ties keep the first vertex encountered. Returns `None` for an empty
    /// iterator.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut vertices = vertices.into_iter();
        let first = vertices.next()?;
        let mut silhouette = Self::new(first, first, first, first);

        for p in vertices {
            if p.x < silhouette.leftmost.x {
                silhouette.leftmost = p;
            }
            if p.y < silhouette.topmost.y {
                silhouette.topmost = p;
            }
            if p.x > silhouette.rightmost.x {
                silhouette.rightmost = p;
            }
            if p.y > silhouette.bottommost.y {
                silhouette.bottommost = p;
            }
        }

        Some(silhouette)
    }

    /// Silhouette of `bounds` rotated clockwise about its center.
    pub fn of_rotated_bounds(bounds: Bounds, rotation: f32) -> Self {
        let center = bounds.center();
        let corners = bounds
            .corners()
            .map(|corner| corner.rotate_around(center, rotation));

        Self::from_vertices(corners).unwrap_or_else(|| Self::new(center, center, center, center))
    }

    pub fn leftmost(self) -> Point {
        self.leftmost
    }

    pub fn topmost(self) -> Point {
        self.topmost
    }

    pub fn rightmost(self) -> Point {
        self.rightmost
    }

    pub fn bottommost(self) -> Point {
        self.bottommost
    }

    /// Horizontal extent of the outline
    pub fn width(self) -> f32 {
        self.rightmost.x - self.leftmost.x
    }

    /// Vertical extent of the outline
    pub fn height(self) -> f32 {
        self.bottommost.y - self.topmost.y
    }

    /// Axis-aligned box enclosing the outline
    pub fn to_bounds(self) -> Bounds {
        Bounds {
            min_x: self.leftmost.x,
            min_y: self.topmost.y,
            max_x: self.rightmost.x,
            max_y: self.bottommost.y,
        }
    }
}

/// Bearing from `from` to `to` in degrees, clockwise from straight up.
///
/// The bearing is computed from a single-argument arctangent patched by the
/// sign of `Δx`: `90 + atan(Δy/Δx)` when `Δx > 0`, otherwise
/// `270 + atan(Δy/Δx)`. When `Δx == 0` the division yields an infinity and the
/// result is `180` for a point straight above and `360` for a point straight
/// below; coincident points yield `NaN`.
///
/// # Examples
///
/// ```
/// # use slidelab_core::geometry::{Point, angle_between};
/// let origin = Point::new(0.0, 0.0);
/// assert_eq!(angle_between(origin, Point::new(10.0, 0.0)), 90.0);
/// assert_eq!(angle_between(origin, Point::new(-10.0, 0.0)), 270.0);
/// ```
pub fn angle_between(from: Point, to: Point) -> f32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let angle = (dy / dx).atan().to_degrees();

    if dx > 0.0 { 90.0 + angle } else { 270.0 + angle }
}

/// Sums two angles modulo 360.
pub fn add_angles(a: f32, b: f32) -> f32 {
    (a + b) % 360.0
}

/// Subtracts `b` from `a`, wrapping negative results into `[0, 360)`.
pub fn subtract_angles(a: f32, b: f32) -> f32 {
    let diff = a - b;
    if diff < 0.0 { 360.0 + diff } else { diff }
}

/// Compares two floats with a relative tolerance.
///
/// Exactly equal values (including equal infinities) always compare equal.
/// When either value is zero, or both are vanishingly close to each other,
/// the absolute difference is compared against `epsilon`; otherwise the
/// difference relative to the magnitudes is.
pub fn nearly_equal(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f32::MIN_POSITIVE {
        return diff < epsilon;
    }

    diff / (a.abs() + b.abs()) < epsilon
}
