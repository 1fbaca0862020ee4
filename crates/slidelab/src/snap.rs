//! Snap operations: round rotations to the axes, or orient shapes radially
//! around a reference shape.

use log::{debug, warn};

use slidelab_core::{
    geometry::{add_angles, angle_between, nearly_equal, subtract_angles},
    shape::Shape,
};

use crate::{
    LayoutEngine, LayoutError,
    error::require_selection,
    measure::center_point,
};

/// Tolerance when deciding whether a rotation is a whole number of quarter
/// turns away from pointing at the reference.
const EPSILON: f32 = 1e-5;

/// Which way a shape points, relative to the line from the reference shape
/// to it.
///
/// [`Direction::Right`] means the shape's own "up" points straight away from
/// the reference; each following concrete direction is one more clockwise
/// quarter turn. Shapes without an intrinsic up can only be told apart up to
/// a half turn and report one of the two ambiguous families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
    LeftOrRight,
    UpOrDown,
    /// Not a whole number of quarter turns
    Unaligned,
}

impl Direction {
    /// Maps a count of clockwise quarter turns to a concrete direction.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Up,
        }
    }

    pub fn is_ambiguous(self) -> bool {
        matches!(self, Direction::LeftOrRight | Direction::UpOrDown)
    }

    /// Returns true if both directions may describe the same orientation.
    ///
    /// Equal directions are compatible, and an ambiguous family is
    /// compatible with both of its members.
    pub fn is_compatible(self, other: Direction) -> bool {
        use Direction::*;

        self == other
            || matches!(
                (self, other),
                (LeftOrRight, Left | Right)
                    | (Left | Right, LeftOrRight)
                    | (UpOrDown, Up | Down)
                    | (Up | Down, UpOrDown)
            )
    }

    /// Quarter turns to apply when every shape agrees on this direction.
    pub fn next_quarter_turns(self) -> u8 {
        match self {
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Up => 4,
            Direction::LeftOrRight => 5,
            Direction::UpOrDown => 6,
            Direction::Unaligned => 0,
        }
    }
}

fn snap_to_0_or_180(rotation: f32) -> f32 {
    if (90.0..270.0).contains(&rotation) {
        180.0
    } else {
        0.0
    }
}

fn snap_to_90_or_270(rotation: f32) -> f32 {
    if (0.0..180.0).contains(&rotation) {
        90.0
    } else {
        270.0
    }
}

impl LayoutEngine {
    /// Rounds rotations so that every shape stands upright.
    ///
    /// Tall shapes snap to 0° or 180°, wide ones to 90° or 270°, so the long
    /// side ends up vertical.
    pub fn snap_vertical<S: Shape>(&self, shapes: &mut [S]) {
        for shape in shapes.iter_mut() {
            let rotation = shape.rotation().rem_euclid(360.0);
            let snapped = if shape.is_tall() {
                snap_to_0_or_180(rotation)
            } else {
                snap_to_90_or_270(rotation)
            };
            shape.set_rotation(snapped);
        }
    }

    /// Rounds rotations so that every shape lies flat.
    ///
    /// Tall shapes snap to 90° or 270°, wide ones to 0° or 180°.
    pub fn snap_horizontal<S: Shape>(&self, shapes: &mut [S]) {
        for shape in shapes.iter_mut() {
            let rotation = shape.rotation().rem_euclid(360.0);
            let snapped = if shape.is_tall() {
                snap_to_90_or_270(rotation)
            } else {
                snap_to_0_or_180(rotation)
            };
            shape.set_rotation(snapped);
        }
    }

    /// Turns every shape to point away from the first shape.
    ///
    /// When all shapes already point the same way relative to the first
    /// shape, they are all turned a further quarter turn in that sense, so
    /// repeated calls cycle through the four orientations. Otherwise every
    /// shape is reset to point straight away.
    ///
    /// Shapes whose center coincides with the first shape's keep their
    /// rotation.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn snap_away<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        require_selection(shapes, 2)?;

        let (reference, others) = shapes.split_at_mut(1);
        let origin = center_point(&reference[0]);
        let bearings: Vec<f32> = others
            .iter()
            .map(|shape| angle_between(origin, shape.center()))
            .collect();

        let mut consistent = true;
        let mut last: Option<Direction> = None;
        for (shape, &bearing) in others.iter().zip(&bearings) {
            let direction = self.direction_of(shape, bearing);
            let previous = *last.get_or_insert(direction);
            if !previous.is_compatible(direction) {
                consistent = false;
                break;
            }
            if !direction.is_ambiguous() {
                last = Some(direction);
            }
        }

        let quarter_turns = match last {
            Some(direction) if consistent => direction.next_quarter_turns(),
            _ => 0,
        };
        debug!(consistent, last:?, quarter_turns; "Snapping away from first shape");

        let turn = f32::from(quarter_turns) * 90.0;
        for (offset, (shape, &bearing)) in others.iter_mut().zip(&bearings).enumerate() {
            if !bearing.is_finite() {
                warn!(index = offset + 1; "Shape is centered on the reference, rotation left unchanged");
                continue;
            }

            let rotation = match self.up_angles().get(shape.kind()) {
                Some(up) => up + bearing + turn,
                None if shape.is_tall() => bearing + turn,
                None => bearing - 90.0 + turn,
            };
            shape.set_rotation(rotation.rem_euclid(360.0));
        }

        Ok(())
    }

    /// Classifies how `shape` is turned relative to `bearing`, the direction
    /// from the reference shape to it.
    fn direction_of<S: Shape>(&self, shape: &S, bearing: f32) -> Direction {
        let intrinsic_up = self.up_angles().get(shape.kind());
        let up = intrinsic_up.unwrap_or(if shape.is_tall() { 0.0 } else { 90.0 });

        let pointing_away = add_angles(bearing, up);
        let phase = subtract_angles(shape.rotation(), pointing_away) / 90.0;
        let rounded = phase.round();
        if !nearly_equal(phase, rounded, EPSILON) {
            return Direction::Unaligned;
        }

        let direction = Direction::from_quarter_turns(rounded as i32);
        match (intrinsic_up, direction) {
            (Some(_), direction) => direction,
            (None, Direction::Left | Direction::Right) => Direction::LeftOrRight,
            (None, _) => Direction::UpOrDown,
        }
    }
}
