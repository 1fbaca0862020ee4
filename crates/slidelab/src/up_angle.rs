//! Intrinsic "up" angles of arrow-like shape kinds.

use indexmap::IndexMap;
use log::warn;

use slidelab_core::shape::ShapeKind;

use crate::config::SnapConfig;

const LEFT: f32 = 90.0;
const RIGHT: f32 = 270.0;
const UP: f32 = 0.0;
const DOWN: f32 = 180.0;

/// Rotation, in degrees clockwise, that turns a shape kind so that it points
/// straight up.
///
/// Kinds without an entry have no intrinsic direction; snap-away then guesses
/// from the shape's aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct UpAngleTable {
    angles: IndexMap<ShapeKind, f32>,
}

impl UpAngleTable {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            angles: IndexMap::new(),
        }
    }

    /// The built-in table covering the preset arrow kinds.
    pub fn standard() -> Self {
        use ShapeKind::*;

        let entries = [
            (LeftArrow, LEFT),
            (LeftRightArrow, LEFT),
            (LeftArrowCallout, LEFT),
            (LeftRightArrowCallout, LEFT),
            (CurvedLeftArrow, LEFT),
            (RightArrow, RIGHT),
            (BentArrow, RIGHT),
            (StripedRightArrow, RIGHT),
            (NotchedRightArrow, RIGHT),
            (Pentagon, RIGHT),
            (Chevron, RIGHT),
            (RightArrowCallout, RIGHT),
            (CurvedRightArrow, RIGHT),
            (UpArrow, UP),
            (BentUpArrow, UP),
            (UpDownArrow, UP),
            (LeftRightUpArrow, UP),
            (LeftUpArrow, UP),
            (UpArrowCallout, UP),
            (CurvedUpArrow, UP),
            (DownArrow, DOWN),
            (UTurnArrow, DOWN),
            (DownArrowCallout, DOWN),
            (CurvedDownArrow, DOWN),
            (CircularArrow, DOWN),
        ];

        Self {
            angles: entries.into_iter().collect(),
        }
    }

    /// Returns the standard table extended with the overrides in `config`.
    ///
    /// Keys that do not name a known shape kind are reported and ignored.
    pub fn from_config(config: &SnapConfig) -> Self {
        let mut table = Self::standard();
        for (name, angle) in config.up_angles() {
            match name.parse::<ShapeKind>() {
                Ok(kind) => table.insert(kind, *angle),
                Err(err) => warn!(kind = name.as_str(), err; "Ignoring up-angle override"),
            }
        }
        table
    }

    /// Returns the up angle of `kind`, if it has one.
    pub fn get(&self, kind: ShapeKind) -> Option<f32> {
        self.angles.get(&kind).copied()
    }

    /// Adds or replaces the entry for `kind`; the angle is normalized into
    /// `[0, 360)`.
    pub fn insert(&mut self, kind: ShapeKind, angle: f32) {
        self.angles.insert(kind, angle.rem_euclid(360.0));
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

impl Default for UpAngleTable {
    fn default() -> Self {
        Self::standard()
    }
}
