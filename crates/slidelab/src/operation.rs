//! Named operations and their dispatch.

use std::{fmt, str::FromStr};

use log::debug;

use slidelab_core::{document::SlideBounds, shape::Shape};

use crate::{LayoutEngine, LayoutError};

/// Every layout operation the engine offers, by name.
///
/// Names are kebab-case (`align-left`, `snap-away`, ...). Parsing a name
/// yields [`Operation::DistributeGrid`] with a single-cell grid; callers set
/// the real lengths afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AlignLeft,
    AlignRight,
    AlignTop,
    AlignBottom,
    AlignMiddle,
    AlignCenter,
    DistributeHorizontal,
    DistributeVertical,
    DistributeCenter,
    DistributeShapes,
    DistributeGrid { row_length: usize, col_length: usize },
    AdjoinHorizontal,
    AdjoinVertical,
    Swap,
    SnapVertical,
    SnapHorizontal,
    SnapAway,
    StretchLeft,
    StretchRight,
    StretchTop,
    StretchBottom,
}

impl Operation {
    /// Every operation, with a single-cell grid for [`Operation::DistributeGrid`].
    pub const ALL: &'static [Operation] = &[
        Operation::AlignLeft,
        Operation::AlignRight,
        Operation::AlignTop,
        Operation::AlignBottom,
        Operation::AlignMiddle,
        Operation::AlignCenter,
        Operation::DistributeHorizontal,
        Operation::DistributeVertical,
        Operation::DistributeCenter,
        Operation::DistributeShapes,
        Operation::DistributeGrid {
            row_length: 1,
            col_length: 1,
        },
        Operation::AdjoinHorizontal,
        Operation::AdjoinVertical,
        Operation::Swap,
        Operation::SnapVertical,
        Operation::SnapHorizontal,
        Operation::SnapAway,
        Operation::StretchLeft,
        Operation::StretchRight,
        Operation::StretchTop,
        Operation::StretchBottom,
    ];

    /// Returns the kebab-case name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::AlignLeft => "align-left",
            Operation::AlignRight => "align-right",
            Operation::AlignTop => "align-top",
            Operation::AlignBottom => "align-bottom",
            Operation::AlignMiddle => "align-middle",
            Operation::AlignCenter => "align-center",
            Operation::DistributeHorizontal => "distribute-horizontal",
            Operation::DistributeVertical => "distribute-vertical",
            Operation::DistributeCenter => "distribute-center",
            Operation::DistributeShapes => "distribute-shapes",
            Operation::DistributeGrid { .. } => "distribute-grid",
            Operation::AdjoinHorizontal => "adjoin-horizontal",
            Operation::AdjoinVertical => "adjoin-vertical",
            Operation::Swap => "swap",
            Operation::SnapVertical => "snap-vertical",
            Operation::SnapHorizontal => "snap-horizontal",
            Operation::SnapAway => "snap-away",
            Operation::StretchLeft => "stretch-left",
            Operation::StretchRight => "stretch-right",
            Operation::StretchTop => "stretch-top",
            Operation::StretchBottom => "stretch-bottom",
        }
    }
}

impl FromStr for Operation {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or("Unsupported operation")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of an operation that ran to completion.
///
/// Only stretch operations skip shapes; `skipped` lists their indices in
/// the input selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    skipped: Vec<usize>,
}

impl Outcome {
    /// An outcome where every shape was handled.
    pub fn complete() -> Self {
        Self::default()
    }

    pub fn with_skipped(skipped: Vec<usize>) -> Self {
        Self { skipped }
    }

    /// Indices of shapes left unchanged
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Converts a partial outcome into [`LayoutError::PartialFailure`].
    ///
    /// # Errors
    ///
    /// Returns `PartialFailure` when any shape was skipped.
    pub fn into_result(self) -> Result<(), LayoutError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(LayoutError::PartialFailure {
                skipped: self.skipped,
            })
        }
    }
}

impl LayoutEngine {
    /// Applies `operation` to `shapes` on a slide of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] when the operation
    /// needs a reference shape and fewer than two shapes are given. Nothing
    /// is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slidelab::{LayoutEngine, Operation};
    /// # use slidelab_core::{document::SlideBounds, shape::{Shape, ShapeKind, SlideShape}};
    /// let engine = LayoutEngine::default();
    /// let mut shapes = vec![
    ///     SlideShape::new(ShapeKind::Rectangle, 10.0, 0.0, 20.0, 20.0),
    ///     SlideShape::new(ShapeKind::Rectangle, 50.0, 40.0, 20.0, 20.0),
    /// ];
    ///
    /// let outcome = engine
    ///     .apply(Operation::AlignLeft, &mut shapes, SlideBounds::default())
    ///     .expect("two shapes are enough");
    /// assert!(outcome.is_complete());
    /// assert_eq!(shapes[1].left(), 10.0);
    /// ```
    pub fn apply<S: Shape>(
        &self,
        operation: Operation,
        shapes: &mut [S],
        slide: SlideBounds,
    ) -> Result<Outcome, LayoutError> {
        debug!(operation:% = operation, count = shapes.len(); "Applying operation");

        match operation {
            Operation::AlignLeft => self.align_left(shapes)?,
            Operation::AlignRight => self.align_right(shapes, slide.width())?,
            Operation::AlignTop => self.align_top(shapes)?,
            Operation::AlignBottom => self.align_bottom(shapes, slide.height())?,
            Operation::AlignMiddle => self.align_middle(shapes, slide.height())?,
            Operation::AlignCenter => self.align_center(shapes, slide.width(), slide.height())?,
            Operation::DistributeHorizontal => {
                self.distribute_horizontal(shapes, slide.width())?
            }
            Operation::DistributeVertical => self.distribute_vertical(shapes, slide.height())?,
            Operation::DistributeCenter => {
                self.distribute_center(shapes, slide.width(), slide.height())?
            }
            Operation::DistributeShapes => self.distribute_shapes(shapes)?,
            Operation::DistributeGrid {
                row_length,
                col_length,
            } => self.distribute_grid(shapes, row_length, col_length)?,
            Operation::AdjoinHorizontal => self.adjoin_horizontal(shapes)?,
            Operation::AdjoinVertical => self.adjoin_vertical(shapes)?,
            Operation::Swap => self.swap(shapes)?,
            Operation::SnapVertical => self.snap_vertical(shapes),
            Operation::SnapHorizontal => self.snap_horizontal(shapes),
            Operation::SnapAway => self.snap_away(shapes)?,
            Operation::StretchLeft => return self.stretch_left(shapes),
            Operation::StretchRight => return self.stretch_right(shapes),
            Operation::StretchTop => return self.stretch_top(shapes),
            Operation::StretchBottom => return self.stretch_bottom(shapes),
        }

        Ok(Outcome::complete())
    }
}
