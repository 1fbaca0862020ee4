//! Packed grid distribution.
//!
//! Shapes are assigned to cells in selection order. Columns are as wide as
//! their widest shape and rows as tall as their tallest, so cells are not
//! uniform. Shapes are centered in their cell, and the grid grows right and
//! down from the first shape's center.

use std::collections::BTreeMap;

use log::debug;

use slidelab_core::{geometry::Point, shape::Shape};

use crate::{LayoutEngine, LayoutError, config::GridAlignment};

/// Number of leading cells left empty in a short last row.
///
/// `row_length` is the number of cells per row. A full last row, or
/// [`GridAlignment::Left`], skips nothing; right alignment skips every empty
/// cell and center alignment half of them, rounded down.
///
/// # Examples
///
/// ```
/// # use slidelab::{config::GridAlignment, indices_to_skip};
/// assert_eq!(indices_to_skip(7, 3, GridAlignment::Center), 1);
/// assert_eq!(indices_to_skip(7, 3, GridAlignment::Right), 2);
/// assert_eq!(indices_to_skip(6, 3, GridAlignment::Right), 0);
/// ```
pub fn indices_to_skip(total: usize, row_length: usize, alignment: GridAlignment) -> usize {
    let row_length = row_length.max(1);
    let in_last_row = total % row_length;
    if in_last_row == 0 {
        return 0;
    }

    let empty = row_length - in_last_row;
    match alignment {
        GridAlignment::Left => 0,
        GridAlignment::Center => empty / 2,
        GridAlignment::Right => empty,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    row: usize,
    col: usize,
}

/// Fills rows left to right; the short last row starts `skip` cells in.
fn cells_by_row(count: usize, row_length: usize, skip: usize) -> Vec<Cell> {
    let last_row_start = count - count % row_length;

    (0..count)
        .map(|i| {
            let offset = if i >= last_row_start { skip } else { 0 };
            Cell {
                row: i / row_length,
                col: i % row_length + offset,
            }
        })
        .collect()
}

/// Fills rows left to right but leaves the last column mostly empty: only
/// `count - (row_length - 1) * col_length` shapes go there, after skipping
/// its first `skip` cells.
fn cells_by_col(count: usize, row_length: usize, col_length: usize, skip: usize) -> Vec<Cell> {
    let is_last_in_row = |index: usize| index % row_length == row_length - 1;

    let grid_size = (row_length as i128).saturating_mul(col_length as i128);
    let mut in_last_col = (col_length as i128)
        .saturating_sub(grid_size)
        .saturating_add(count as i128);
    let mut skip = skip;
    let mut index = 0;
    let mut cells = Vec::with_capacity(count);

    for _ in 0..count {
        if skip > 0 && is_last_in_row(index) {
            skip -= 1;
            index += 1;
        }

        if is_last_in_row(index) {
            if in_last_col <= 0 {
                index += 1;
            } else {
                in_last_col -= 1;
            }
        }

        cells.push(Cell {
            row: index / row_length,
            col: index % row_length,
        });
        index += 1;
    }

    cells
}

/// Distance between the centers of cell `0` and cell `to`.
///
/// `extents` holds the extent of every occupied cell; empty cells count as
/// zero but still contribute `margin`.
fn span(extents: &BTreeMap<usize, f32>, to: usize, margin: f32) -> f32 {
    if to == 0 {
        return 0.0;
    }

    let extent = |index: usize| extents.get(&index).copied().unwrap_or(0.0);
    let between: f32 = extents.range(1..to).map(|(_, extent)| extent).sum();

    to as f32 * margin + extent(0) / 2.0 + between + extent(to) / 2.0
}

impl LayoutEngine {
    /// Arranges shapes into a grid of `row_length` cells per row and
    /// `col_length` rows.
    ///
    /// Rows are filled in selection order. When more rows are requested than
    /// full rows would need, the grid is filled so that the ragged edge is
    /// the last column instead of the last row. The configured
    /// [`GridAlignment`] decides where the ragged edge's shapes sit, and the
    /// configured margins are inserted between cells. Zero lengths count as
    /// one.
    ///
    /// # Errors
    ///
    /// This operation accepts any selection; an empty one is left as is.
    pub fn distribute_grid<S: Shape>(
        &self,
        shapes: &mut [S],
        row_length: usize,
        col_length: usize,
    ) -> Result<(), LayoutError> {
        let count = shapes.len();
        if count == 0 {
            return Ok(());
        }

        let row_length = row_length.max(1);
        let col_length = col_length.max(1);
        let alignment = self.config().grid_alignment();
        let rows_when_full = count.div_ceil(row_length);
        let by_column = col_length > rows_when_full;

        let cells = if by_column {
            let skip = indices_to_skip(count, col_length, alignment);
            debug!(row_length, col_length, skip, alignment:%; "Distributing grid by column");
            cells_by_col(count, row_length, col_length, skip)
        } else {
            let skip = indices_to_skip(count, row_length, alignment);
            debug!(row_length, col_length, skip, alignment:%; "Distributing grid by row");
            cells_by_row(count, row_length, skip)
        };

        let mut col_widths = BTreeMap::new();
        let mut row_heights = BTreeMap::new();
        for (shape, cell) in shapes.iter().zip(&cells) {
            let silhouette = self.extreme_points(shape);
            let width = col_widths.entry(cell.col).or_insert(0.0f32);
            *width = width.max(silhouette.width());
            let height = row_heights.entry(cell.row).or_insert(0.0f32);
            *height = height.max(silhouette.height());
        }

        let margins = self.config().margins();
        let origin = shapes[0].center();

        for (shape, cell) in shapes.iter_mut().zip(&cells) {
            let target = origin.add_point(Point::new(
                span(&col_widths, cell.col, margins.horizontal_sum()),
                span(&row_heights, cell.row, margins.vertical_sum()),
            ));
            let center = shape.center();
            shape.increment_left(target.x() - center.x());
            shape.increment_top(target.y() - center.y());
        }

        Ok(())
    }
}
