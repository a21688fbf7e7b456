/*
path_check.rs

Copyright 2025 Hervé Quatremain

This file is part of Tenpair.

Tenpair is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tenpair is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tenpair. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Verify that two cells can reach each other.
//!
//! Two cells can be paired only if no unmatched cell stands between them.
//! The path between the cells is, in order of precedence:
//!
//! * the cells between them in the row, when both cells are on the same row,
//! * the cells between them in the column, when both cells are on the same column,
//! * the cells between them on the diagonal, when the level allows diagonals and the cells are
//!   on the same diagonal,
//! * otherwise, the cells between them when reading the board row by row, as if the end of a
//!   row was connected to the start of the next row.
//!
//! Matched cells and coordinates with no cell never block the path.

use log::debug;
use strum_macros::Display;

use crate::error::{GameError, Result};
use crate::generator::board::{Board, Position};

/// Geometry used to check the path between two cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum PathKind {
    /// Both cells are on the same row.
    Row,

    /// Both cells are on the same column.
    Column,

    /// Both cells are on the same diagonal and the level allows diagonals.
    Diagonal,

    /// Any other geometry: the board is read row by row.
    Wrapped,
}

/// Return the geometry used to check the path between the two positions.
pub fn path_kind(pos1: Position, pos2: Position, allow_diagonal: bool) -> PathKind {
    if pos1.row == pos2.row {
        PathKind::Row
    } else if pos1.col == pos2.col {
        PathKind::Column
    } else if allow_diagonal && pos1.row.abs_diff(pos2.row) == pos1.col.abs_diff(pos2.col) {
        PathKind::Diagonal
    } else {
        PathKind::Wrapped
    }
}

/// Whether no unmatched cell stands between the two positions.
///
/// A cell cannot be paired with itself, so the function returns `false` when both positions
/// are the same.
/// The state of the two cells at `pos1` and `pos2` is not considered.
///
/// # Errors
///
/// The function returns an error if a position does not reference a cell of the board.
pub fn is_path_clear(
    board: &Board,
    pos1: Position,
    pos2: Position,
    allow_diagonal: bool,
) -> Result<bool> {
    if pos1 == pos2 {
        return Ok(false);
    }
    for pos in [pos1, pos2] {
        if !board.contains(pos) {
            return Err(GameError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }
    }

    let kind: PathKind = path_kind(pos1, pos2, allow_diagonal);
    let clear: bool = match kind {
        PathKind::Row => {
            let (start, end) = ordered(pos1.col, pos2.col);
            (start + 1..end).all(|c| !board.is_blocking(pos1.row, c))
        }
        PathKind::Column => {
            let (start, end) = ordered(pos1.row, pos2.row);
            (start + 1..end).all(|r| !board.is_blocking(r, pos1.col))
        }
        PathKind::Diagonal => {
            let steps: usize = pos1.row.abs_diff(pos2.row);
            (1..steps).all(|k| {
                let r: usize = if pos2.row > pos1.row {
                    pos1.row + k
                } else {
                    pos1.row - k
                };
                let c: usize = if pos2.col > pos1.col {
                    pos1.col + k
                } else {
                    pos1.col - k
                };
                !board.is_blocking(r, c)
            })
        }
        PathKind::Wrapped => {
            let cols: usize = board.cols();
            let (start, end) = ordered(
                pos1.row * cols + pos1.col,
                pos2.row * cols + pos2.col,
            );
            (start + 1..end).all(|i| !board.is_blocking(i / cols, i % cols))
        }
    };
    debug!("Path {pos1} -> {pos2} ({kind}): clear = {clear}");
    Ok(clear)
}

/// Return the two values in increasing order.
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
