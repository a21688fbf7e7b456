/*
board.rs

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

//! Cells, board, and reserve of a level in progress.
//!
//! A [`Board`] is built from a flat sequence of values laid out row by row.
//! The values that are not dealt yet wait in a [`Reserve`], from which new rows are appended
//! when the player asks for more cells.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::error::{GameError, Result};

/// Opaque cell identifier.
///
/// The identifier only gives the cell a stable identity (for example to key a list in a user
/// interface). It has no meaning for the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u64);

impl CellId {
    /// Return the raw value of the identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Source of unique cell identifiers.
pub trait IdSource {
    /// Return an identifier that was never returned before.
    fn next_id(&mut self) -> CellId;
}

/// [`IdSource`] that counts from zero.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a [`SequentialIds`] object.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Create a [`SequentialIds`] object that counts from `next`.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> CellId {
        let id: CellId = CellId(self.next);
        self.next += 1;
        id
    }
}

/// Coordinates of a cell on the board. Rows and columns start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A board cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cell {
    /// Number displayed in the cell.
    value: i32,

    /// Whether the cell has been paired with another cell.
    matched: bool,

    /// Cell identifier.
    id: CellId,
}

impl Cell {
    /// Create an unmatched cell.
    pub fn new(value: i32, id: CellId) -> Self {
        Self {
            value,
            matched: false,
            id,
        }
    }

    /// Return the number displayed in the cell.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Whether the cell has been paired with another cell.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Return the cell identifier.
    pub fn id(&self) -> CellId {
        self.id
    }
}

/// Lay out `sequence` row by row, `cols` values per row.
///
/// Each value becomes a new unmatched [`Cell`].
/// When the length of the sequence is not a multiple of `cols`, the last row is shorter (it is
/// not padded).
///
/// # Errors
///
/// The function returns an error if `cols` is zero.
pub fn build(sequence: &[i32], cols: usize, ids: &mut impl IdSource) -> Result<Vec<Vec<Cell>>> {
    if cols == 0 {
        return Err(GameError::InvalidColumns);
    }
    Ok(sequence
        .chunks(cols)
        .map(|chunk| chunk.iter().map(|v| Cell::new(*v, ids.next_id())).collect())
        .collect())
}

/// Grid of cells for the level in progress.
///
/// Rows are only appended, never removed nor reordered.
/// Each mutation increases the [`Board::version`] counter, so that a view can detect that the
/// board changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "BoardData")]
pub struct Board {
    /// Cells, row by row.
    rows: Vec<Vec<Cell>>,

    /// Number of cells in a full row.
    cols: usize,

    /// Number of mutations since the board was created.
    version: u64,
}

/// Serialized form of a [`Board`], verified by [`Board::from_rows`] before use.
#[derive(Deserialize)]
struct BoardData {
    rows: Vec<Vec<Cell>>,
    cols: usize,
    version: u64,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self> {
        let mut board: Board = Board::from_rows(data.rows, data.cols)?;
        board.version = data.version;
        Ok(board)
    }
}

impl Board {
    /// Create a [`Board`] object from its rows.
    ///
    /// # Errors
    ///
    /// The method returns an error when `cols` is zero, when a row is empty or longer than
    /// `cols`, or when a row other than the last one is shorter than `cols`.
    pub fn from_rows(rows: Vec<Vec<Cell>>, cols: usize) -> Result<Self> {
        if cols == 0 {
            return Err(GameError::InvalidColumns);
        }
        let last: usize = rows.len().saturating_sub(1);
        for (i, row) in rows.iter().enumerate() {
            if row.is_empty() || row.len() > cols || (i < last && row.len() != cols) {
                return Err(GameError::MalformedGrid);
            }
        }
        Ok(Self {
            rows,
            cols,
            version: 0,
        })
    }

    /// Create a [`Board`] object from a flat sequence of values (see [`build`]).
    pub fn from_sequence(sequence: &[i32], cols: usize, ids: &mut impl IdSource) -> Result<Self> {
        Self::from_rows(build(sequence, cols, ids)?, cols)
    }

    /// Return the number of cells in a full row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Return the number of mutations since the board was created.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Return the rows of the board.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Return the cell at the given position, or None if there is no cell there.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col))
    }

    /// Whether there is a cell at the given position.
    pub fn contains(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Whether the given coordinates hold an unmatched cell.
    ///
    /// Coordinates outside the board never block.
    pub fn is_blocking(&self, row: usize, col: usize) -> bool {
        self.get(Position::new(row, col))
            .is_some_and(|cell| !cell.is_matched())
    }

    /// Return the number of cells.
    pub fn num_cells(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Return the number of cells that are not matched yet.
    pub fn num_unmatched(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_matched())
            .count()
    }

    /// Whether the board has cells and all of them are matched.
    pub fn all_matched(&self) -> bool {
        self.num_cells() > 0 && self.num_unmatched() == 0
    }

    /// Whether the last row is shorter than the others.
    fn has_short_row(&self) -> bool {
        self.rows.last().is_some_and(|row| row.len() < self.cols)
    }

    /// Verify that the given position holds an unmatched cell.
    fn check_unmatched(&self, pos: Position) -> Result<()> {
        match self.get(pos) {
            Some(cell) if cell.is_matched() => Err(GameError::AlreadyMatched {
                row: pos.row,
                col: pos.col,
            }),
            Some(_) => Ok(()),
            None => Err(GameError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            }),
        }
    }

    /// Mark the two given cells as matched.
    ///
    /// Both cells are verified before any of them is updated, so either both cells are marked
    /// or the board is left untouched.
    ///
    /// # Errors
    ///
    /// The method returns an error if the two positions are the same, if a position does not
    /// reference a cell, or if a cell is already matched.
    pub fn mark_matched(&mut self, a: Position, b: Position) -> Result<()> {
        if a == b {
            return Err(GameError::InvalidPosition {
                row: b.row,
                col: b.col,
            });
        }
        self.check_unmatched(a)?;
        self.check_unmatched(b)?;

        self.rows[a.row][a.col].matched = true;
        self.rows[b.row][b.col].matched = true;
        self.version += 1;
        debug!("Cells {a} and {b} matched (board version {})", self.version);
        Ok(())
    }

    /// Append a row of new cells to the board.
    ///
    /// # Errors
    ///
    /// The method returns an error if `values` does not hold exactly [`Board::cols`] values, or
    /// if the current last row is shorter than the others.
    pub fn push_row(&mut self, values: &[i32], ids: &mut impl IdSource) -> Result<()> {
        if values.len() != self.cols || self.has_short_row() {
            return Err(GameError::MalformedGrid);
        }
        self.rows
            .push(values.iter().map(|v| Cell::new(*v, ids.next_id())).collect());
        self.version += 1;
        debug!(
            "Row {} added (board version {})",
            self.rows.len(),
            self.version
        );
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                if cell.is_matched() {
                    write!(f, "{:>3}", '.')?;
                } else {
                    write!(f, "{:>3}", cell.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Values generated for the level but not dealt yet.
///
/// The values are released from the front, one row at a time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Reserve {
    numbers: VecDeque<i32>,
}

impl Reserve {
    /// Create a [`Reserve`] object.
    pub fn new(numbers: Vec<i32>) -> Self {
        Self {
            numbers: VecDeque::from(numbers),
        }
    }

    /// Return the number of values left.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Whether all the values have been released.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterate over the values left, in release order.
    pub fn iter(&self) -> impl Iterator<Item = &i32> {
        self.numbers.iter()
    }

    /// Remove and return the next `cols` values, or None if fewer values are left (in that case
    /// the reserve is not modified).
    pub fn take_row(&mut self, cols: usize) -> Option<Vec<i32>> {
        if cols == 0 || self.numbers.len() < cols {
            return None;
        }
        Some(self.numbers.drain(..cols).collect())
    }
}

/// Deal a generated sequence: the first `initial_rows` rows go to the board, and the remaining
/// values go to the reserve, in order.
pub fn deal(
    sequence: &[i32],
    cols: usize,
    initial_rows: usize,
    ids: &mut impl IdSource,
) -> Result<(Board, Reserve)> {
    let split: usize = cols.saturating_mul(initial_rows).min(sequence.len());
    let (dealt, kept) = sequence.split_at(split);
    let board: Board = Board::from_sequence(dealt, cols, ids)?;
    Ok((board, Reserve::new(kept.to_vec())))
}
