/*
error.rs

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

//! Errors returned by the Tenpair core.

use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The level index given to [`crate::level_manager::LevelManager::set_level`] (or used as a
    /// starting index) is outside the catalog.
    #[error("Invalid level index {index} (the catalog has {len} levels)")]
    InvalidIndex { index: usize, len: usize },

    /// The level index given to [`crate::level_manager::LevelManager::level_at`] is outside the
    /// catalog.
    #[error("Level index {index} out of range (the catalog has {len} levels)")]
    OutOfRange { index: usize, len: usize },

    /// A level catalog must contain at least one level.
    #[error("The level catalog is empty")]
    EmptyCatalog,

    /// The lower bound of a number range is greater than its upper bound.
    #[error("Invalid number range [{min}, {max}]")]
    InvalidNumberRange { min: i32, max: i32 },

    /// A level must target at least one match.
    #[error("Level {id} has no target matches")]
    InvalidTargetMatches { id: u32 },

    /// A board must have at least one column.
    #[error("The number of columns must be positive")]
    InvalidColumns,

    /// The rows of the grid do not have the expected length.
    #[error("Grid rows do not match the declared number of columns")]
    MalformedGrid,

    /// The coordinates do not reference a cell of the grid.
    #[error("No cell at row {row}, column {col}")]
    InvalidPosition { row: usize, col: usize },

    /// The cell has already been matched and cannot be matched again.
    #[error("The cell at row {row}, column {col} is already matched")]
    AlreadyMatched { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
