/*
config.rs

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

//! Board sizing and timing constants shared by all the levels.

/// Number of cells in a row.
pub const GRID_COLS: usize = 5;

/// Number of rows dealt when a level starts.
pub const INITIAL_ROWS: usize = 3;

/// The board never grows beyond this number of rows.
pub const MAX_ROWS: usize = 8;

/// Time budget for a level, in seconds.
pub const LEVEL_TIME_SEC: u64 = 180;

/// Share of the generated cells that are dealt as guaranteed pairs when a level starts.
pub const PAIR_RATIO: f64 = 0.4;

/// Number of cells generated for a level: enough to fill the board up to [`MAX_ROWS`].
pub const fn total_cells() -> usize {
    MAX_ROWS * GRID_COLS
}

/// Number of guaranteed pairs requested from the sequence generator at level start.
pub fn guaranteed_pairs() -> usize {
    (total_cells() as f64 * PAIR_RATIO).floor() as usize
}

/// Maximum number of pairs a full board can hold.
pub const fn max_pairs() -> usize {
    total_cells() / 2
}

/// Text displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\nLicense GPL-3.0-or-later <https://www.gnu.org/licenses/>"
);
