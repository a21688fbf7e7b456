/*
generator.rs

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

//! Generate the values and the board of a level.
//!
//! [`levels::LevelConfig`] objects describe the levels and their parameters, such as the range of
//! the numbers, the number of matches to complete the level, and whether diagonals are allowed.
//! A list of [`levels::LevelConfig`] objects is provided at built time.
//!
//! To play a level, a random board must be created in two steps:
//!
//! * A [`sequence::SequenceGenerator`] object generates a shuffled sequence of values that
//!   contains a minimum number of matching pairs.
//!
//! * The [`board::deal`] function lays out the first rows of the sequence into a
//!   [`board::Board`] object, and keeps the remaining values in a [`board::Reserve`] object.
//!   The player can later append these values to the board, one row at a time.

pub mod board;
pub mod levels;
pub mod sequence;
