/*
lib.rs

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

//! Core of the Tenpair number-matching game.
//!
//! The player pairs cells holding equal values, or values that sum to ten, as long as no
//! unmatched cell stands between them.
//!
//! * [`generator`] produces the values and the board of a level.
//! * [`path_check`] verifies that two cells can reach each other.
//! * [`level_manager`] tracks the level being played in the level catalog.
//! * [`game`] manages the selection, the matches, the added rows, and the clock of a level in
//!   progress.

pub mod config;
pub mod error;
pub mod game;
pub mod generator;
pub mod level_manager;
pub mod path_check;
pub mod saver;

pub use error::{GameError, Result};
pub use game::{AddRowOutcome, Game, GameState, SelectOutcome, is_value_match};
pub use generator::board::{Board, Cell, CellId, Position, Reserve};
pub use generator::levels::LevelConfig;
pub use generator::sequence::SequenceGenerator;
pub use level_manager::{LevelManager, LevelSnapshot};
pub use path_check::is_path_clear;
