/*
game.rs

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

//! Manage the status of a level in progress.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum_macros::Display;

use crate::config;
use crate::error::Result;
use crate::generator::board::{self, Board, Position, Reserve, SequentialIds};
use crate::generator::levels::LevelConfig;
use crate::generator::sequence::SequenceGenerator;
use crate::path_check;

/// Whether two values can be paired: they are equal, or they sum to ten.
pub fn is_value_match(a: i32, b: i32) -> bool {
    a == b || a.checked_add(b) == Some(10)
}

/// State of the level in progress.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum GameState {
    Playing,
    LevelComplete,
    GameOver,
}

/// Result of [`Game::select`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: the game is not in progress, there is no cell at the position, or the
    /// cell is already matched.
    Ignored,

    /// The cell is now selected.
    Selected(Position),

    /// The selected cell was picked again and is not selected anymore.
    Deselected,

    /// The two cells have been paired.
    Matched(Position, Position),

    /// The two cells cannot be paired. The selection is cleared.
    Mismatch(Position, Position),
}

/// Result of [`Game::add_row`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum AddRowOutcome {
    /// A row has been appended to the board.
    Added,

    /// The game is not in progress.
    NotPlaying,

    /// The level does not allow more rows.
    LimitReached,

    /// The board already has [`config::MAX_ROWS`] rows.
    BoardFull,

    /// The reserve does not hold a full row anymore.
    ReserveExhausted,
}

/// Manage the status of the level in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Level being played.
    level: LevelConfig,

    /// Cells dealt so far.
    board: Board,

    /// Values not dealt yet.
    reserve: Reserve,

    /// Identifiers for the cells of the rows added during the game.
    ids: SequentialIds,

    /// Cell selected by the player, waiting for a second cell.
    selected: Option<Position>,

    /// Number of pairs matched so far.
    matches: u32,

    /// Number of rows the player added.
    add_rows_used: u32,

    state: GameState,

    /// Time when the level started. Used to compute the time left.
    start_time: Instant,

    /// Elapsed time when the game stopped (level complete or game over).
    stop_duration: Option<Duration>,
}

impl Game {
    /// Start the given level with a new board.
    ///
    /// The generator provides enough values to fill the board up to [`config::MAX_ROWS`] rows.
    /// The first [`config::INITIAL_ROWS`] rows are dealt, and the remaining values are kept in
    /// the reserve.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number range of the level is not valid.
    pub fn start<R: Rng>(level: &LevelConfig, generator: &mut SequenceGenerator<R>) -> Result<Self> {
        let sequence: Vec<i32> = generator.generate(
            config::total_cells(),
            level.min(),
            level.max(),
            config::guaranteed_pairs(),
        )?;
        let mut ids: SequentialIds = SequentialIds::new();
        let (board, reserve) =
            board::deal(&sequence, config::GRID_COLS, config::INITIAL_ROWS, &mut ids)?;
        info!(
            "Level {} ({}) started: {} cells dealt, {} in reserve",
            level.id,
            level.name,
            board.num_cells(),
            reserve.len()
        );
        Ok(Self::with_board(level.clone(), board, reserve))
    }

    /// Start the given level with a board prepared by the caller.
    pub fn with_board(level: LevelConfig, board: Board, reserve: Reserve) -> Self {
        let next_id: u64 = board
            .rows()
            .iter()
            .flatten()
            .map(|cell| cell.id().get() + 1)
            .max()
            .unwrap_or(0);
        Self {
            level,
            board,
            reserve,
            ids: SequentialIds::starting_at(next_id),
            selected: None,
            matches: 0,
            add_rows_used: 0,
            state: GameState::Playing,
            start_time: Instant::now(),
            stop_duration: None,
        }
    }

    /// Replay the current level with a new board.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number range of the level is not valid. The game is
    /// not changed in that case.
    pub fn restart<R: Rng>(&mut self, generator: &mut SequenceGenerator<R>) -> Result<()> {
        *self = Self::start(&self.level, generator)?;
        Ok(())
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reserve(&self) -> &Reserve {
        &self.reserve
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Return the number of pairs matched so far.
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Return the number of rows the player added.
    pub fn add_rows_used(&self) -> u32 {
        self.add_rows_used
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether the level is in progress.
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// Stop the clock and change the state.
    fn stop(&mut self, state: GameState) {
        self.stop_duration = Some(self.start_time.elapsed());
        self.selected = None;
        self.state = state;
    }

    /// Pick a cell.
    ///
    /// The first cell picked is selected. Picking it again deselects it.
    /// Picking a second cell tries to pair both cells: their values must match (see
    /// [`is_value_match`]) and no unmatched cell must stand between them (see
    /// [`path_check::is_path_clear`]).
    /// In all cases, the selection is cleared after the second cell.
    pub fn select(&mut self, pos: Position) -> SelectOutcome {
        if !self.is_playing() || self.update_clock() != GameState::Playing {
            return SelectOutcome::Ignored;
        }
        let value: i32 = match self.board.get(pos) {
            Some(cell) if !cell.is_matched() => cell.value(),
            _ => return SelectOutcome::Ignored,
        };

        let Some(first) = self.selected else {
            self.selected = Some(pos);
            return SelectOutcome::Selected(pos);
        };
        if first == pos {
            self.selected = None;
            return SelectOutcome::Deselected;
        }
        self.selected = None;

        let first_value: i32 = self.board.get(first).map_or(value, |cell| cell.value());
        let matched: bool = is_value_match(first_value, value)
            && path_check::is_path_clear(&self.board, first, pos, self.level.allow_diagonal)
                .unwrap_or(false)
            && self.board.mark_matched(first, pos).is_ok();
        if !matched {
            debug!("No match between {first} ({first_value}) and {pos} ({value})");
            return SelectOutcome::Mismatch(first, pos);
        }

        self.matches += 1;
        if self.board.all_matched() || self.matches >= self.level.target_matches {
            info!(
                "Level {} complete with {} matches",
                self.level.id, self.matches
            );
            self.stop(GameState::LevelComplete);
        }
        SelectOutcome::Matched(first, pos)
    }

    /// Return the reason why a row cannot be added, or None if it can.
    fn add_row_refusal(&self) -> Option<AddRowOutcome> {
        if !self.is_playing() {
            Some(AddRowOutcome::NotPlaying)
        } else if !self.level.allows_add_row(self.add_rows_used) {
            Some(AddRowOutcome::LimitReached)
        } else if self.board.num_rows() >= config::MAX_ROWS {
            Some(AddRowOutcome::BoardFull)
        } else if self.reserve.len() < config::GRID_COLS {
            Some(AddRowOutcome::ReserveExhausted)
        } else {
            None
        }
    }

    /// Whether the player can add a row.
    pub fn can_add_row(&self) -> bool {
        self.add_row_refusal().is_none()
    }

    /// Append the next row of the reserve to the board.
    pub fn add_row(&mut self) -> AddRowOutcome {
        if let Some(refusal) = self.add_row_refusal() {
            debug!("Cannot add a row: {refusal}");
            return refusal;
        }
        let Some(values) = self.reserve.take_row(config::GRID_COLS) else {
            return AddRowOutcome::ReserveExhausted;
        };
        if self.board.push_row(&values, &mut self.ids).is_err() {
            return AddRowOutcome::BoardFull;
        }
        self.add_rows_used += 1;
        AddRowOutcome::Added
    }

    /// Return the time elapsed since the level started. The clock stops with the game.
    pub fn elapsed(&self) -> Duration {
        self.stop_duration
            .unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Return the time left before the game is over.
    pub fn time_left(&self) -> Duration {
        Duration::from_secs(config::LEVEL_TIME_SEC).saturating_sub(self.elapsed())
    }

    /// End the game if the time ran out, and return the new state.
    pub fn update_clock(&mut self) -> GameState {
        if self.is_playing() && self.time_left().is_zero() {
            self.expire();
        }
        self.state
    }

    /// End the game now, as if the time ran out.
    pub fn expire(&mut self) {
        if !self.is_playing() {
            return;
        }
        info!(
            "Time is up for level {} ({} matches)",
            self.level.id, self.matches
        );
        self.stop(GameState::GameOver);
        self.stop_duration = Some(Duration::from_secs(config::LEVEL_TIME_SEC));
    }
}
