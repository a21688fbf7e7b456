/*
level_manager.rs

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

//! Level progression.
//!
//! The [`LevelManager`] object owns the ordered list of levels and the index of the level being
//! played. It does not touch the board: starting the selected level is the job of
//! [`crate::game::Game`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::config;
use crate::error::{GameError, Result};
use crate::generator::levels::{self, LevelConfig};

/// Read-only summary of the current level and of the board constants.
///
/// The object can be handed to a view, or serialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelSnapshot {
    /// Index of the level in the catalog.
    pub index: usize,
    pub id: u32,
    pub name: String,
    pub target_matches: u32,
    pub allow_diagonal: bool,
    pub max_add_rows: Option<NonZeroU32>,
    pub number_range: (i32, i32),

    /// Time budget for the level, in seconds.
    pub duration: u64,
    pub grid_cols: usize,
    pub initial_rows: usize,
    pub max_rows: usize,
}

/// Manage the level catalog and the current level.
#[derive(Debug, Clone)]
pub struct LevelManager {
    /// Levels, in play order. Never empty.
    levels: Vec<LevelConfig>,

    /// Index of the current level in [`LevelManager::levels`].
    current_index: usize,
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelManager {
    /// Create a [`LevelManager`] object with the built-in levels, starting at the first level.
    pub fn new() -> Self {
        let levels: Vec<LevelConfig> = levels::catalog();
        warn_unreachable_targets(&levels);
        Self {
            levels,
            current_index: 0,
        }
    }

    /// Create a [`LevelManager`] object with a custom level list.
    ///
    /// # Errors
    ///
    /// The method returns an error if the list is empty, if a level is not valid, or if
    /// `start_index` is not a valid index in the list.
    pub fn with_levels(levels: Vec<LevelConfig>, start_index: usize) -> Result<Self> {
        levels::validate_catalog(&levels)?;
        if start_index >= levels.len() {
            return Err(GameError::InvalidIndex {
                index: start_index,
                len: levels.len(),
            });
        }
        warn_unreachable_targets(&levels);
        Ok(Self {
            levels,
            current_index: start_index,
        })
    }

    /// Return all the levels.
    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    /// Return the number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a level catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Return the index of the current level.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Return the current level.
    pub fn current_level(&self) -> &LevelConfig {
        &self.levels[self.current_index]
    }

    /// Return the level at the given index.
    ///
    /// # Errors
    ///
    /// The method returns an error if the index is outside the catalog.
    pub fn level_at(&self, index: usize) -> Result<&LevelConfig> {
        self.levels.get(index).ok_or(GameError::OutOfRange {
            index,
            len: self.levels.len(),
        })
    }

    /// Change the current level.
    ///
    /// # Errors
    ///
    /// The method returns an error if the index is outside the catalog. The current level is
    /// not changed in that case.
    pub fn set_level(&mut self, index: usize) -> Result<()> {
        if index >= self.levels.len() {
            return Err(GameError::InvalidIndex {
                index,
                len: self.levels.len(),
            });
        }
        debug!("Current level: {} -> {index}", self.current_index);
        self.current_index = index;
        Ok(())
    }

    /// Whether the current level is the last one.
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.levels.len()
    }

    /// Move to the next level.
    ///
    /// Return `false` without doing anything when the current level is already the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            debug!("Already at the last level ({})", self.current_index);
            return false;
        }
        self.current_index += 1;
        debug!("Advanced to level {}", self.current_index);
        true
    }

    /// Go back to the first level.
    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Return a summary of the current level and of the board constants.
    pub fn snapshot(&self) -> LevelSnapshot {
        let level: &LevelConfig = self.current_level();
        LevelSnapshot {
            index: self.current_index,
            id: level.id,
            name: level.name.clone(),
            target_matches: level.target_matches,
            allow_diagonal: level.allow_diagonal,
            max_add_rows: level.max_add_rows,
            number_range: level.number_range,
            duration: config::LEVEL_TIME_SEC,
            grid_cols: config::GRID_COLS,
            initial_rows: config::INITIAL_ROWS,
            max_rows: config::MAX_ROWS,
        }
    }
}

/// Warn about the levels that target more matches than a full board can hold.
fn warn_unreachable_targets(levels: &[LevelConfig]) {
    let max_pairs: usize = config::max_pairs();
    for level in levels {
        if level.target_matches as usize > max_pairs {
            warn!(
                "Level {} target {} > max possible pairs {max_pairs}",
                level.id, level.target_matches
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_last_level() {
        let mut manager = LevelManager::new();
        let len: usize = manager.len();

        for i in 1..len {
            assert!(manager.advance());
            assert_eq!(manager.current_index(), i);
        }
        assert!(manager.is_last());
        assert!(!manager.advance());
        assert!(!manager.advance());
        assert_eq!(manager.current_index(), len - 1);
    }

    #[test]
    fn set_level_rejects_invalid_index() {
        let mut manager = LevelManager::new();
        manager.set_level(2).unwrap();

        assert_eq!(
            manager.set_level(3),
            Err(GameError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(
            manager.set_level(usize::MAX),
            Err(GameError::InvalidIndex {
                index: usize::MAX,
                len: 3
            })
        );
        assert_eq!(manager.current_index(), 2);
    }

    #[test]
    fn level_at_and_current_level() {
        let mut manager = LevelManager::new();

        assert_eq!(manager.level_at(1).unwrap().name, "Intermediate");
        assert_eq!(
            manager.level_at(7),
            Err(GameError::OutOfRange { index: 7, len: 3 })
        );
        manager.set_level(1).unwrap();
        assert_eq!(manager.current_level().id, 2);
        manager.reset();
        assert_eq!(manager.current_index(), 0);
    }

    #[test]
    fn custom_catalog() {
        let mut levels = levels::catalog();
        levels.truncate(2);
        let manager = LevelManager::with_levels(levels.clone(), 1).unwrap();
        assert_eq!(manager.current_level().name, "Intermediate");
        assert!(manager.is_last());

        assert_eq!(
            LevelManager::with_levels(levels, 2).err(),
            Some(GameError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(
            LevelManager::with_levels(Vec::new(), 0).err(),
            Some(GameError::EmptyCatalog)
        );
    }

    #[test]
    fn snapshot_combines_level_and_board_constants() {
        let mut manager = LevelManager::new();
        manager.set_level(2).unwrap();
        let snapshot = manager.snapshot();

        assert_eq!(snapshot.index, 2);
        assert_eq!(snapshot.id, 3);
        assert_eq!(snapshot.name, "Advanced");
        assert_eq!(snapshot.target_matches, 20);
        assert_eq!(snapshot.max_add_rows, NonZeroU32::new(3));
        assert_eq!(snapshot.number_range, (1, 9));
        assert_eq!(snapshot.duration, 180);
        assert_eq!(snapshot.grid_cols, 5);
        assert_eq!(snapshot.initial_rows, 3);
        assert_eq!(snapshot.max_rows, 8);

        let json: String = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"name\":\"Advanced\""));
    }
}
