/*
levels.rs

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

//! Level definitions and the built-in level catalog.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::{GameError, Result};

/// Static parameters used to declare the built-in levels.
struct LevelParameters {
    id: u32,
    name: &'static str,
    description: &'static str,
    number_range: (i32, i32),
    target_matches: u32,
    allow_diagonal: bool,
    max_add_rows: Option<u32>,
    color_from: &'static str,
    color_to: &'static str,
}

/// Level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Level number shown to the player.
    pub id: u32,

    /// Level name.
    pub name: String,

    /// Short description of the level.
    pub description: String,

    /// Lower and upper bounds (inclusive) of the numbers dealt on the board.
    pub number_range: (i32, i32),

    /// Number of matches that completes the level.
    pub target_matches: u32,

    /// Whether two cells on the same diagonal can be matched.
    pub allow_diagonal: bool,

    /// How many times the player can add a row, or None when unlimited.
    pub max_add_rows: Option<NonZeroU32>,

    /// Background gradient start (display hint).
    pub color_from: String,

    /// Background gradient end (display hint).
    pub color_to: String,
}

impl LevelConfig {
    /// Create a level from its static parameters.
    fn new(parameters: LevelParameters) -> Self {
        Self {
            id: parameters.id,
            name: String::from(parameters.name),
            description: String::from(parameters.description),
            number_range: parameters.number_range,
            target_matches: parameters.target_matches,
            allow_diagonal: parameters.allow_diagonal,
            max_add_rows: parameters.max_add_rows.and_then(NonZeroU32::new),
            color_from: String::from(parameters.color_from),
            color_to: String::from(parameters.color_to),
        }
    }

    /// Return the smallest number dealt on the board.
    pub fn min(&self) -> i32 {
        self.number_range.0
    }

    /// Return the largest number dealt on the board.
    pub fn max(&self) -> i32 {
        self.number_range.1
    }

    /// Whether the level still allows adding a row after `used` rows have been added.
    pub fn allows_add_row(&self, used: u32) -> bool {
        match self.max_add_rows {
            Some(limit) => used < limit.get(),
            None => true,
        }
    }

    /// Verify the level parameters.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number range is reversed, or if the level does not
    /// target any match.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.number_range;
        if min > max {
            return Err(GameError::InvalidNumberRange { min, max });
        }
        if self.target_matches == 0 {
            return Err(GameError::InvalidTargetMatches { id: self.id });
        }
        Ok(())
    }
}

/// Verify all the levels of a catalog.
///
/// # Errors
///
/// The function returns an error if the catalog is empty or if a level is not valid.
pub fn validate_catalog(levels: &[LevelConfig]) -> Result<()> {
    if levels.is_empty() {
        return Err(GameError::EmptyCatalog);
    }
    levels.iter().try_for_each(LevelConfig::validate)
}

/// Return the built-in levels, in play order.
pub fn catalog() -> Vec<LevelConfig> {
    // For developers: add your new level to the list.
    vec![
        LevelConfig::new(LevelParameters {
            id: 1,
            name: "Beginner",
            description: "Easy numbers with all match types",
            number_range: (1, 5),
            target_matches: 10,
            allow_diagonal: true,
            max_add_rows: None,
            color_from: "#4B5563",
            color_to: "#111827",
        }),
        LevelConfig::new(LevelParameters {
            id: 2,
            name: "Intermediate",
            description: "More numbers, higher target",
            number_range: (1, 7),
            target_matches: 15,
            allow_diagonal: true,
            max_add_rows: None,
            color_from: "#374151",
            color_to: "#0b1220",
        }),
        LevelConfig::new(LevelParameters {
            id: 3,
            name: "Advanced",
            description: "Hardest numbers + limited add-rows",
            number_range: (1, 9),
            target_matches: 20,
            allow_diagonal: true,
            max_add_rows: Some(3),
            color_from: "#111827",
            color_to: "#000000",
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let levels = catalog();

        assert_eq!(levels.len(), 3);
        assert!(validate_catalog(&levels).is_ok());
        let ids: Vec<u32> = levels.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn add_row_limit() {
        let levels = catalog();

        assert!(levels[0].allows_add_row(1000));
        assert!(levels[2].allows_add_row(2));
        assert!(!levels[2].allows_add_row(3));
    }

    #[test]
    fn invalid_levels_are_reported() {
        let mut level = catalog().remove(0);
        level.number_range = (6, 2);
        assert_eq!(
            level.validate(),
            Err(GameError::InvalidNumberRange { min: 6, max: 2 })
        );

        level.number_range = (2, 6);
        level.target_matches = 0;
        assert_eq!(
            level.validate(),
            Err(GameError::InvalidTargetMatches { id: 1 })
        );

        assert_eq!(validate_catalog(&[]), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn catalog_json_round_trip() {
        let levels = catalog();
        let json: String = serde_json::to_string(&levels).unwrap();
        let back: Vec<LevelConfig> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, levels);
        assert!(json.contains("\"max_add_rows\":3"));
        assert!(json.contains("\"number_range\":[1,9]"));
    }

    #[test]
    fn zero_add_rows_is_rejected_when_reading() {
        let json = r##"{"id":9,"name":"x","description":"","number_range":[1,2],
            "target_matches":1,"allow_diagonal":false,"max_add_rows":0,
            "color_from":"#000","color_to":"#000"}"##;
        assert!(serde_json::from_str::<LevelConfig>(json).is_err());
    }
}
