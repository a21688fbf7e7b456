/*
session.rs

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

use tenpair::config;
use tenpair::{
    AddRowOutcome, Game, GameState, LevelManager, Position, SelectOutcome, SequenceGenerator,
    is_path_clear, is_value_match,
};

/// Return the first pair of unmatched cells that can be paired, if any.
fn find_pair(game: &Game) -> Option<(Position, Position)> {
    let board = game.board();
    let cells: Vec<(Position, i32)> = board
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_matched())
                .map(move |(c, cell)| (Position::new(r, c), cell.value()))
        })
        .collect();
    for (i, (a, va)) in cells.iter().enumerate() {
        for (b, vb) in &cells[i + 1..] {
            if is_value_match(*va, *vb)
                && is_path_clear(board, *a, *b, game.level().allow_diagonal).unwrap()
            {
                return Some((*a, *b));
            }
        }
    }
    None
}

/// Play greedily until the level is complete or no move is left.
fn play_level(game: &mut Game) {
    while game.is_playing() {
        if let Some((a, b)) = find_pair(game) {
            assert_eq!(game.select(a), SelectOutcome::Selected(a));
            assert_eq!(game.select(b), SelectOutcome::Matched(a, b));
        } else if game.add_row() != AddRowOutcome::Added {
            break;
        }
    }
}

#[test]
fn greedy_session_through_all_levels() {
    let mut manager = LevelManager::new();
    let mut generator = SequenceGenerator::from_seed(2024);

    loop {
        let mut game = Game::start(manager.current_level(), &mut generator).unwrap();
        assert_eq!(game.board().num_rows(), config::INITIAL_ROWS);
        play_level(&mut game);

        // Every match flips exactly two cells
        let matched_cells: usize = game.board().num_cells() - game.board().num_unmatched();
        assert_eq!(matched_cells, 2 * game.matches() as usize);
        assert!(game.board().num_rows() <= config::MAX_ROWS);
        if let Some(limit) = game.level().max_add_rows {
            assert!(game.add_rows_used() <= limit.get());
        }
        if game.state() == GameState::LevelComplete {
            assert!(
                game.matches() >= game.level().target_matches || game.board().all_matched()
            );
        }

        if !manager.advance() {
            break;
        }
    }
    assert!(manager.is_last());
}

#[test]
fn same_seed_same_board() {
    let manager = LevelManager::new();
    let level = manager.current_level();

    let a = Game::start(level, &mut SequenceGenerator::from_seed(9)).unwrap();
    let b = Game::start(level, &mut SequenceGenerator::from_seed(9)).unwrap();
    assert_eq!(a.board().to_string(), b.board().to_string());
    assert_eq!(
        a.reserve().iter().collect::<Vec<_>>(),
        b.reserve().iter().collect::<Vec<_>>()
    );
}
