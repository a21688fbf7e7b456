/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, Tenpair can list the levels, print generated boards for a level, export
//! the level catalog to a JSON file, or play the levels in the terminal.
//!
//! # Examples
//!
//! List the available levels:
//!
//! ```text
//! $ tenpair --ls
//! 1 Beginner: Easy numbers with all match types
//! 2 Intermediate: More numbers, higher target
//! 3 Advanced: Hardest numbers + limited add-rows
//! ```
//!
//! Generate two boards for the Advanced level:
//!
//! ```text
//! $ tenpair -l 3 -c 2 -s 42
//! ```
//!
//! Play the levels from a custom catalog:
//!
//! ```text
//! $ tenpair --levels my_levels.json --play
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use tenpair::config::COPYRIGHT_NOTICE;
use tenpair::game::{AddRowOutcome, Game, GameState, SelectOutcome};
use tenpair::generator::board::{Board, Position};
use tenpair::generator::levels::LevelConfig;
use tenpair::generator::sequence::SequenceGenerator;
use tenpair::level_manager::LevelManager;
use tenpair::saver::levels::LevelFile;

/// Generate and play Tenpair boards.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Level to generate or to start playing with (the first level is 1)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    level: u32,

    /// Seed for the random number generator, to reproduce boards
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of boards to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Read the levels from this JSON file instead of using the built-in levels
    #[arg(long, value_name = "FILE")]
    levels: Option<PathBuf>,

    /// Write the levels to this JSON file
    #[arg(long, value_name = "FILE")]
    export_levels: Option<PathBuf>,

    /// Print a summary of the level in JSON format
    #[arg(long, default_value_t = false)]
    snapshot: bool,

    /// Play in the terminal
    #[arg(long, default_value_t = false, conflicts_with_all = ["ls", "snapshot", "export_levels"])]
    play: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}

/// Build the level manager from the built-in levels or from the level file.
fn level_manager(args: &Args) -> Result<LevelManager, Box<dyn Error>> {
    let index: usize = (args.level - 1) as usize;

    let Some(path) = &args.levels else {
        let mut manager: LevelManager = LevelManager::new();
        manager.set_level(index)?;
        return Ok(manager);
    };
    match LevelFile::new(path.clone()).get_levels()? {
        Some(levels) => Ok(LevelManager::with_levels(levels, index)?),
        None => Err(format!("Level file {} not found", path.display()).into()),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut manager: LevelManager = level_manager(args)?;
    let mut generator = match args.seed {
        Some(seed) => SequenceGenerator::from_seed(seed),
        None => SequenceGenerator::from_os_rng(),
    };

    if args.play {
        return play(&mut manager, &mut generator);
    }

    let mut generate: bool = true;

    if args.ls {
        for level in manager.levels() {
            println!("{} {}: {}", level.id, level.name, level.description);
        }
        generate = false;
    }

    if let Some(path) = &args.export_levels {
        LevelFile::new(path.clone()).save_levels(manager.levels())?;
        println!("{} levels written to {}", manager.len(), path.display());
        generate = false;
    }

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&manager.snapshot())?);
        generate = false;
    }

    if !generate {
        return Ok(());
    }

    //
    // Generate boards for the selected level
    //
    let level: &LevelConfig = manager.current_level();
    for i in 0..args.count {
        debug!("Board {i}");
        let game: Game = Game::start(level, &mut generator)?;
        println!(
            "# {} ({}..={}): {} sum-to-ten pairs, {} duplicate pairs, {} random values",
            level.name,
            level.min(),
            level.max(),
            generator.sum_pairs,
            generator.duplicate_pairs,
            generator.padding
        );
        print!("{}", game.board());
        let reserve: Vec<String> = game.reserve().iter().map(i32::to_string).collect();
        println!("reserve: {}\n", reserve.join(" "));
    }
    Ok(())
}

/// Return the board as displayed by [`Board`], with 1-based row and column numbers.
fn format_board(board: &Board) -> String {
    let mut text: String = String::from("   ");
    for col in 1..=board.cols() {
        text.push_str(&format!("{col:>3}"));
    }
    text.push('\n');
    for (i, line) in board.to_string().lines().enumerate() {
        text.push_str(&format!("{:>3}{line}\n", i + 1));
    }
    text
}

/// Print the board and the progress of the level.
fn print_status(game: &Game) {
    let level: &LevelConfig = game.level();
    let time_left: Duration = game.time_left();
    println!();
    println!(
        "Level {} {}: {}/{} matches, {}:{:02} left, {} in reserve",
        level.id,
        level.name,
        game.matches(),
        level.target_matches,
        time_left.as_secs() / 60,
        time_left.as_secs() % 60,
        game.reserve().len()
    );
    print!("{}", format_board(game.board()));
}

/// Convert the "r c r c" command into two positions.
fn parse_positions(line: &str) -> Option<(Position, Position)> {
    let numbers: Vec<usize> = line
        .split_whitespace()
        .map(|s| s.parse::<usize>().ok().filter(|n| *n > 0))
        .collect::<Option<Vec<usize>>>()?;
    match numbers[..] {
        [r1, c1, r2, c2] => Some((
            Position::new(r1 - 1, c1 - 1),
            Position::new(r2 - 1, c2 - 1),
        )),
        _ => None,
    }
}

/// Play the levels in the terminal, starting at the current level.
fn play<R: rand::Rng>(
    manager: &mut LevelManager,
    generator: &mut SequenceGenerator<R>,
) -> Result<(), Box<dyn Error>> {
    let mut game: Game = Game::start(manager.current_level(), generator)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Commands: \"r c r c\" pairs two cells, \"a\" adds a row, \"q\" quits.");
    loop {
        print_status(&game);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line: String = line?;

        if game.update_clock() == GameState::GameOver {
            println!("Time is up. Game over.");
            return Ok(());
        }

        match line.trim() {
            "" => continue,
            "q" => return Ok(()),
            "a" => match game.add_row() {
                AddRowOutcome::Added => println!("Row added."),
                AddRowOutcome::LimitReached => println!("No more rows allowed in this level."),
                AddRowOutcome::BoardFull => println!("The board is full."),
                AddRowOutcome::ReserveExhausted => println!("No more numbers in reserve."),
                AddRowOutcome::NotPlaying => println!("The level is over."),
            },
            command => {
                let Some((first, second)) = parse_positions(command) else {
                    println!("Unknown command {command:?}.");
                    continue;
                };
                if game.select(first) == SelectOutcome::Ignored {
                    println!("No cell to pick at row {}, column {}.", first.row + 1, first.col + 1);
                    continue;
                }
                match game.select(second) {
                    SelectOutcome::Matched(_, _) => println!("Match!"),
                    SelectOutcome::Mismatch(_, _) => println!("These cells cannot be paired."),
                    SelectOutcome::Deselected => println!("Pick two different cells."),
                    SelectOutcome::Ignored | SelectOutcome::Selected(_) => {
                        game.select(first);
                        println!(
                            "No cell to pick at row {}, column {}.",
                            second.row + 1,
                            second.col + 1
                        );
                    }
                }
            }
        }

        if game.state() == GameState::LevelComplete {
            println!("Level {} complete!", game.level().id);
            if !manager.advance() {
                println!("All levels complete.");
                return Ok(());
            }
            game = Game::start(manager.current_level(), generator)?;
        }
    }
}
