// Crossword – A crossword game
// Copyright (C) 2024  The Crossword authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod solution_key;
mod clue;
mod definition;
mod grid;
mod puzzle;
mod catalog;
mod daily;

use std::{fs, process::ExitCode, ffi::OsString};
use clap::{Parser, Subcommand};
use serde::Serialize;
use catalog::Catalog;
use clue::Direction;
use definition::{Difficulty, PuzzleDefinition};
use grid::CrosswordCell;
use puzzle::CrosswordPuzzle;
use solution_key::BLOCK;

#[derive(Parser)]
#[command(name = "crossword")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the puzzles in the catalog
    List {
        #[arg(
            short,
            long,
            value_name = "DIFFICULTY",
            value_parser = parse_difficulty,
        )]
        difficulty: Option<Difficulty>,
    },
    /// Print a puzzle grid and its clues
    Show {
        #[arg(
            short,
            long,
            value_name = "DIFFICULTY",
            value_parser = parse_difficulty,
        )]
        difficulty: Option<Difficulty>,
        #[arg(short, long, value_name = "SEED")]
        seed: Option<u32>,
        #[arg(
            short,
            long,
            value_name = "ID",
            conflicts_with_all = ["difficulty", "seed"],
        )]
        id: Option<String>,
        #[arg(short = 'S', long)]
        solution: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the puzzle chosen for a date
    Daily {
        #[arg(value_name = "DATE")]
        date: String,
        #[arg(long)]
        json: bool,
    },
    /// Check a file of answers against a puzzle
    Check {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "FILE")]
        answers: OsString,
        #[arg(long)]
        json: bool,
    },
    /// Check every puzzle in the catalog against its solution key
    Validate,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse::<Difficulty>().map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    puzzle: &'a PuzzleDefinition,
    grid: Vec<&'a [CrosswordCell]>,
}

#[derive(Serialize)]
struct DailyOutput<'a> {
    date: &'a str,
    seed: u32,
    id: &'a str,
    difficulty: Difficulty,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    id: &'a str,
    solved: bool,
    filled: usize,
    playable: usize,
    incorrect: Vec<String>,
}

fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            true
        },
        Err(e) => {
            eprintln!("json: {}", e);
            false
        },
    }
}

fn print_grid(puzzle: &CrosswordPuzzle) {
    for row in puzzle.grid().rows() {
        for cell in row.iter() {
            let number = cell.number()
                .map(|n| n.to_string())
                .unwrap_or_default();

            let letter = if cell.is_block() { BLOCK } else { '_' };

            print!("{:>2}{} ", number, letter);
        }

        println!();
    }
}

fn print_clues(puzzle: &CrosswordPuzzle) {
    for direction in [Direction::Across, Direction::Down] {
        println!("\n{}\n", direction.name().to_uppercase());

        for clue in puzzle.clues().iter().filter(|c| c.direction == direction) {
            println!("{:>3}. {} ({})", clue.number, clue.prompt, clue.length);
        }
    }
}

fn list(catalog: &Catalog, difficulty: Option<Difficulty>) -> ExitCode {
    let definitions = match difficulty {
        Some(difficulty) => catalog.list_by_difficulty(difficulty),
        None => catalog.definitions().iter().collect(),
    };

    for definition in definitions {
        println!(
            "{} – {} ({}, {}×{}, {} clues)",
            definition.id,
            definition.title,
            definition.difficulty,
            definition.width,
            definition.height,
            definition.clues.len(),
        );
    }

    ExitCode::SUCCESS
}

fn show(
    catalog: &Catalog,
    difficulty: Option<Difficulty>,
    seed: Option<u32>,
    id: Option<&str>,
    show_solution: bool,
    json: bool,
) -> ExitCode {
    let puzzle = match id {
        Some(id) => {
            let Some(definition) = catalog.get(id)
            else {
                eprintln!("{}: no such puzzle", id);
                return ExitCode::FAILURE;
            };

            match catalog.build_puzzle(definition) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                },
            }
        },
        None => catalog.puzzle(difficulty.unwrap_or(Difficulty::Easy), seed),
    };

    if json {
        let ok = print_json(&ShowOutput {
            puzzle: puzzle.definition(),
            grid: puzzle.grid().rows().collect(),
        });

        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    println!("{} ({})\n", puzzle.title(), puzzle.difficulty());
    print_grid(&puzzle);
    print_clues(&puzzle);

    if show_solution {
        match catalog.solution_key(puzzle.id()) {
            Ok(key) => println!("\nSOLUTION\n\n{}", key),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

fn daily(catalog: &Catalog, date: &str, json: bool) -> ExitCode {
    let definition = daily::daily_definition(catalog, date);
    let seed = daily::daily_seed(date);

    if json {
        let ok = print_json(&DailyOutput {
            date,
            seed,
            id: &definition.id,
            difficulty: definition.difficulty,
        });

        if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    } else {
        println!(
            "{}: {} ({}, seed {})",
            date,
            definition.id,
            definition.difficulty,
            seed,
        );
        ExitCode::SUCCESS
    }
}

// Reads the answers with one line per row. Blocks, spaces, dots and
// underscores are all treated as empty cells.
fn load_answers(puzzle: &mut CrosswordPuzzle, answers: &str) {
    for (row, line) in answers.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let letter = match ch {
                BLOCK | ' ' | '.' | '_' => None,
                ch => Some(ch),
            };

            puzzle.set_user_letter(row as u32, col as u32, letter);
        }
    }
}

fn check(
    catalog: &Catalog,
    id: &str,
    filename: &OsString,
    json: bool,
) -> ExitCode {
    let Some(definition) = catalog.get(id)
    else {
        eprintln!("{}: no such puzzle", id);
        return ExitCode::FAILURE;
    };

    let mut puzzle = match catalog.build_puzzle(definition) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let answers = match fs::read_to_string(filename) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    load_answers(&mut puzzle, &answers);

    let mut incorrect = puzzle.incorrect_cells()
        .into_iter()
        .collect::<Vec<_>>();
    incorrect.sort_unstable();
    let incorrect = incorrect.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>();

    let solved = puzzle.is_solved();

    if json {
        let ok = print_json(&CheckOutput {
            id,
            solved,
            filled: puzzle.filled_count(),
            playable: puzzle.playable_count(),
            incorrect,
        });

        if !ok {
            return ExitCode::FAILURE;
        }
    } else {
        println!(
            "{}/{} cells filled",
            puzzle.filled_count(),
            puzzle.playable_count(),
        );

        for key in incorrect.iter() {
            println!("incorrect: {}", key);
        }

        println!("{}", if solved { "solved" } else { "not solved" });
    }

    if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn validate() -> ExitCode {
    match catalog::load_builtin() {
        Ok(catalog) => {
            println!("{} puzzles ok", catalog.len());
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::Validate = cli.command {
        return validate();
    }

    let catalog = match catalog::load_builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    match cli.command {
        Command::List { difficulty } => list(&catalog, difficulty),
        Command::Show { difficulty, seed, id, solution, json } => {
            show(&catalog, difficulty, seed, id.as_deref(), solution, json)
        },
        Command::Daily { date, json } => daily(&catalog, &date, json),
        Command::Check { id, answers, json } => {
            check(&catalog, &id, &answers, json)
        },
        Command::Validate => validate(),
    }
}
