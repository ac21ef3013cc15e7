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

// The daily puzzle is chosen with a simple rolling hash of the date
// string. It only needs to be repeatable, not well distributed, but it
// must not change between releases so that everyone gets the same
// puzzle on a given day.

use super::catalog::Catalog;
use super::definition::{Difficulty, PuzzleDefinition};
use super::puzzle::CrosswordPuzzle;

pub fn daily_seed(date: &str) -> u32 {
    // The hash is over UTF-16 code units and wraps as a signed 32-bit
    // integer at every step
    let hash = date.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(unit as i32)
    });

    hash.unsigned_abs()
}

pub fn daily_definition<'a>(
    catalog: &'a Catalog,
    date: &str,
) -> &'a PuzzleDefinition {
    let index = daily_seed(date) as usize % catalog.len();

    &catalog.definitions()[index]
}

pub fn daily_puzzle(catalog: &Catalog, date: &str) -> CrosswordPuzzle {
    catalog.puzzle_at(daily_seed(date) as usize)
}

pub fn daily_difficulty(catalog: &Catalog, date: &str) -> Difficulty {
    daily_definition(catalog, date).difficulty
}
