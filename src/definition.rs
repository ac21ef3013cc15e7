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

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use super::clue::Clue;
use super::solution_key::{self, SolutionKey};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Difficulty, Error> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidDifficulty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDefinition {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub width: u32,
    pub height: u32,
    pub clues: Vec<Clue>,
    // Puzzles that come from the server may carry their own solution
    // key as one string per row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<String>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidDifficulty,
    InvalidSolution(solution_key::Error),
    DimensionMismatch,
    ZeroLength(String),
    DuplicateClueId(String),
    ClueOutOfBounds(String),
    ClueOverBlock(String),
}

impl From<solution_key::Error> for Error {
    fn from(e: solution_key::Error) -> Error {
        Error::InvalidSolution(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidDifficulty => write!(f, "invalid difficulty"),
            Error::InvalidSolution(e) => write!(f, "{}", e),
            Error::DimensionMismatch => {
                write!(f, "solution key doesn’t match the puzzle size")
            },
            Error::ZeroLength(id) => write!(f, "clue {} has no length", id),
            Error::DuplicateClueId(id) => {
                write!(f, "clue id {} is used more than once", id)
            },
            Error::ClueOutOfBounds(id) => {
                write!(f, "clue {} goes outside the grid", id)
            },
            Error::ClueOverBlock(id) => {
                write!(f, "clue {} crosses a block", id)
            },
        }
    }
}

impl PuzzleDefinition {
    pub fn embedded_solution(&self) -> Result<Option<SolutionKey>, Error> {
        match self.solution {
            Some(ref rows) => Ok(Some(SolutionKey::from_rows(rows)?)),
            None => Ok(None),
        }
    }

    // Checks that the key has the same size as the puzzle and that
    // every clue only covers letters of the key.
    pub fn validate(&self, key: &SolutionKey) -> Result<(), Error> {
        if key.width() != self.width || key.height() != self.height {
            return Err(Error::DimensionMismatch);
        }

        let mut ids = HashSet::new();

        for clue in self.clues.iter() {
            if !ids.insert(clue.id.as_str()) {
                return Err(Error::DuplicateClueId(clue.id.clone()));
            }

            if clue.length == 0 {
                return Err(Error::ZeroLength(clue.id.clone()));
            }

            if clue.positions().count() < clue.length as usize {
                return Err(Error::ClueOutOfBounds(clue.id.clone()));
            }

            for (row, col) in clue.positions() {
                if row >= self.height || col >= self.width {
                    return Err(Error::ClueOutOfBounds(clue.id.clone()));
                }

                if key.letter(row, col).is_none() {
                    return Err(Error::ClueOverBlock(clue.id.clone()));
                }
            }
        }

        Ok(())
    }
}
