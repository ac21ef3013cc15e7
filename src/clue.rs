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
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidDirection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidDirection => write!(f, "invalid direction"),
        }
    }
}

impl Direction {
    // Returns the position `offset` cells along from the given
    // position, or None if it can’t be represented.
    pub fn step(self, row: u32, col: u32, offset: u32) -> Option<(u32, u32)> {
        match self {
            Direction::Across => Some((row, col.checked_add(offset)?)),
            Direction::Down => Some((row.checked_add(offset)?, col)),
        }
    }

    // A missing preference is fine but one that doesn’t name a
    // direction is an error
    pub fn parse_preference(
        s: Option<&str>,
    ) -> Result<Option<Direction>, Error> {
        s.map(str::parse::<Direction>).transpose()
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction, Error> {
        match s {
            "across" => Ok(Direction::Across),
            "down" => Ok(Direction::Down),
            _ => Err(Error::InvalidDirection),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub id: String,
    pub number: u32,
    pub direction: Direction,
    pub row: u32,
    pub col: u32,
    pub length: u32,
    pub prompt: String,
}

impl Clue {
    pub fn start(&self) -> (u32, u32) {
        (self.row, self.col)
    }

    // Every position of the span in order. The positions aren’t
    // checked against any grid.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.length).filter_map(|offset| {
            self.direction.step(self.row, self.col, offset)
        })
    }

    pub fn covers(&self, row: u32, col: u32) -> bool {
        let (along, fixed, start, start_fixed) = match self.direction {
            Direction::Across => (col, row, self.col, self.row),
            Direction::Down => (row, col, self.row, self.col),
        };

        fixed == start_fixed
            && along >= start
            && along - start < self.length
    }
}
