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

use std::fmt;

// Character marking a cell that isn’t part of any clue
pub const BLOCK: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionKey {
    values: Box<[char]>,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyKey,
    InvalidLetter(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyKey => write!(f, "empty solution key"),
            Error::InvalidLetter(ch) => {
                write!(f, "invalid letter in solution key: {:?}", ch)
            },
        }
    }
}

impl SolutionKey {
    pub fn new(s: &str) -> Result<SolutionKey, Error> {
        SolutionKey::from_rows(s.lines())
    }

    pub fn from_rows<I, S>(rows: I) -> Result<SolutionKey, Error>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let mut rows = rows.into_iter()
            .map(|row| row.as_ref().trim_end().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

        if width < 1 {
            return Err(Error::EmptyKey);
        }

        let mut values = Vec::with_capacity(width * rows.len());

        for row in rows.iter() {
            if let Some(&ch) = row.iter().find(|&&ch| {
                ch != BLOCK && !ch.is_uppercase()
            }) {
                return Err(Error::InvalidLetter(ch));
            }

            values.extend(row.iter());

            // Short rows are padded out with blocks
            values.resize(values.len() + width - row.len(), BLOCK);
        }

        Ok(SolutionKey {
            values: values.into_boxed_slice(),
            width: width as u32,
            height: rows.len() as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn at(&self, row: u32, col: u32) -> char {
        assert!(col < self.width);

        self.values[row as usize * self.width as usize + col as usize]
    }

    pub fn letter(&self, row: u32, col: u32) -> Option<char> {
        let ch = self.at(row, col);

        (ch != BLOCK).then_some(ch)
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.values.chunks(self.width as usize)
            .map(|row| row.iter().collect::<String>())
    }
}

impl fmt::Display for SolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }

        Ok(())
    }
}
