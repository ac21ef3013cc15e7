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

#[cfg(target_arch = "wasm32")]
mod wasm_game;
#[cfg(target_arch = "wasm32")]
mod wasm_gateway;
#[cfg(any(target_arch = "wasm32", test))]
mod solution_key;
#[cfg(any(target_arch = "wasm32", test))]
mod clue;
#[cfg(any(target_arch = "wasm32", test))]
mod definition;
#[cfg(any(target_arch = "wasm32", test))]
mod grid;
#[cfg(any(target_arch = "wasm32", test))]
mod puzzle;
#[cfg(any(target_arch = "wasm32", test))]
mod catalog;
#[cfg(any(target_arch = "wasm32", test))]
mod daily;
#[cfg(any(target_arch = "wasm32", test))]
mod gateway;
