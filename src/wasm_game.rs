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

// Interface used by the web page. The page owns the rendering and the
// input handling and calls in here for everything to do with the
// puzzle itself.

use wasm_bindgen::prelude::*;
use web_sys::console;
use super::catalog::Catalog;
use super::clue::Direction;
use super::daily;
use super::definition::{Difficulty, PuzzleDefinition};
use super::gateway::{self, GatewayConfig};
use super::puzzle::CrosswordPuzzle;
use super::wasm_gateway::Gateway;

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    let message = e.to_string();
    console::log_1(&message.as_str().into());
    js_sys::Error::new(&message).into()
}

fn parse_difficulty(difficulty: &str) -> Result<Difficulty, JsValue> {
    difficulty.parse::<Difficulty>().map_err(to_js_error)
}

fn parse_letter(letter: Option<String>) -> Option<char> {
    letter.and_then(|s| s.chars().next())
}

#[wasm_bindgen]
pub struct CrosswordGame {
    puzzle: CrosswordPuzzle,
}

#[wasm_bindgen]
impl CrosswordGame {
    #[wasm_bindgen(constructor)]
    pub fn new(
        difficulty: &str,
        seed: Option<u32>,
    ) -> Result<CrosswordGame, JsValue> {
        let difficulty = parse_difficulty(difficulty)?;

        Ok(CrosswordGame {
            puzzle: Catalog::builtin().puzzle(difficulty, seed),
        })
    }

    pub fn daily(date: &str) -> CrosswordGame {
        CrosswordGame {
            puzzle: daily::daily_puzzle(Catalog::builtin(), date),
        }
    }

    // Makes a game out of a puzzle object in the same form the server
    // sends
    #[wasm_bindgen(js_name = fromDefinition)]
    pub fn from_definition(value: JsValue) -> Result<CrosswordGame, JsValue> {
        let definition: PuzzleDefinition =
            serde_wasm_bindgen::from_value(value)?;

        let puzzle = gateway::materialize(Catalog::builtin(), definition)
            .map_err(to_js_error)?;

        Ok(CrosswordGame { puzzle })
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.puzzle.id().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.puzzle.title().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn difficulty(&self) -> String {
        self.puzzle.difficulty().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.puzzle.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.puzzle.height()
    }

    pub fn clues(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.puzzle.clues())?)
    }

    // Rows of cells
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        let rows = self.puzzle.grid().rows().collect::<Vec<_>>();

        Ok(serde_wasm_bindgen::to_value(&rows)?)
    }

    #[wasm_bindgen(js_name = cellsForClue)]
    pub fn cells_for_clue(&self, clue_id: &str) -> Result<JsValue, JsValue> {
        let Some(clue) = self.puzzle.clue(clue_id)
        else {
            return Ok(JsValue::NULL);
        };

        Ok(serde_wasm_bindgen::to_value(&self.puzzle.cells_for_clue(clue))?)
    }

    // Returns the id of the clue
    #[wasm_bindgen(js_name = clueForCell)]
    pub fn clue_for_cell(
        &self,
        row: u32,
        col: u32,
        preferred_direction: Option<String>,
    ) -> Result<Option<String>, JsValue> {
        let preferred_direction = Direction::parse_preference(
            preferred_direction.as_deref(),
        ).map_err(|e| {
            to_js_error(format!(
                "{}: {:?}",
                e,
                preferred_direction.as_deref().unwrap_or_default(),
            ))
        })?;

        Ok(self.puzzle.clue_for_cell(row, col, preferred_direction)
            .map(|clue| clue.id.clone()))
    }

    #[wasm_bindgen(js_name = setUserLetter)]
    pub fn set_user_letter(
        &mut self,
        row: u32,
        col: u32,
        letter: Option<String>,
    ) -> bool {
        self.puzzle.set_user_letter(row, col, parse_letter(letter))
    }

    pub fn clear(&mut self) {
        self.puzzle.clear_user_letters();
    }

    #[wasm_bindgen(js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }

    // Keys in the form “row-col”
    #[wasm_bindgen(js_name = incorrectCells)]
    pub fn incorrect_cells(&self) -> js_sys::Array {
        self.puzzle.incorrect_cells()
            .into_iter()
            .map(|key| JsValue::from_str(&key.to_string()))
            .collect()
    }

    #[wasm_bindgen(js_name = filledCount)]
    pub fn filled_count(&self) -> u32 {
        self.puzzle.filled_count() as u32
    }

    #[wasm_bindgen(js_name = playableCount)]
    pub fn playable_count(&self) -> u32 {
        self.puzzle.playable_count() as u32
    }

    #[wasm_bindgen(js_name = userSolution)]
    pub fn user_solution(&self) -> js_sys::Array {
        self.puzzle.user_solution()
            .iter()
            .map(|row| JsValue::from_str(row))
            .collect()
    }

    // Independent copy of the game including the letters entered so far
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> CrosswordGame {
        CrosswordGame { puzzle: self.puzzle.clone() }
    }
}

#[wasm_bindgen(js_name = dailySeed)]
pub fn daily_seed(date: &str) -> u32 {
    daily::daily_seed(date)
}

#[wasm_bindgen(js_name = dailyDifficulty)]
pub fn daily_difficulty(date: &str) -> String {
    daily::daily_difficulty(Catalog::builtin(), date).to_string()
}

#[wasm_bindgen(js_name = listPuzzles)]
pub fn list_puzzles(difficulty: &str) -> Result<JsValue, JsValue> {
    let difficulty = parse_difficulty(difficulty)?;
    let definitions = Catalog::builtin().list_by_difficulty(difficulty);

    Ok(serde_wasm_bindgen::to_value(&definitions)?)
}

fn gateway(base_url: Option<String>) -> Gateway {
    Gateway::new(GatewayConfig { base_url: base_url.unwrap_or_default() })
}

#[wasm_bindgen(js_name = fetchDailyCrossword)]
pub async fn fetch_daily_crossword(
    base_url: Option<String>,
    date: String,
    wallet_address: Option<String>,
) -> Result<CrosswordGame, JsValue> {
    let definition = gateway(base_url)
        .fetch_daily(&date, wallet_address.as_deref())
        .await
        .map_err(to_js_error)?;

    let puzzle = gateway::materialize(Catalog::builtin(), definition)
        .map_err(to_js_error)?;

    Ok(CrosswordGame { puzzle })
}

#[wasm_bindgen(js_name = fetchCrosswordById)]
pub async fn fetch_crossword_by_id(
    base_url: Option<String>,
    id: String,
    wallet_address: Option<String>,
) -> Result<CrosswordGame, JsValue> {
    let definition = gateway(base_url)
        .fetch_by_id(&id, wallet_address.as_deref())
        .await
        .map_err(to_js_error)?;

    let puzzle = gateway::materialize(Catalog::builtin(), definition)
        .map_err(to_js_error)?;

    Ok(CrosswordGame { puzzle })
}

// Resolves to an object with `valid` and optionally `score`
#[wasm_bindgen(js_name = verifyCrosswordSolution)]
pub async fn verify_crossword_solution(
    base_url: Option<String>,
    puzzle_id: String,
    solution: Vec<String>,
    time_seconds: u32,
    wallet_address: String,
) -> Result<JsValue, JsValue> {
    let result = gateway(base_url)
        .verify(&puzzle_id, &solution, time_seconds, &wallet_address)
        .await
        .map_err(to_js_error)?;

    Ok(serde_wasm_bindgen::to_value(&result)?)
}

#[wasm_bindgen(start)]
pub fn init_crossword() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
