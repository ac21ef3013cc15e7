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

// Requests and responses for the puzzle server. Nothing here does any
// I/O so that the same code can be used by the browser fetch loop and
// tested natively.

use serde::{Deserialize, Serialize};
use std::fmt;
use super::catalog::{self, Catalog};
use super::definition::{self, PuzzleDefinition};
use super::puzzle::CrosswordPuzzle;

pub const WALLET_HEADER: &str = "X-Wallet-Address";
pub const PUZZLE_TYPE: &str = "crossword";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    // Prepended to every path. Empty means the same origin as the page.
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Deserialize)]
struct PuzzleResponse {
    puzzle: PuzzleDefinition,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    puzzle_id: &'a str,
    #[serde(rename = "type")]
    puzzle_type: &'static str,
    solution: &'a [String],
    time_seconds: u32,
}

#[derive(Debug)]
pub enum Error {
    RemoteFetch(u16),
    RemoteVerify(u16),
    Network(String),
    Encode(serde_json::Error),
    InvalidResponse(serde_json::Error),
    InvalidPuzzle(String, definition::Error),
    Configuration(catalog::Error),
}

impl From<catalog::Error> for Error {
    fn from(e: catalog::Error) -> Error {
        Error::Configuration(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::RemoteFetch(_) => write!(f, "failed to fetch crossword"),
            Error::RemoteVerify(_) => {
                write!(f, "failed to verify crossword solution")
            },
            Error::Network(e) => write!(f, "network error: {}", e),
            Error::Encode(e) => write!(f, "error encoding request: {}", e),
            Error::InvalidResponse(e) => {
                write!(f, "invalid response from server: {}", e)
            },
            Error::InvalidPuzzle(id, e) => write!(f, "{}: {}", id, e),
            Error::Configuration(e) => write!(f, "{}", e),
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn base_headers(wallet_address: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];

    if let Some(wallet_address) = wallet_address {
        headers.push((WALLET_HEADER, wallet_address.to_string()));
    }

    headers
}

pub fn daily_request(
    config: &GatewayConfig,
    date: &str,
    wallet_address: Option<&str>,
) -> Request {
    Request {
        method: Method::Get,
        url: format!(
            "{}/api/puzzles/daily?date={}&type={}",
            config.base_url,
            date,
            PUZZLE_TYPE,
        ),
        headers: base_headers(wallet_address),
        body: None,
    }
}

pub fn by_id_request(
    config: &GatewayConfig,
    id: &str,
    wallet_address: Option<&str>,
) -> Request {
    Request {
        method: Method::Get,
        url: format!("{}/api/puzzles/{}", config.base_url, id),
        headers: base_headers(wallet_address),
        body: None,
    }
}

pub fn verify_request(
    config: &GatewayConfig,
    puzzle_id: &str,
    solution: &[String],
    time_seconds: u32,
    wallet_address: &str,
) -> Result<Request, Error> {
    let body = serde_json::to_string(&VerifyRequest {
        puzzle_id,
        puzzle_type: PUZZLE_TYPE,
        solution,
        time_seconds,
    }).map_err(Error::Encode)?;

    Ok(Request {
        method: Method::Post,
        url: format!("{}/api/puzzles/verify", config.base_url),
        headers: base_headers(Some(wallet_address)),
        body: Some(body),
    })
}

// Used for both the daily and the by-id responses
pub fn decode_puzzle(
    status: u16,
    body: &str,
) -> Result<PuzzleDefinition, Error> {
    if !is_success(status) {
        return Err(Error::RemoteFetch(status));
    }

    serde_json::from_str::<PuzzleResponse>(body)
        .map(|response| response.puzzle)
        .map_err(Error::InvalidResponse)
}

pub fn decode_verify(status: u16, body: &str) -> Result<VerifyResult, Error> {
    if !is_success(status) {
        return Err(Error::RemoteVerify(status));
    }

    serde_json::from_str(body).map_err(Error::InvalidResponse)
}

// Turns a puzzle from the server into a playable one. The server can
// send its own solution key, otherwise the key comes from the catalog
// entry with the same id.
pub fn materialize(
    catalog: &Catalog,
    definition: PuzzleDefinition,
) -> Result<CrosswordPuzzle, Error> {
    let invalid = |e| Error::InvalidPuzzle(definition.id.clone(), e);

    match definition.embedded_solution().map_err(invalid)? {
        Some(key) => {
            definition.validate(&key).map_err(invalid)?;
            Ok(CrosswordPuzzle::new(definition, &key))
        },
        None => Ok(catalog.build_puzzle(&definition)?),
    }
}
