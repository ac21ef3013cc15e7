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

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::console;
use super::definition::PuzzleDefinition;
use super::gateway::{self, Error, GatewayConfig, Request, VerifyResult};

fn js_error(value: JsValue) -> Error {
    Error::Network(
        value.as_string()
            .or_else(|| {
                value.dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| "fetch failed".to_string())
    )
}

// Performs one round trip per call. There are no retries and nothing
// is cached.
pub struct Gateway {
    config: GatewayConfig,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Gateway {
        Gateway { config }
    }

    async fn send(&self, request: &Request) -> Result<(u16, String), Error> {
        let Some(window) = web_sys::window()
        else {
            return Err(Error::Network("failed to get window".to_string()));
        };

        let headers = web_sys::Headers::new().map_err(js_error)?;

        for (name, value) in request.headers.iter() {
            headers.set(name, value).map_err(js_error)?;
        }

        let mut request_init = web_sys::RequestInit::new();
        request_init.method(request.method.name());
        request_init.cache(web_sys::RequestCache::NoStore);
        request_init.headers(&headers);

        if let Some(ref body) = request.body {
            request_init.body(Some(&JsValue::from_str(body)));
        }

        let promise = window.fetch_with_str_and_init(
            &request.url,
            &request_init,
        );

        let response: web_sys::Response = JsFuture::from(promise)
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        if !(200..300).contains(&status) {
            console::log_1(&format!(
                "{} {} returned {}",
                request.method.name(),
                request.url,
                status,
            ).into());
        }

        Ok((status, text))
    }

    pub async fn fetch_daily(
        &self,
        date: &str,
        wallet_address: Option<&str>,
    ) -> Result<PuzzleDefinition, Error> {
        let request = gateway::daily_request(
            &self.config,
            date,
            wallet_address,
        );
        let (status, body) = self.send(&request).await?;

        gateway::decode_puzzle(status, &body)
    }

    pub async fn fetch_by_id(
        &self,
        id: &str,
        wallet_address: Option<&str>,
    ) -> Result<PuzzleDefinition, Error> {
        let request = gateway::by_id_request(&self.config, id, wallet_address);
        let (status, body) = self.send(&request).await?;

        gateway::decode_puzzle(status, &body)
    }

    pub async fn verify(
        &self,
        puzzle_id: &str,
        solution: &[String],
        time_seconds: u32,
        wallet_address: &str,
    ) -> Result<VerifyResult, Error> {
        let request = gateway::verify_request(
            &self.config,
            puzzle_id,
            solution,
            time_seconds,
            wallet_address,
        )?;
        let (status, body) = self.send(&request).await?;

        gateway::decode_verify(status, &body)
    }
}
