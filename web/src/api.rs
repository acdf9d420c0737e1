// Copyright 2022 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use async_trait::async_trait;
use tracing::{debug, instrument};
use wasm_bindgen::JsValue;

use client_api::{parse_drinks, search_path, ParseError};
use cocktails::Cocktail;

/// The one way fetching cocktails can fail.
///
/// The cause is kept as text for the logs; callers never see the
/// underlying error types.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError(String);

impl FetchError {
    pub fn cause(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch failed: {}", self.0)
    }
}

impl std::error::Error for FetchError {}

impl From<gloo_net::Error> for FetchError {
    fn from(item: gloo_net::Error) -> Self {
        FetchError(format!("{}", item))
    }
}

impl From<ParseError> for FetchError {
    fn from(item: ParseError) -> Self {
        FetchError(format!("{}", item))
    }
}

impl From<JsValue> for FetchError {
    fn from(item: JsValue) -> Self {
        FetchError(format!("{:?}", item))
    }
}

impl From<String> for FetchError {
    fn from(item: String) -> Self {
        FetchError(item)
    }
}

impl From<&'static str> for FetchError {
    fn from(item: &'static str) -> Self {
        FetchError(item.to_owned())
    }
}

#[async_trait(?Send)]
/// Somewhere cocktails can be fetched from.
pub trait CocktailStore {
    /// Fetch every cocktail the source offers, in the order it returns them.
    async fn fetch_cocktails(&self) -> Result<Vec<Cocktail>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn search_path(&self) -> String {
        search_path(&self.root)
    }
}

#[async_trait(?Send)]
impl CocktailStore for HttpStore {
    #[instrument(skip_all)]
    async fn fetch_cocktails(&self) -> Result<Vec<Cocktail>, FetchError> {
        let path = self.search_path();
        debug!(path, "Fetching cocktails");
        let resp = gloo_net::http::Request::get(&path).send().await?;
        if !resp.ok() {
            return Err(format!("Status: {}", resp.status()).into());
        }
        let body = resp.text().await?;
        let drinks = parse_drinks(&body)?;
        debug!(count = drinks.len(), "We got a valid response back!");
        Ok(drinks)
    }
}
