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
//! Wire types for TheCocktailDB JSON api.
use serde::{Deserialize, Serialize};

use cocktails::Cocktail;

/// Root of the public v1 api using the shared test key.
pub const DEFAULT_API_ROOT: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Body of a `search.php` response.
///
/// The api answers with `{"drinks": null}` when nothing matched.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct DrinksResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Cocktail>>,
}

impl DrinksResponse {
    pub fn into_drinks(self) -> Option<Vec<Cocktail>> {
        self.drinks
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Json(String),
    MissingDrinks,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Json(msg) => write!(f, "invalid json body: {}", msg),
            ParseError::MissingDrinks => write!(f, "response has no drinks"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(format!("{}", err))
    }
}

/// Path of the unfiltered search endpoint under `root`.
pub fn search_path(root: &str) -> String {
    let mut path = root.trim_end_matches('/').to_owned();
    path.push_str("/search.php?s");
    path
}

/// Decode a search response body into the list of drinks it carries.
pub fn parse_drinks(body: &str) -> Result<Vec<Cocktail>, ParseError> {
    let resp: DrinksResponse = serde_json::from_str(body)?;
    resp.into_drinks().ok_or(ParseError::MissingDrinks)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_search_path() {
        assert_eq!(
            search_path(DEFAULT_API_ROOT),
            "https://www.thecocktaildb.com/api/json/v1/1/search.php?s"
        );
        assert_eq!(search_path("/mirror/"), "/mirror/search.php?s");
    }

    #[test]
    fn test_parse_drinks_keeps_order() {
        let body = r#"{"drinks": [
            {"strDrink": "Mojito", "strCategory": "Cocktail"},
            {"strDrink": "Margarita", "strCategory": "Ordinary Drink"}
        ]}"#;
        let drinks = parse_drinks(body).expect("Failed to parse drinks");
        let names: Vec<&str> = drinks.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Mojito", "Margarita"]);
    }

    #[test]
    fn test_parse_drinks_empty_list() {
        assert_eq!(parse_drinks(r#"{"drinks": []}"#), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_drinks_missing_or_null_key() {
        assert_eq!(parse_drinks("{}"), Err(ParseError::MissingDrinks));
        assert_eq!(
            parse_drinks(r#"{"drinks": null}"#),
            Err(ParseError::MissingDrinks)
        );
    }

    #[test]
    fn test_parse_drinks_invalid_json() {
        match parse_drinks("<html>Service Unavailable</html>") {
            Err(ParseError::Json(_)) => {}
            other => panic!("expected a json error, got {:?}", other),
        }
        match parse_drinks(r#"{"drinks": "nope"}"#) {
            Err(ParseError::Json(_)) => {}
            other => panic!("expected a json error, got {:?}", other),
        }
    }
}
