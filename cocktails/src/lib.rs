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
//! The cocktail record as served by TheCocktailDB and the card markup used
//! to display one.
pub mod card;

use serde::{Deserialize, Serialize};

/// A single drink from the cocktail database.
///
/// Only the fields needed to render a card are kept. Every field is
/// optional because the upstream data is not validated and a missing or
/// `null` value should just render as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cocktail {
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
}

impl Cocktail {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_thumbnail<S: Into<String>>(mut self, url: S) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_instructions<S: Into<String>>(mut self, instructions: S) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn thumbnail(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn instructions(&self) -> &str {
        self.instructions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod test;
