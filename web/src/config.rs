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
use client_api::DEFAULT_API_ROOT;

/// Id of the container the page renders into.
pub const ROOT_ID: &str = "root";
/// Attribute on the root element that overrides the api root.
pub const API_ROOT_ATTR: &str = "data-api-root";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub api_root: String,
    pub root_id: String,
    pub trigger_label: String,
    pub trigger_classes: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_owned(),
            root_id: ROOT_ID.to_owned(),
            trigger_label: "Click me!".to_owned(),
            trigger_classes: vec!["btn".to_owned(), "btn-primary".to_owned()],
        }
    }
}

impl PageConfig {
    /// Use `api_root` instead of the default unless it is blank.
    pub fn with_api_root(mut self, api_root: Option<String>) -> Self {
        if let Some(root) = api_root {
            let root = root.trim();
            if !root.is_empty() {
                self.api_root = root.to_owned();
            }
        }
        self
    }
}
