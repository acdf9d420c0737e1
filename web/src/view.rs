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
use tracing::debug;

use cocktails::{card, Cocktail};

use crate::element::node_element;
use crate::host::Host;

/// Builds cocktail cards and appends them to a container.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardRenderer;

impl CardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Append one card for `cocktail` to `root` and return it.
    pub fn render<H: Host>(&self, host: &H, cocktail: &Cocktail, root: &H::Element) -> H::Element {
        debug!(name = cocktail.name(), "Rendering cocktail card");
        let wrapper = node_element(host, "div", &[card::CARD_WRAPPER_CLASS], "");
        host.set_inner_html(&wrapper, &card::card_content(cocktail).into_string());
        host.append_child(root, &wrapper);
        wrapper
    }
}
