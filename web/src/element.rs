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
use crate::host::Host;

/// Create a detached `kind` element carrying `classes` and, when `text` is
/// non-empty, that text as its content.
pub fn node_element<H: Host>(host: &H, kind: &str, classes: &[&str], text: &str) -> H::Element {
    let element = host.create_element(kind);
    for class in classes {
        host.add_class(&element, class);
    }
    if !text.is_empty() {
        host.set_text_content(&element, text);
    }
    element
}
