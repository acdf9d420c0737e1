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
use maud::{html, Markup};

use crate::Cocktail;

/// Class applied to the element wrapping each card.
pub const CARD_WRAPPER_CLASS: &str = "cocktailDiv";

/// Render the inner markup of a cocktail card.
///
/// All fields are escaped so upstream text can't inject markup into the
/// page.
pub fn card_content(cocktail: &Cocktail) -> Markup {
    html! {
        div class="card" style="width: 18rem;" {
            img class="card-img-top" src=(cocktail.thumbnail()) alt=(cocktail.name());
            div class="card-body" {
                h5 class="card-title" { (cocktail.name()) }
                h6 class="card-subtitle mb-2 text-muted" { (cocktail.category()) }
                p { (cocktail.instructions()) }
            }
        }
    }
}
