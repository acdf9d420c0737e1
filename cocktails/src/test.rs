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
use crate::card::card_content;
use crate::*;

#[test]
fn test_cocktail_deserializes_from_upstream_shape() {
    let json = r#"{
        "idDrink": "11000",
        "strDrink": "Mojito",
        "strCategory": "Cocktail",
        "strAlcoholic": "Alcoholic",
        "strInstructions": "Muddle mint leaves with sugar and lime juice.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/metwgh1606770327.jpg",
        "strIngredient1": "Light rum"
    }"#;
    let cocktail: Cocktail = serde_json::from_str(json).expect("Failed to parse drink");
    assert_eq!(cocktail.name(), "Mojito");
    assert_eq!(cocktail.category(), "Cocktail");
    assert_eq!(
        cocktail.instructions(),
        "Muddle mint leaves with sugar and lime juice."
    );
    assert_eq!(
        cocktail.thumbnail(),
        "https://www.thecocktaildb.com/images/media/drink/metwgh1606770327.jpg"
    );
}

#[test]
fn test_cocktail_missing_and_null_fields_are_empty() {
    let cocktail: Cocktail =
        serde_json::from_str(r#"{"strDrink": "Margarita", "strInstructions": null}"#)
            .expect("Failed to parse drink");
    assert_eq!(cocktail.name(), "Margarita");
    assert_eq!(cocktail.instructions(), "");
    assert_eq!(cocktail.category(), "");
    assert_eq!(cocktail.thumbnail(), "");
}

#[test]
fn test_card_content_places_fields() {
    let cocktail = Cocktail::new("Mojito")
        .with_thumbnail("https://example.com/mojito.jpg")
        .with_category("Cocktail")
        .with_instructions("Stir.");
    let markup = card_content(&cocktail).into_string();
    assert!(markup.starts_with(r#"<div class="card" style="width: 18rem;">"#));
    assert!(markup.contains(r#"src="https://example.com/mojito.jpg""#));
    assert!(markup.contains(r#"alt="Mojito""#));
    assert!(markup.contains(r#"<h5 class="card-title">Mojito</h5>"#));
    assert!(markup.contains(r#"<h6 class="card-subtitle mb-2 text-muted">Cocktail</h6>"#));
    assert!(markup.contains("<p>Stir.</p>"));
}

#[test]
fn test_card_content_missing_instructions_has_empty_description() {
    let cocktail = Cocktail::new("Mojito").with_category("Cocktail");
    let markup = card_content(&cocktail).into_string();
    assert!(markup.contains("<p></p>"));
    assert!(markup.contains(r#"<h5 class="card-title">Mojito</h5>"#));
}

#[test]
fn test_card_content_default_record_renders_empty_slots() {
    let markup = card_content(&Cocktail::default()).into_string();
    assert!(markup.contains(r#"<h5 class="card-title"></h5>"#));
    assert!(markup.contains(r#"<h6 class="card-subtitle mb-2 text-muted"></h6>"#));
    assert!(markup.contains("<p></p>"));
}

#[test]
fn test_card_content_escapes_upstream_text() {
    let cocktail = Cocktail::new("<script>alert(1)</script>")
        .with_thumbnail(r#"x" onerror="alert(1)"#)
        .with_category("Shots & Shooters")
        .with_instructions("<b>shake</b>");
    let markup = card_content(&cocktail).into_string();
    assert!(!markup.contains("<script>"));
    assert!(!markup.contains("<b>"));
    assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(markup.contains("Shots &amp; Shooters"));
    assert!(markup.contains(r#"src="x&quot; onerror=&quot;alert(1)""#));
}
