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
pub mod api;
pub mod config;
pub mod element;
pub mod host;
mod js_lib;
pub mod page;
pub mod view;

use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, fmt::format::Pretty, prelude::*};
use tracing_web::{performance_layer, MakeWebConsoleWriter};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use api::HttpStore;
use config::{PageConfig, API_ROOT_ATTR};
use host::BrowserHost;
use page::Page;

fn init_tracing() {
    let level = if cfg!(feature = "debug_logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        // The browser console doesn't understand ansi escapes.
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());
    tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_tracing();
    let config = PageConfig::default();
    let root = match js_lib::get_element_by_id::<Element>(&config.root_id) {
        Ok(Some(root)) => root,
        Ok(None) | Err(_) => {
            error!(id = %config.root_id, "Page root is missing");
            return Err(JsValue::from_str(&format!(
                "No element with id `{}` in the page",
                config.root_id
            )));
        }
    };
    let config = config.with_api_root(root.get_attribute(API_ROOT_ATTR));
    info!(api_root = %config.api_root, "Starting cocktail page");
    let store = HttpStore::new(config.api_root.clone());
    let page = Page::new(BrowserHost::new(js_lib::document()), store, root, config);
    page.init();
    Ok(())
}
