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
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, info, instrument};

use crate::api::{CocktailStore, FetchError};
use crate::config::PageConfig;
use crate::element::node_element;
use crate::host::Host;
use crate::view::CardRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The fetch succeeded and this many cards were appended.
    Rendered(usize),
    /// Another fetch was still in flight so nothing happened.
    Busy,
}

/// Owns the page root and wires the trigger button to fetching and
/// rendering cocktails.
pub struct Page<H: Host, S> {
    host: H,
    store: S,
    renderer: CardRenderer,
    root: H::Element,
    config: PageConfig,
    trigger: RefCell<Option<H::Element>>,
    in_flight: Cell<bool>,
}

/// Marks a fetch as in flight and keeps the trigger disabled until dropped.
struct InFlight<'page, H: Host, S> {
    page: &'page Page<H, S>,
}

impl<'page, H: Host, S> InFlight<'page, H, S> {
    fn acquire(page: &'page Page<H, S>) -> Option<Self> {
        if page.in_flight.replace(true) {
            return None;
        }
        page.set_trigger_disabled(true);
        Some(Self { page })
    }
}

impl<'page, H: Host, S> Drop for InFlight<'page, H, S> {
    fn drop(&mut self) {
        self.page.in_flight.set(false);
        self.page.set_trigger_disabled(false);
    }
}

impl<H: Host, S> Page<H, S> {
    pub fn root(&self) -> &H::Element {
        &self.root
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.get()
    }

    fn set_trigger_disabled(&self, disabled: bool) {
        if let Some(trigger) = self.trigger.borrow().as_ref() {
            self.host.set_disabled(trigger, disabled);
        }
    }

    fn create_button(&self) -> H::Element {
        let classes: Vec<&str> = self
            .config
            .trigger_classes
            .iter()
            .map(String::as_str)
            .collect();
        let button = node_element(&self.host, "button", &classes, &self.config.trigger_label);
        self.host.append_child(&self.root, &button);
        button
    }
}

impl<H: Host, S: CocktailStore> Page<H, S> {
    /// Fetch every cocktail and append a card for each in the order they
    /// arrived. Clicks that land while a fetch is in flight are ignored.
    #[instrument(skip_all)]
    pub async fn display_cocktails(&self) -> Result<ClickOutcome, FetchError> {
        let cocktails = {
            let _in_flight = match InFlight::acquire(self) {
                Some(guard) => guard,
                None => return Ok(ClickOutcome::Busy),
            };
            self.store.fetch_cocktails().await?
        };
        for cocktail in cocktails.iter() {
            self.renderer.render(&self.host, cocktail, &self.root);
        }
        Ok(ClickOutcome::Rendered(cocktails.len()))
    }

    async fn handle_click(&self) {
        match self.display_cocktails().await {
            Ok(ClickOutcome::Rendered(count)) => info!(count, "Rendered cocktails"),
            Ok(ClickOutcome::Busy) => debug!("Ignoring click while a fetch is in flight"),
            Err(err) => error!(%err, "Unable to display cocktails"),
        }
    }
}

impl<H, S> Page<H, S>
where
    H: Host + 'static,
    S: CocktailStore + 'static,
{
    pub fn new(host: H, store: S, root: H::Element, config: PageConfig) -> Rc<Self> {
        Rc::new(Self {
            host,
            store,
            renderer: CardRenderer::new(),
            root,
            config,
            trigger: RefCell::new(None),
            in_flight: Cell::new(false),
        })
    }

    /// Append the trigger button to the root and start listening for clicks.
    pub fn init(self: &Rc<Self>) -> H::Element {
        let button = self.create_button();
        let page = Rc::clone(self);
        self.host.on_click(
            &button,
            Box::new(move || {
                let task_page = Rc::clone(&page);
                page.host.spawn(Box::pin(async move {
                    task_page.handle_click().await;
                }));
            }),
        );
        self.trigger.replace(Some(button.clone()));
        debug!("Trigger button is ready");
        button
    }
}
