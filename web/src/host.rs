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
use futures::future::LocalBoxFuture;
use wasm_bindgen::{prelude::Closure, JsCast, UnwrapThrowExt};
use web_sys::{Document, Element};

/// The slice of the browser the page needs.
///
/// Everything that touches the DOM or the event loop goes through here so
/// the page logic can run against something other than a real document.
pub trait Host {
    type Element: Clone + 'static;

    /// Create a detached element. Invalid kinds are the host's problem.
    fn create_element(&self, kind: &str) -> Self::Element;
    fn add_class(&self, element: &Self::Element, class: &str);
    fn set_text_content(&self, element: &Self::Element, text: &str);
    fn set_inner_html(&self, element: &Self::Element, html: &str);
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);
    fn set_disabled(&self, element: &Self::Element, disabled: bool);
    /// Call `handler` on every click for the rest of the page lifetime.
    fn on_click(&self, element: &Self::Element, handler: Box<dyn Fn()>);
    /// Run `task` on the event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

#[derive(Clone, Debug)]
pub struct BrowserHost {
    document: Document,
}

impl BrowserHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Host for BrowserHost {
    type Element = Element;

    fn create_element(&self, kind: &str) -> Element {
        self.document.create_element(kind).unwrap_throw()
    }

    fn add_class(&self, element: &Element, class: &str) {
        element.class_list().add_1(class).unwrap_throw();
    }

    fn set_text_content(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        parent.append_child(child).unwrap_throw();
    }

    fn set_disabled(&self, element: &Element, disabled: bool) {
        if disabled {
            element.set_attribute("disabled", "").unwrap_throw();
        } else {
            element.remove_attribute("disabled").unwrap_throw();
        }
    }

    fn on_click(&self, element: &Element, handler: Box<dyn Fn()>) {
        let closure = Closure::<dyn Fn()>::wrap(handler);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .unwrap_throw();
        // NOTE(jwall): The listener lives as long as the page so we hand the
        // closure over to js instead of dropping it.
        closure.forget();
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
