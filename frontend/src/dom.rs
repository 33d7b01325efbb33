use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::DemoError;

pub fn window() -> Result<Window, DemoError> {
    web_sys::window().ok_or(DemoError::NoWindow)
}

pub fn document() -> Result<Document, DemoError> {
    window()?.document().ok_or(DemoError::NoDocument)
}

/// Every element matching `selector`, skipping anything that isn't an `HtmlElement`.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, DemoError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn select(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn required(document: &Document, selector: &'static str) -> Result<HtmlElement, DemoError> {
    select(document, selector).ok_or(DemoError::MissingElement(selector))
}

/// First descendant of `parent` matching `selector`.
pub fn child(parent: &Element, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), DemoError> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn set_styles(el: &HtmlElement, properties: &[(&str, &str)]) -> Result<(), DemoError> {
    let style = el.style();
    for (property, value) in properties {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn create_div(document: &Document, class: &str, css: &str) -> Result<HtmlElement, DemoError> {
    let el = document.create_element("div")?.unchecked_into::<HtmlElement>();
    el.set_class_name(class);
    el.style().set_css_text(css);
    Ok(el)
}

/// Runs `f` after `ms` milliseconds, unconditionally.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}

/// Shared flag telling async loops whether their owner is still running.
/// Loops check it after every wake-up, so a killed loop stops at its next tick.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// An attached DOM event listener. Dropping it detaches the callback.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, f: F) -> Result<Self, DemoError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach {} listener: {:?}", self.event, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness_is_shared_between_clones() {
        let alive = Liveness::new();
        let loop_copy = alive.clone();
        assert!(loop_copy.is_alive());
        alive.kill();
        assert!(!loop_copy.is_alive());
    }
}
