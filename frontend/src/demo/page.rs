use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry};

use super::device::{active_device, apply_device_transform};
use super::{spawn_after, Handles};
use crate::config::DemoConfig;
use crate::dom::{self, Liveness};
use crate::error::DemoError;

const REVEAL_TARGETS: &str = ".gallery-item, .message, .capability-item";
const ENTRANCE_TARGETS: &str = ".demo-header, .demo-interface";

/// Adds `animate` to each observed element once it scrolls into view.
/// Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn new(document: &Document) -> Result<Self, DemoError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("animate");
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for el in dom::select_all(document, REVEAL_TARGETS)? {
            observer.observe(&el);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Marks the body as loaded and fades the header and interface in, one after another.
fn run_entrance(document: &Document, alive: &Liveness, stagger_ms: u32) -> Result<(), DemoError> {
    if let Some(body) = document.body() {
        body.class_list().add_1("loaded")?;
    }
    for (index, el) in dom::select_all(document, ENTRANCE_TARGETS)?.into_iter().enumerate() {
        let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms);
        spawn_after(alive.clone(), delay, move || {
            let _ = dom::set_styles(&el, &[("opacity", "1"), ("transform", "translateY(0)")]);
        });
    }
    Ok(())
}

/// Re-applies whichever device preview is active. Never restarts the demo.
fn reapply_active_device(document: &Document) -> Result<(), DemoError> {
    if let (Some(mockup), Some(device)) = (dom::select(document, ".website-mockup"), active_device(document)) {
        apply_device_transform(&mockup, device)?;
    }
    Ok(())
}

pub(super) fn init(document: &Document, config: &DemoConfig, handles: &mut Handles) -> Result<(), DemoError> {
    let window = dom::window()?;

    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
            dom::set_style(&root, "scroll-behavior", "smooth")?;
        }
    }

    if supports_intersection_observer() {
        handles.observe(RevealObserver::new(document)?);
    } else {
        log::debug!("IntersectionObserver unavailable, skipping reveal animations");
    }

    {
        let document = document.clone();
        handles.listen(&window, "resize", move |_| {
            if let Err(e) = reapply_active_device(&document) {
                log::warn!("Resize re-layout failed: {}", e);
            }
        })?;
    }

    let alive = handles.liveness();
    let stagger_ms = config.entrance_stagger_ms;
    if document.ready_state() == "complete" {
        run_entrance(document, &alive, stagger_ms)?;
    } else {
        let document = document.clone();
        handles.listen(&window, "load", move |_| {
            if let Err(e) = run_entrance(&document, &alive, stagger_ms) {
                log::warn!("Entrance animation failed: {}", e);
            }
        })?;
    }
    Ok(())
}
