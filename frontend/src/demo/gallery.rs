use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, HtmlElement};

use super::Handles;
use crate::config::DemoConfig;
use crate::dom;
use crate::error::DemoError;

const RIPPLE_KEYFRAMES_ID: &str = "canvas-demo-ripple-keyframes";

const RIPPLE_KEYFRAMES: &str = r#"
    @keyframes ripple {
        to {
            width: 100px;
            height: 100px;
            opacity: 0;
        }
    }
"#;

const RIPPLE_CSS: &str = "position: absolute; top: 50%; left: 50%; width: 0; height: 0; \
    background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: translate(-50%, -50%); \
    animation: ripple 0.6s ease-out; pointer-events: none;";

const MODAL_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background: rgba(0, 0, 0, 0.9); display: flex; align-items: center; justify-content: center; \
    z-index: 1000; opacity: 0; transition: opacity 0.3s ease;";

fn preview_css(background: &str) -> String {
    format!(
        "width: 80%; max-width: 600px; height: 400px; background: {}; border-radius: 12px; \
         transform: scale(0.8); transition: transform 0.3s ease; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);",
        background
    )
}

/// Injects the ripple keyframes once per document.
fn ensure_ripple_keyframes(document: &Document) -> Result<(), DemoError> {
    if document.get_element_by_id(RIPPLE_KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(RIPPLE_KEYFRAMES_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let head = document.head().ok_or(DemoError::MissingElement("head"))?;
    head.append_child(&style)?;
    Ok(())
}

/// Spawns an expanding circle inside `item` that removes itself after `ripple_ms`.
pub fn create_ripple(document: &Document, item: &HtmlElement, ripple_ms: u32) -> Result<(), DemoError> {
    let ripple = dom::create_div(document, "ripple-effect", RIPPLE_CSS)?;
    dom::set_style(item, "position", "relative")?;
    item.append_child(&ripple)?;
    ensure_ripple_keyframes(document)?;

    dom::after(ripple_ms, move || ripple.remove());
    Ok(())
}

/// Opens a full-screen preview using the tile's computed background.
/// Clicking the overlay fades it out and removes it.
pub fn show_image_preview(document: &Document, item: &HtmlElement, config: &DemoConfig) -> Result<(), DemoError> {
    let background = dom::window()?
        .get_computed_style(item)?
        .map(|style| style.get_property_value("background"))
        .transpose()?
        .unwrap_or_default();

    let modal = dom::create_div(document, "image-preview-modal", MODAL_CSS)?;
    let preview = dom::create_div(document, "", &preview_css(&background))?;
    modal.append_child(&preview)?;
    let body = document.body().ok_or(DemoError::MissingElement("body"))?;
    body.append_child(&modal)?;

    {
        let modal = modal.clone();
        let preview = preview.clone();
        dom::after(config.modal_open_delay_ms, move || {
            let _ = dom::set_style(&modal, "opacity", "1");
            let _ = dom::set_style(&preview, "transform", "scale(1)");
        });
    }

    let close_ms = config.modal_close_ms;
    let target = modal.clone();
    let on_click = Closure::once_into_js(move |_: Event| {
        let _ = dom::set_style(&target, "opacity", "0");
        let _ = dom::set_style(&preview, "transform", "scale(0.8)");
        dom::after(close_ms, move || target.remove());
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    modal.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        on_click.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

pub(super) fn init(document: &Document, config: &DemoConfig, handles: &mut Handles) -> Result<(), DemoError> {
    let items = dom::select_all(document, ".gallery-item")?;
    let config = *config;

    for (index, item) in items.iter().enumerate() {
        {
            let document = document.clone();
            let this = item.clone();
            handles.listen(item, "mouseenter", move |_| {
                let _ = dom::set_styles(&this, &[("transform", "scale(1.05) rotateY(5deg)"), ("z-index", "10")]);
                if let Err(e) = create_ripple(&document, &this, config.ripple_ms) {
                    log::warn!("Ripple failed: {}", e);
                }
            })?;
        }
        {
            let this = item.clone();
            handles.listen(item, "mouseleave", move |_| {
                let _ = dom::set_styles(&this, &[("transform", "scale(1) rotateY(0deg)"), ("z-index", "1")]);
            })?;
        }
        {
            let document = document.clone();
            let this = item.clone();
            handles.listen(item, "click", move |_| {
                log::debug!("Previewing gallery item {}", index);
                if let Err(e) = show_image_preview(&document, &this, &config) {
                    log::warn!("Image preview failed: {}", e);
                }
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_copies_background() {
        let css = preview_css("linear-gradient(45deg, #111, #222)");
        assert!(css.contains("background: linear-gradient(45deg, #111, #222);"));
        assert!(css.contains("transform: scale(0.8)"));
    }

    #[test]
    fn test_ripple_animation_matches_keyframes() {
        assert!(RIPPLE_CSS.contains("animation: ripple 0.6s"));
        assert!(RIPPLE_KEYFRAMES.contains("@keyframes ripple"));
        assert!(MODAL_CSS.contains("opacity: 0"));
    }
}
