//! Glow helpers for page markup outside the demo; nothing in the demo calls them.
#![allow(dead_code)]

use web_sys::HtmlElement;

use crate::dom;
use crate::error::DemoError;

pub const DEFAULT_GLOW_COLOR: &str = "#00d4ff";

/// Two-layer box-shadow; the color gets hex alpha suffixes appended.
pub fn glow_shadow(color: &str) -> String {
    format!("0 0 20px {}40, 0 0 40px {}20", color, color)
}

pub fn create_glow_effect(el: &HtmlElement, color: Option<&str>) -> Result<(), DemoError> {
    dom::set_style(el, "box-shadow", &glow_shadow(color.unwrap_or(DEFAULT_GLOW_COLOR)))
}

pub fn remove_glow_effect(el: &HtmlElement) -> Result<(), DemoError> {
    el.style().remove_property("box-shadow")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_shadow() {
        assert_eq!(glow_shadow(DEFAULT_GLOW_COLOR), "0 0 20px #00d4ff40, 0 0 40px #00d4ff20");
        assert_eq!(glow_shadow("#a855f7"), "0 0 20px #a855f740, 0 0 40px #a855f720");
    }
}
