use web_sys::{Document, HtmlElement};

use super::Handles;
use crate::config::DemoConfig;
use crate::dom;
use crate::error::DemoError;

const SELECTOR: &str = ".capability-item";

/// Circular cursor over a fixed, non-empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    cursor: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { cursor: 0, len })
    }

    /// Returns the index to highlight on this tick and moves on to the next one.
    pub fn tick(&mut self) -> usize {
        let active = self.cursor;
        self.cursor = (self.cursor + 1) % self.len;
        active
    }
}

fn highlight(items: &[HtmlElement], active: usize) {
    for (i, item) in items.iter().enumerate() {
        let _ = item.class_list().toggle_with_force("active", i == active);
    }
}

pub(super) fn init(document: &Document, config: &DemoConfig, handles: &mut Handles) -> Result<(), DemoError> {
    let items = dom::select_all(document, SELECTOR)?;
    let mut rotation = Rotation::new(items.len()).ok_or(DemoError::EmptySelection(SELECTOR))?;

    handles.interval(config.rotation_interval_ms, move || {
        highlight(&items, rotation.tick());
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_rotation() {
        assert!(Rotation::new(0).is_none());
    }

    #[test]
    fn test_tick_k_highlights_k_mod_len() {
        let mut rotation = Rotation::new(4).unwrap();
        for k in 0..13 {
            assert_eq!(rotation.tick(), k % 4);
        }
    }

    #[test]
    fn test_single_item_always_active() {
        let mut rotation = Rotation::new(1).unwrap();
        assert!((0..5).all(|_| rotation.tick() == 0));
    }
}
