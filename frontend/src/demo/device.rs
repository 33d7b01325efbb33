use web_sys::{Document, HtmlElement};

use super::Handles;
use crate::dom;
use crate::error::DemoError;

pub const MOCKUP_CLASS: &str = "website-mockup";
pub const MOCKUP_TRANSITION: &str = "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    /// Parses a `data-device` tag. Anything unrecognised is treated as desktop.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("tablet") => Device::Tablet,
            Some("mobile") => Device::Mobile,
            _ => Device::Desktop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: &'static str,
    pub rows: &'static str,
}

pub const DEFAULT_GRID: GridLayout = GridLayout {
    columns: "2fr 1fr 1fr",
    rows: "1fr 1fr",
};

pub const STACKED_GRID: GridLayout = GridLayout {
    columns: "1fr",
    rows: "repeat(6, 120px)",
};

/// Inline styles a device preview applies to the mockup and its gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceLayout {
    pub transform: &'static str,
    pub max_width: &'static str,
    pub margin: &'static str,
    pub grid: GridLayout,
}

impl DeviceLayout {
    pub fn for_device(device: Device) -> Self {
        match device {
            Device::Tablet => Self {
                transform: "scale(0.8)",
                max_width: "768px",
                margin: "0 auto",
                grid: DEFAULT_GRID,
            },
            Device::Mobile => Self {
                transform: "scale(0.6)",
                max_width: "375px",
                margin: "0 auto",
                grid: STACKED_GRID,
            },
            Device::Desktop => Self {
                transform: "scale(1)",
                max_width: "none",
                margin: "0",
                grid: DEFAULT_GRID,
            },
        }
    }
}

pub fn apply_device_transform(mockup: &HtmlElement, device: Device) -> Result<(), DemoError> {
    let layout = DeviceLayout::for_device(device);

    mockup.set_class_name(MOCKUP_CLASS);
    dom::set_styles(
        mockup,
        &[
            ("transform", layout.transform),
            ("max-width", layout.max_width),
            ("margin", layout.margin),
        ],
    )?;

    if let Some(grid) = dom::child(mockup, ".gallery-grid") {
        dom::set_styles(
            &grid,
            &[
                ("grid-template-columns", layout.grid.columns),
                ("grid-template-rows", layout.grid.rows),
            ],
        )?;
    }

    dom::set_style(mockup, "transition", MOCKUP_TRANSITION)
}

/// The device of whichever button currently carries the `active` class.
pub fn active_device(document: &Document) -> Option<Device> {
    dom::select(document, ".device-btn.active")
        .map(|btn| Device::from_tag(btn.get_attribute("data-device").as_deref()))
}

pub(super) fn init(document: &Document, handles: &mut Handles) -> Result<(), DemoError> {
    let buttons = dom::select_all(document, ".device-btn")?;
    let mockup = dom::required(document, ".website-mockup")?;

    for button in &buttons {
        let all = buttons.clone();
        let mockup = mockup.clone();
        let this = button.clone();
        handles.listen(button, "click", move |_| {
            for other in &all {
                let _ = other.class_list().remove_1("active");
            }
            let _ = this.class_list().add_1("active");

            let device = Device::from_tag(this.get_attribute("data-device").as_deref());
            log::debug!("Previewing as {:?}", device);
            if let Err(e) = apply_device_transform(&mockup, device) {
                log::warn!("Failed to apply {:?} preview: {}", device, e);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(Device::from_tag(Some("tablet")), Device::Tablet);
        assert_eq!(Device::from_tag(Some("mobile")), Device::Mobile);
        assert_eq!(Device::from_tag(Some("desktop")), Device::Desktop);
    }

    #[test]
    fn test_unknown_tags_fall_back_to_desktop() {
        let desktop = DeviceLayout::for_device(Device::Desktop);
        for tag in [None, Some(""), Some("watch"), Some("MOBILE"), Some("tablet ")] {
            assert_eq!(DeviceLayout::for_device(Device::from_tag(tag)), desktop);
        }
        assert_eq!(desktop.transform, "scale(1)");
        assert_eq!(desktop.max_width, "none");
        assert_eq!(desktop.margin, "0");
    }

    #[test]
    fn test_mobile_stacks_gallery_into_six_rows() {
        let mobile = DeviceLayout::for_device(Device::Mobile);
        assert_eq!(mobile.transform, "scale(0.6)");
        assert_eq!(mobile.max_width, "375px");
        assert_eq!(mobile.margin, "0 auto");
        assert_eq!(mobile.grid.columns, "1fr");
        assert_eq!(mobile.grid.rows, "repeat(6, 120px)");
    }

    #[test]
    fn test_non_mobile_restores_default_grid() {
        for device in [Device::Desktop, Device::Tablet] {
            assert_eq!(DeviceLayout::for_device(device).grid, DEFAULT_GRID);
        }
        let tablet = DeviceLayout::for_device(Device::Tablet);
        assert_eq!(tablet.transform, "scale(0.8)");
        assert_eq!(tablet.max_width, "768px");
    }
}
