use web_sys::{Document, HtmlElement};

use super::{spawn_after, Handles};
use crate::config::DemoConfig;
use crate::dom;
use crate::error::DemoError;

const TOOLTIP: &str = ".indicator-tooltip";
const PULSE_ANIMATION: &str = "indicatorPulse 2s ease-in-out infinite";

/// Delay before indicator `index` restarts its pulse within one wave.
pub fn pulse_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}

fn show_tooltip(indicator: &HtmlElement, visible: bool) {
    let Some(tooltip) = dom::child(indicator, TOOLTIP) else {
        return;
    };
    let (opacity, transform) = if visible {
        ("1", "translateX(-50%) translateY(0) scale(1.05)")
    } else {
        ("0", "translateX(-50%) translateY(-10px) scale(1)")
    };
    let _ = dom::set_styles(&tooltip, &[("opacity", opacity), ("transform", transform)]);
}

/// Clears the animation, forces a reflow, then reassigns it so it plays from the start.
fn restart_pulse(indicator: &HtmlElement) {
    let _ = dom::set_style(indicator, "animation", "none");
    let _ = indicator.offset_height();
    let _ = dom::set_style(indicator, "animation", PULSE_ANIMATION);
}

pub(super) fn init(document: &Document, config: &DemoConfig, handles: &mut Handles) -> Result<(), DemoError> {
    let indicators = dom::select_all(document, ".edit-indicator")?;

    for indicator in &indicators {
        let this = indicator.clone();
        handles.listen(indicator, "mouseenter", move |_| show_tooltip(&this, true))?;
        let this = indicator.clone();
        handles.listen(indicator, "mouseleave", move |_| show_tooltip(&this, false))?;
    }

    let alive = handles.liveness();
    let stagger_ms = config.pulse_stagger_ms;
    handles.interval(config.pulse_period_ms, move || {
        for (index, indicator) in indicators.iter().enumerate() {
            let indicator = indicator.clone();
            spawn_after(alive.clone(), pulse_delay(index, stagger_ms), move || {
                restart_pulse(&indicator)
            });
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_wave_is_staggered() {
        let delays: Vec<u32> = (0..4).map(|i| pulse_delay(i, 500)).collect();
        assert_eq!(delays, vec![0, 500, 1000, 1500]);
    }

    #[test]
    fn test_pulse_delay_saturates() {
        assert_eq!(pulse_delay(usize::MAX, 500), u32::MAX);
    }
}
