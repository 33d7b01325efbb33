use serde::Deserialize;

/// localStorage key holding an optional JSON override of the timings below.
pub const CONFIG_STORAGE_KEY: &str = "canvas-demo-config";

/// Timing knobs for every animation the demo drives, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub rotation_interval_ms: u32,
    pub progress_lead_in_ms: u32,
    pub progress_step_ms: u32,
    pub progress_restart_ms: u32,
    pub ripple_ms: u32,
    pub modal_open_delay_ms: u32,
    pub modal_close_ms: u32,
    pub pulse_period_ms: u32,
    pub pulse_stagger_ms: u32,
    pub chat_reply_delay_ms: u32,
    pub entrance_stagger_ms: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: 3_000,
            progress_lead_in_ms: 3_000,
            progress_step_ms: 2_500,
            progress_restart_ms: 2_000,
            ripple_ms: 600,
            modal_open_delay_ms: 10,
            modal_close_ms: 300,
            pulse_period_ms: 8_000,
            pulse_stagger_ms: 500,
            chat_reply_delay_ms: 5_000,
            entrance_stagger_ms: 200,
        }
    }
}

impl DemoConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults, overridden by whatever is stored under [`CONFIG_STORAGE_KEY`].
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok())
            .flatten();

        match stored {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid {} override: {}", CONFIG_STORAGE_KEY, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_timings() {
        let config = DemoConfig::default();
        assert_eq!(config.rotation_interval_ms, 3000);
        assert_eq!(config.progress_lead_in_ms, 3000);
        assert_eq!(config.progress_step_ms, 2500);
        assert_eq!(config.progress_restart_ms, 2000);
        assert_eq!(config.ripple_ms, 600);
        assert_eq!(config.modal_open_delay_ms, 10);
        assert_eq!(config.modal_close_ms, 300);
        assert_eq!(config.pulse_period_ms, 8000);
        assert_eq!(config.pulse_stagger_ms, 500);
        assert_eq!(config.chat_reply_delay_ms, 5000);
        assert_eq!(config.entrance_stagger_ms, 200);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = DemoConfig::from_json(r#"{"chat_reply_delay_ms": 100, "ripple_ms": 50}"#).unwrap();
        assert_eq!(config.chat_reply_delay_ms, 100);
        assert_eq!(config.ripple_ms, 50);
        assert_eq!(config.rotation_interval_ms, 3000);
        assert_eq!(config.progress_step_ms, 2500);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(DemoConfig::from_json("not json").is_err());
        assert!(DemoConfig::from_json(r#"{"ripple_ms": -1}"#).is_err());
    }
}
