//! Animation settings
//!
//! Defaults match the page's stock look. A site can override any field by
//! storing a JSON object in LocalStorage; missing fields keep their defaults.
//! Settings are only ever read, never written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunables for reveals, floating badges and hover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Floating badges ===
    /// Velocity spread (px/frame); components are drawn from ±float_speed/2
    pub float_speed: f32,
    /// Space kept free at the right/bottom edge when spawning (px)
    pub spawn_margin: f32,
    /// Delay before the float loop starts (ms)
    pub start_delay_ms: u32,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,

    // === Reveal ===
    /// Visible fraction that triggers a reveal (0.0 - 1.0)
    pub reveal_threshold: f64,
    /// Reveal transition duration (seconds)
    pub reveal_duration_secs: f32,

    // === Hover ===
    pub hover_scale: f32,
    pub hover_duration_secs: f32,
    pub hover_background: String,
    pub rest_background: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            float_speed: FLOAT_SPEED,
            spawn_margin: SPAWN_MARGIN,
            start_delay_ms: FLOAT_START_DELAY_MS,
            seed: None,

            reveal_threshold: REVEAL_THRESHOLD,
            reveal_duration_secs: REVEAL_DURATION_SECS,

            hover_scale: HOVER_SCALE,
            hover_duration_secs: HOVER_DURATION_SECS,
            hover_background: HOVER_BACKGROUND.to_string(),
            rest_background: REST_BACKGROUND.to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "folio_motion_settings";

    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values back into something renderable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.float_speed.is_finite() || self.float_speed < 0.0 {
            self.float_speed = defaults.float_speed;
        }
        if !self.spawn_margin.is_finite() || self.spawn_margin < 0.0 {
            self.spawn_margin = defaults.spawn_margin;
        }
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            defaults.reveal_threshold
        };
        if !self.reveal_duration_secs.is_finite() || self.reveal_duration_secs < 0.0 {
            self.reveal_duration_secs = defaults.reveal_duration_secs;
        }
        if !self.hover_scale.is_finite() || self.hover_scale <= 0.0 {
            self.hover_scale = defaults.hover_scale;
        }
        if !self.hover_duration_secs.is_finite() || self.hover_duration_secs < 0.0 {
            self.hover_duration_secs = defaults.hover_duration_secs;
        }
        if self.hover_background.trim().is_empty() {
            self.hover_background = defaults.hover_background;
        }
        if self.rest_background.trim().is_empty() {
            self.rest_background = defaults.rest_background;
        }

        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
