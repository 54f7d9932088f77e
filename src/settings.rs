//! Gameplay tuning and preferences
//!
//! Persisted in LocalStorage. Values that would break the physics are
//! corrected in place by [`Settings::validate`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and combo tuning shared by the ball and the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    pub gravity: f32,
    pub drag: f32,
    pub restitution: f32,
    pub launch_vy: f32,
    pub launch_vx_range: f32,

    // === Shoe kicks ===
    pub min_kick_speed: f32,
    pub swipe_transfer: f32,
    pub kick_boost_factor: f32,
    pub max_kick_boost: f32,
    pub max_swipe: f32,
    pub kick_jitter: f32,

    // === Combo ===
    pub combo_timeout_ms: f64,
    pub max_combo: u32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drag: DRAG,
            restitution: RESTITUTION,
            launch_vy: LAUNCH_VY,
            launch_vx_range: LAUNCH_VX_RANGE,

            min_kick_speed: MIN_KICK_SPEED,
            swipe_transfer: SWIPE_TRANSFER,
            kick_boost_factor: KICK_BOOST_FACTOR,
            max_kick_boost: MAX_KICK_BOOST,
            max_swipe: MAX_SWIPE,
            kick_jitter: KICK_JITTER,

            combo_timeout_ms: COMBO_TIMEOUT_MS,
            max_combo: MAX_COMBO,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: Physics,

    // === HUD ===
    /// Show score and combo in the corner of the canvas
    pub show_hud: bool,
    /// Draw the shoe glyph under the pointer
    pub show_shoe: bool,
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "kickboard_settings";

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.validate();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Clamp tuning values into ranges the simulation can handle.
    ///
    /// Restitution must stay below 1 so the ball always comes down again.
    pub fn validate(&mut self) {
        let defaults = Physics::default();
        let p = &mut self.physics;

        if !(p.restitution.is_finite() && p.restitution >= 0.0 && p.restitution < 1.0) {
            log::warn!("Invalid restitution {}, using {}", p.restitution, defaults.restitution);
            p.restitution = defaults.restitution;
        }
        if !(p.drag.is_finite() && p.drag > 0.0 && p.drag <= 1.0) {
            log::warn!("Invalid drag {}, using {}", p.drag, defaults.drag);
            p.drag = defaults.drag;
        }
        if !(p.gravity.is_finite() && p.gravity > 0.0) {
            log::warn!("Invalid gravity {}, using {}", p.gravity, defaults.gravity);
            p.gravity = defaults.gravity;
        }
        if !(p.combo_timeout_ms.is_finite() && p.combo_timeout_ms > 0.0) {
            log::warn!(
                "Invalid combo timeout {}, using {}",
                p.combo_timeout_ms,
                defaults.combo_timeout_ms
            );
            p.combo_timeout_ms = defaults.combo_timeout_ms;
        }
        // A zero ceiling would score pairs with 0 points
        if !(1..=MAX_COMBO).contains(&p.max_combo) {
            let clamped = p.max_combo.clamp(1, MAX_COMBO);
            log::warn!("Invalid max combo {}, using {}", p.max_combo, clamped);
            p.max_combo = clamped;
        }

        // Remaining knobs only need to be finite and non-negative
        for (value, default) in [
            (&mut p.launch_vx_range, defaults.launch_vx_range),
            (&mut p.min_kick_speed, defaults.min_kick_speed),
            (&mut p.swipe_transfer, defaults.swipe_transfer),
            (&mut p.kick_boost_factor, defaults.kick_boost_factor),
            (&mut p.max_kick_boost, defaults.max_kick_boost),
            (&mut p.max_swipe, defaults.max_swipe),
            (&mut p.kick_jitter, defaults.kick_jitter),
        ] {
            if !(value.is_finite() && *value >= 0.0) {
                log::warn!("Invalid tuning value {}, using {}", value, default);
                *value = default;
            }
        }
        if !p.launch_vy.is_finite() {
            log::warn!("Invalid launch velocity {}, using {}", p.launch_vy, defaults.launch_vy);
            p.launch_vy = defaults.launch_vy;
        }
    }

    /// Load settings from LocalStorage (WASM only).
    ///
    /// On first run the defaults are written back so they can be edited in
    /// the browser's storage inspector.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match storage.get_item(Self::STORAGE_KEY) {
                Ok(Some(json)) => match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                },
                Ok(None) => {
                    let settings = Self::default();
                    settings.save();
                    return settings;
                }
                Err(_) => {}
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            show_hud: true,
            show_shoe: true,
        }
    }
}
