//! Simulation configuration
//!
//! One immutable value handed to `tick`/`advance`. Loaded from JSON on native,
//! with every field falling back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Aabb;

/// Configuration loading/validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tuning and geometry for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    /// Player box at startup
    pub player_start: Aabb,
    pub gravity_per_tick: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_impulse: f32,
    pub terminal_velocity: f32,

    // === Obstacles ===
    /// Pixels per tick
    pub scroll_speed: f32,
    pub spawn_interval_ms: u32,
    pub obstacle_width: f32,
    pub cull_margin: f32,
    /// Bottom obstacle height, [low, high)
    pub gap_offset_range: (i32, i32),
    /// Gap height, [low, high)
    pub gap_height_range: (i32, i32),

    // === Timing ===
    pub tick_rate_hz: u32,
    pub max_accumulated_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_start: Aabb::new(PLAYER_X, PLAYER_Y, PLAYER_SIZE, PLAYER_SIZE),
            gravity_per_tick: GRAVITY_PER_TICK,
            jump_impulse: JUMP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,

            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            obstacle_width: OBSTACLE_WIDTH,
            cull_margin: CULL_MARGIN,
            gap_offset_range: GAP_OFFSET_RANGE,
            gap_height_range: GAP_HEIGHT_RANGE,

            tick_rate_hz: TICK_RATE_HZ,
            max_accumulated_ms: MAX_ACCUMULATED_MS,
        }
    }
}

impl SimConfig {
    /// Fixed tick duration. Truncating division: 60 Hz gives 16 ms, not 16.67.
    pub fn tick_size_ms(&self) -> u64 {
        1000 / u64::from(self.tick_rate_hz)
    }

    /// Parse from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if self.tick_rate_hz == 0 || self.tick_rate_hz > 1000 {
            return invalid(format!(
                "tick_rate_hz must be in 1..=1000, got {}",
                self.tick_rate_hz
            ));
        }
        if self.max_accumulated_ms < self.tick_size_ms() {
            return invalid(format!(
                "max_accumulated_ms ({}) is shorter than one tick ({} ms)",
                self.max_accumulated_ms,
                self.tick_size_ms()
            ));
        }
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return invalid("screen dimensions must be positive".to_string());
        }
        // Obstacles must move left or they are never culled
        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0) {
            return invalid(format!(
                "scroll_speed must be a positive number, got {}",
                self.scroll_speed
            ));
        }
        for (name, value) in [
            ("gravity_per_tick", self.gravity_per_tick),
            ("jump_impulse", self.jump_impulse),
            ("cull_margin", self.cull_margin),
        ] {
            if !value.is_finite() {
                return invalid(format!("{name} must be finite, got {value}"));
            }
        }
        if !(self.obstacle_width > 0.0) {
            return invalid("obstacle_width must be positive".to_string());
        }
        if !(self.player_start.width() > 0.0 && self.player_start.height() > 0.0) {
            return invalid("player size must be positive".to_string());
        }
        for (name, (low, high)) in [
            ("gap_offset_range", self.gap_offset_range),
            ("gap_height_range", self.gap_height_range),
        ] {
            if low < 0 || low >= high {
                return invalid(format!(
                    "{name} must be a non-empty range of non-negative values, got [{low}, {high})"
                ));
            }
        }
        // Largest possible offset + gap must fit or the top obstacle gets a negative height
        let tallest = (self.gap_offset_range.1 - 1) + (self.gap_height_range.1 - 1);
        if tallest as f32 > self.screen_height {
            return invalid(format!(
                "screen_height {} cannot fit gap offset + gap height up to {}",
                self.screen_height, tallest
            ));
        }
        Ok(())
    }
}
