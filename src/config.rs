//! Runtime toggles and persisted preferences
//!
//! Mutated only by the input layer, read by the clock and the renderer.
//! Everything except the paused flag survives restarts via a small JSON
//! file next to the executable.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_GENERATION_INTERVAL, DEFAULT_NOISE_PROBABILITY, GENERATION_INTERVAL_STEP,
    MAX_GENERATION_INTERVAL, MIN_GENERATION_INTERVAL,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Simulation paused; the clock accumulates no time debt while set
    #[serde(skip)]
    pub paused: bool,
    /// Draw grid lines between cells
    pub show_grid: bool,
    /// Seconds between generations, clamped to
    /// [MIN_GENERATION_INTERVAL, MAX_GENERATION_INTERVAL]
    pub generation_interval: f32,
    /// Chance of each column starting alive when seeding a board
    pub noise_probability: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            paused: false,
            show_grid: true,
            generation_interval: DEFAULT_GENERATION_INTERVAL,
            noise_probability: DEFAULT_NOISE_PROBABILITY,
        }
    }
}

impl RenderConfig {
    const CONFIG_FILE: &'static str = "rule110-scroll.json";

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Set the generation interval, clamped to the legal range
    pub fn set_generation_interval(&mut self, interval: f32) {
        self.generation_interval = interval.clamp(MIN_GENERATION_INTERVAL, MAX_GENERATION_INTERVAL);
    }

    /// One speed-up keypress: shorter interval, faster simulation
    pub fn speed_up(&mut self) {
        self.set_generation_interval(self.generation_interval - GENERATION_INTERVAL_STEP);
    }

    /// One slow-down keypress
    pub fn slow_down(&mut self) {
        self.set_generation_interval(self.generation_interval + GENERATION_INTERVAL_STEP);
    }

    /// Re-clamp values after deserialization; a hand-edited file must not
    /// smuggle an out-of-range interval past the input layer's clamps.
    fn sanitize(mut self) -> Self {
        self.set_generation_interval(self.generation_interval);
        self.noise_probability = self.noise_probability.clamp(0.0, 1.0);
        self
    }

    /// Load preferences from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::CONFIG_FILE) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(config) => {
                    log::info!("Loaded preferences from {}", Self::CONFIG_FILE);
                    return config.sanitize();
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::CONFIG_FILE);
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                log::warn!("Could not read {}: {err}", Self::CONFIG_FILE);
            }
        }

        log::info!("Using default preferences");
        Self::default()
    }

    /// Save preferences to disk; failure is logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::CONFIG_FILE, json) {
                    log::warn!("Could not save {}: {err}", Self::CONFIG_FILE);
                } else {
                    log::info!("Preferences saved");
                }
            }
            Err(err) => log::warn!("Could not serialize preferences: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert!(!config.paused);
        assert!(config.show_grid);
        assert_eq!(config.generation_interval, DEFAULT_GENERATION_INTERVAL);
        assert_eq!(config.noise_probability, DEFAULT_NOISE_PROBABILITY);
    }

    #[test]
    fn test_interval_clamps_at_both_ends() {
        let mut config = RenderConfig::default();
        config.set_generation_interval(0.02);
        config.speed_up();
        assert_eq!(config.generation_interval, MIN_GENERATION_INTERVAL);
        config.speed_up();
        assert_eq!(config.generation_interval, MIN_GENERATION_INTERVAL);

        config.set_generation_interval(MAX_GENERATION_INTERVAL);
        config.slow_down();
        assert_eq!(config.generation_interval, MAX_GENERATION_INTERVAL);
    }

    #[test]
    fn test_sanitize_rejects_out_of_range_values() {
        let config = RenderConfig {
            generation_interval: 9.0,
            noise_probability: 3.5,
            ..RenderConfig::default()
        }
        .sanitize();
        assert_eq!(config.generation_interval, MAX_GENERATION_INTERVAL);
        assert_eq!(config.noise_probability, 1.0);
    }

    #[test]
    fn test_paused_is_not_persisted() {
        let config = RenderConfig {
            paused: true,
            ..RenderConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: RenderConfig = serde_json::from_str(&json).unwrap();
        assert!(!restored.paused);
    }
}
