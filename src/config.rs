/*
 *  config.rs
 *
 *  chronoled - time you can squint at
 *  (c) 2020-26 Stuart Hunter
 *
 *  TODO:
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_TRAFFIC_END_HOUR, DEFAULT_TRAFFIC_START_HOUR, DEFAULT_UPDATE_FREQ, PANEL_HEIGHT,
    PANEL_WIDTH, TRAFFIC_CACHE_MINUTES, WEATHER_CACHE_MINUTES,
};
use crate::engine::EngineConfig;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration, loaded from YAML with CLI layering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,
    /// Minimum seconds between clock-state updates.
    pub update_freq: Option<f32>,
    pub panel: Option<PanelConfig>,
    pub weather: Option<WeatherConfig>,
    pub traffic: Option<TrafficConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Hourly forecast endpoint for the configured gridpoint.
    pub forecast_url: String,
    pub lat: f64,
    pub lng: f64,
    pub cache_minutes: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// Directions endpoint including origin/destination/key parameters.
    pub directions_url: String,
    pub cache_minutes: Option<u64>,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
}

/// CLI overrides; everything is optional so it can layer over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "chronoled", about = "RGB LED matrix clock face")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Log level filter, e.g. info or debug
    #[arg(long)]
    pub log_level: Option<String>,
    /// Render a single frame and exit
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub run_once: bool,
    /// Discard frames instead of drawing to the terminal
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub headless: bool,
}

impl Config {
    /// Loads the config file named on the CLI, or the first of
    /// `./chronoled.yaml` and `~/.config/chronoled/config.yaml`. Absent
    /// files mean defaults, not errors.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match Self::locate(cli) {
            Some(path) => {
                let text = fs::read_to_string(&path)?;
                serde_yaml::from_str(&text)?
            }
            None => Config::default(),
        };
        if cli.log_level.is_some() {
            config.log_level = cli.log_level.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn locate(cli: &Cli) -> Option<PathBuf> {
        if let Some(path) = &cli.config {
            return Some(path.clone());
        }
        let local = Path::new("chronoled.yaml");
        if local.exists() {
            return Some(local.to_path_buf());
        }
        let home = home_dir()?.join(".config/chronoled/config.yaml");
        home.exists().then_some(home)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(weather) = &self.weather {
            if !(-90.0..=90.0).contains(&weather.lat) || !(-180.0..=180.0).contains(&weather.lng) {
                return Err(ConfigError::Validation(format!(
                    "lat/lng out of range: {}, {}",
                    weather.lat, weather.lng
                )));
            }
        }
        let (start, end) = self.traffic_window();
        if start >= end || end > 24 {
            return Err(ConfigError::Validation(format!(
                "traffic window {}..{} is not a valid hour range",
                start, end
            )));
        }
        if let Some(freq) = self.update_freq {
            if !(freq > 0.0) {
                return Err(ConfigError::Validation("update_freq must be positive".to_string()));
            }
        }
        Ok(())
    }

    pub fn panel_size(&self) -> (usize, usize) {
        let panel = self.panel.clone().unwrap_or_default();
        (panel.width.unwrap_or(PANEL_WIDTH), panel.height.unwrap_or(PANEL_HEIGHT))
    }

    pub fn update_freq(&self) -> f32 {
        self.update_freq.unwrap_or(DEFAULT_UPDATE_FREQ)
    }

    pub fn weather_cache_minutes(&self) -> u64 {
        self.weather
            .as_ref()
            .and_then(|w| w.cache_minutes)
            .unwrap_or(WEATHER_CACHE_MINUTES)
    }

    pub fn traffic_cache_minutes(&self) -> u64 {
        self.traffic
            .as_ref()
            .and_then(|t| t.cache_minutes)
            .unwrap_or(TRAFFIC_CACHE_MINUTES)
    }

    fn traffic_window(&self) -> (u32, u32) {
        let traffic = self.traffic.as_ref();
        (
            traffic.and_then(|t| t.start_hour).unwrap_or(DEFAULT_TRAFFIC_START_HOUR),
            traffic.and_then(|t| t.end_hour).unwrap_or(DEFAULT_TRAFFIC_END_HOUR),
        )
    }

    pub fn engine_config(&self) -> EngineConfig {
        let (traffic_start_hour, traffic_end_hour) = self.traffic_window();
        EngineConfig { traffic_start_hour, traffic_end_hour, ..EngineConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_parses_and_layers() {
        let yaml = r#"
log_level: debug
update_freq: 0.5
panel:
  width: 128
  height: 64
weather:
  forecast_url: "https://api.weather.gov/gridpoints/OKX/33,35/forecast/hourly"
  lat: 40.71
  lng: -74.0
traffic:
  directions_url: "https://example.invalid/directions"
  start_hour: 6
  end_hour: 9
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.panel_size(), (128, 64));
        assert_eq!(config.update_freq(), 0.5);
        let engine = config.engine_config();
        assert_eq!(engine.traffic_start_hour, 6);
        assert_eq!(engine.traffic_end_hour, 9);
    }

    #[test]
    fn inverted_traffic_window_fails_validation() {
        let config = Config {
            traffic: Some(TrafficConfig {
                directions_url: String::new(),
                cache_minutes: None,
                start_hour: Some(10),
                end_hour: Some(7),
            }),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn defaults_apply_without_a_file() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.panel_size(), (PANEL_WIDTH, PANEL_HEIGHT));
        assert_eq!(config.engine_config().traffic_start_hour, DEFAULT_TRAFFIC_START_HOUR);
    }
}
