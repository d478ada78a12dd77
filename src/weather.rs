/*
 *  weather.rs
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
//! Weather producer: fetches an hourly forecast feed, reduces the
//! lookahead window to the single most severe forecast, and derives
//! sunrise/sunset locally. The engine only ever sees finished
//! [`WeatherReading`]s through the refresh channel.

use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::constants::WEATHER_FORECAST_HOURS;
use crate::refresh::{spawn_worker, FetchError, RefreshHandle};
use crate::sun;

/// Discrete forecast severity; the derived ordering ranks worse weather
/// higher so `max` picks the forecast to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WeatherType {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Extreme,
}

/// Maps an upstream icon name onto a severity bucket. The icon is the
/// most pared-down signal the feed offers; see https://api.weather.gov/icons
fn icon_weather(icon: &str) -> Option<WeatherType> {
    let weather = match icon {
        "skc" | "few" | "wind_skc" | "wind_few" | "hot" | "cold" => WeatherType::Clear,
        "sct" | "wind_sct" | "dust" | "smoke" | "haze" => WeatherType::PartlyCloudy,
        "bkn" | "ovc" | "wind_bkn" | "wind_ovc" | "fog" => WeatherType::Cloudy,
        "snow" | "rain_snow" | "rain_sleet" | "snow_sleet" | "fzra" | "rain_fzra"
        | "snow_fzra" | "sleet" | "rain" | "rain_showers" | "rain_showers_hi" | "tsra"
        | "tsra_sct" | "tsra_hi" | "tropical_storm" | "blizzard" => WeatherType::Rain,
        "tornado" | "hurricane" => WeatherType::Extreme,
        _ => return None,
    };
    Some(weather)
}

/// The last path segment of an icon URL, trimmed down to its name. Icon
/// paths sometimes carry a probability suffix like `rain_showers,20`.
fn icon_name(url: &str) -> Option<&str> {
    let segment = url.split('/').next_back()?;
    let end = segment
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '_'))
        .unwrap_or(segment.len());
    (end > 0).then(|| &segment[..end])
}

/// One cleaned weather observation, as the engine consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub current_temp: i32,
    /// Worst severity over the lookahead window; None when no entry in
    /// the window mapped to a known type.
    pub forecast: Option<WeatherType>,
    pub sunrise: Option<DateTime<Local>>,
    pub sunset: Option<DateTime<Local>>,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    forecast_url: String,
    lat: f64,
    lng: f64,
    lookahead_hours: usize,
}

impl WeatherClient {
    pub fn new(cfg: &WeatherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(8))
            .build()?;
        Ok(WeatherClient {
            client,
            forecast_url: cfg.forecast_url.clone(),
            lat: cfg.lat,
            lng: cfg.lng,
            lookahead_hours: WEATHER_FORECAST_HOURS,
        })
    }

    pub async fn fetch(&self) -> Result<WeatherReading, FetchError> {
        let body: Value = self
            .client
            .get(&self.forecast_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Hourly periods, index = hours from now
        let periods = body["properties"]["periods"]
            .as_array()
            .ok_or_else(|| FetchError::Shape("properties.periods missing".to_string()))?;
        let first = periods
            .first()
            .ok_or_else(|| FetchError::Shape("empty forecast periods".to_string()))?;
        let current_temp = first["temperature"]
            .as_i64()
            .ok_or_else(|| FetchError::Shape("temperature missing".to_string()))?
            as i32;

        // Reduce the window to the worst severity it contains
        let mut forecast: Option<WeatherType> = None;
        for period in periods.iter().take(self.lookahead_hours + 1) {
            let Some(icon_url) = period["icon"].as_str() else { continue };
            let Some(name) = icon_name(icon_url) else { continue };
            match icon_weather(name) {
                Some(t) => forecast = Some(forecast.map_or(t, |prev| prev.max(t))),
                None => debug!("unrecognized forecast icon '{}'", name),
            }
        }

        let (sunrise, sunset) = sun::solar_events_today(self.lat, self.lng).local();
        info!(
            "weather: temp {} forecast {:?} sunrise {:?} sunset {:?}",
            current_temp, forecast, sunrise, sunset
        );
        Ok(WeatherReading { current_temp, forecast, sunrise, sunset })
    }

    /// Moves the client into a background refresh worker. Weather runs
    /// for the whole process lifetime, so it starts enabled.
    pub fn spawn(self, cache_interval: Duration) -> RefreshHandle<WeatherReading> {
        spawn_worker("weather", cache_interval, true, move || {
            let client = self.clone();
            async move { client.fetch().await }
        })
    }
}
