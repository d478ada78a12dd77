/*
 *  engine.rs
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
//! The clock-state engine: owns the authoritative snapshot, decomposes
//! wall-clock time each tick, folds in weather and traffic readings from
//! the refresh channels, and derives the diurnal face color.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Datelike, Local, Timelike};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

use crate::color::{calc_color_cos, set_brightness, Rgb};
use crate::constants::{
    BLOOM_END_HOUR_OFFSET, BLOOM_START_HOUR_OFFSET, DAILY_BRIGHTNESS_MAX, DAILY_BRIGHTNESS_MIN,
    DAILY_B_MAX, DAILY_B_MIN, DAILY_G_MAX, DAILY_G_MIN, DAILY_R_MAX, DAILY_R_MIN,
    DEFAULT_SUNRISE_HOUR, DEFAULT_SUNSET_HOUR, DEFAULT_TRAFFIC_END_HOUR,
    DEFAULT_TRAFFIC_START_HOUR, SUN_ANIMATION_DURATION_SECS,
};
use crate::font::Token;
use crate::traffic::TrafficReading;
use crate::weather::{WeatherReading, WeatherType};

/// Snapshot fields addressable by data-keyed scene groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKey {
    HourDigits,
    MinuteDigits,
    SecondDigits,
    Separator,
    TempDigits,
    ForecastFrame,
    TrafficDeltaDigits,
    TravelTimeDigits,
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataKey::HourDigits => "hour_digits",
            DataKey::MinuteDigits => "minute_digits",
            DataKey::SecondDigits => "second_digits",
            DataKey::Separator => "separator",
            DataKey::TempDigits => "temp_digits",
            DataKey::ForecastFrame => "forecast_frame",
            DataKey::TrafficDeltaDigits => "traffic_delta_digits",
            DataKey::TravelTimeDigits => "travel_time_digits",
        };
        f.write_str(name)
    }
}

/// The animation identifier picked from forecast severity and day/night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastKey {
    Sunny,
    Moon,
    CloudySun,
    CloudyMoon,
    Cloudy,
    Rain,
    Storm,
}

impl ForecastKey {
    /// Rain and storm render as a procedural overlay instead of an icon.
    pub fn is_precipitation(&self) -> bool {
        matches!(self, ForecastKey::Rain | ForecastKey::Storm)
    }

    /// Corner-icon symbol for this key at the given second, `None` for
    /// the procedural keys. The sunny icon twinkles on seconds parity.
    pub fn frame_symbol(&self, second: u32) -> Option<&'static str> {
        match self {
            ForecastKey::Sunny => {
                Some(if second % 2 == 0 { "CLEAR_DAY_0" } else { "CLEAR_DAY_1" })
            }
            ForecastKey::Moon => Some("CLEAR_NIGHT"),
            ForecastKey::CloudySun => Some("PARTLY_DAY"),
            ForecastKey::CloudyMoon => Some("PARTLY_NIGHT"),
            ForecastKey::Cloudy => Some("CLOUDY"),
            ForecastKey::Rain | ForecastKey::Storm => None,
        }
    }
}

fn digit_pair(value: u32) -> [Token; 2] {
    [Token::Digit((value / 10 % 10) as u8), Token::Digit((value % 10) as u8)]
}

/// The per-tick render-input state. Owned and mutated by the engine
/// only; the scene resolver reads it through [`Snapshot::lookup`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub hour_digits: [Token; 2],
    pub minute_digits: [Token; 2],
    pub second_digits: [Token; 2],
    pub separator: Token,
    pub temp_digits: Vec<Token>,
    pub brightness: f32,
    pub color: Rgb,
    pub sun_is_up: bool,
    pub show_sunrise: bool,
    pub show_sunset: bool,
    pub sunrise_anim_pct: f32,
    pub sunset_anim_pct: f32,
    pub forecast_key: Option<ForecastKey>,
    pub show_traffic: bool,
    pub traffic_delta_digits: Option<[Token; 2]>,
    pub travel_time_digits: Option<[Token; 2]>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot {
            hour: 0,
            minute: 0,
            second: 0,
            hour_digits: [Token::Symbol("BLANK"); 2],
            minute_digits: [Token::Digit(0); 2],
            second_digits: [Token::Digit(0); 2],
            separator: Token::Symbol("SEPARATOR"),
            temp_digits: Vec::new(),
            brightness: DAILY_BRIGHTNESS_MIN,
            color: Rgb::BLACK,
            sun_is_up: false,
            show_sunrise: false,
            show_sunset: false,
            sunrise_anim_pct: 0.0,
            sunset_anim_pct: 0.0,
            forecast_key: None,
            show_traffic: false,
            traffic_delta_digits: None,
            travel_time_digits: None,
        }
    }
}

impl Snapshot {
    /// Tokens for a data key, or `None` when the backing field has not
    /// been populated yet (no traffic reading, no forecast, ...).
    pub fn lookup(&self, key: DataKey) -> Option<Vec<Token>> {
        match key {
            DataKey::HourDigits => Some(self.hour_digits.to_vec()),
            DataKey::MinuteDigits => Some(self.minute_digits.to_vec()),
            DataKey::SecondDigits => Some(self.second_digits.to_vec()),
            DataKey::Separator => Some(vec![self.separator]),
            DataKey::TempDigits => {
                (!self.temp_digits.is_empty()).then(|| self.temp_digits.clone())
            }
            DataKey::ForecastFrame => self
                .forecast_key
                .and_then(|k| k.frame_symbol(self.second))
                .map(|s| vec![Token::Symbol(s)]),
            DataKey::TrafficDeltaDigits => self.traffic_delta_digits.map(|d| d.to_vec()),
            DataKey::TravelTimeDigits => self.travel_time_digits.map(|d| d.to_vec()),
        }
    }
}

/// Knobs the engine takes from the app configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub traffic_start_hour: u32,
    pub traffic_end_hour: u32,
    pub default_sunrise_hour: u32,
    pub default_sunset_hour: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            traffic_start_hour: DEFAULT_TRAFFIC_START_HOUR,
            traffic_end_hour: DEFAULT_TRAFFIC_END_HOUR,
            default_sunrise_hour: DEFAULT_SUNRISE_HOUR,
            default_sunset_hour: DEFAULT_SUNSET_HOUR,
        }
    }
}

pub struct ClockEngine {
    snapshot: Snapshot,
    cfg: EngineConfig,
    weather_rx: watch::Receiver<Option<WeatherReading>>,
    traffic_rx: watch::Receiver<Option<TrafficReading>>,
    traffic_ctl: mpsc::Sender<bool>,
    weather: Option<WeatherReading>,
    traffic: Option<TrafficReading>,
    traffic_window_active: bool,
    last_update: Option<Instant>,
}

impl ClockEngine {
    pub fn new(
        weather_rx: watch::Receiver<Option<WeatherReading>>,
        traffic_rx: watch::Receiver<Option<TrafficReading>>,
        traffic_ctl: mpsc::Sender<bool>,
        cfg: EngineConfig,
    ) -> Self {
        ClockEngine {
            snapshot: Snapshot::default(),
            cfg,
            weather_rx,
            traffic_rx,
            traffic_ctl,
            weather: None,
            traffic: None,
            traffic_window_active: false,
            last_update: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Rate-limited update: a no-op returning false until `update_freq`
    /// seconds have passed since the previous run.
    pub fn run(&mut self, update_freq: f32) -> bool {
        if let Some(last) = self.last_update {
            if last.elapsed().as_secs_f32() < update_freq {
                return false;
            }
        }
        self.last_update = Some(Instant::now());
        self.tick(Local::now());
        true
    }

    /// The deterministic core of [`run`]: one full unconditional update
    /// against a fixed instant.
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.update_time(&now);
        self.update_weather(&now);
        self.update_color(&now);
        self.update_traffic(&now);
    }

    fn update_time(&mut self, now: &DateTime<Local>) {
        let hour_24 = now.hour();
        let mut hour_12 = hour_24 % 12;
        if hour_12 == 0 {
            // midnight and noon both read as 12
            hour_12 = 12;
        }
        let snap = &mut self.snapshot;
        snap.hour = hour_24;
        snap.minute = now.minute();
        snap.second = now.second();
        snap.hour_digits = digit_pair(hour_12);
        if hour_12 < 10 {
            // no leading zero on the big readout
            snap.hour_digits[0] = Token::Symbol("BLANK");
        }
        snap.minute_digits = digit_pair(snap.minute);
        snap.second_digits = digit_pair(snap.second);
        snap.separator = Token::Symbol("SEPARATOR");
    }

    fn update_weather(&mut self, now: &DateTime<Local>) {
        if self.weather_rx.has_changed().unwrap_or(false) {
            if let Some(reading) = self.weather_rx.borrow_and_update().clone() {
                self.weather = Some(reading);
            }
        }
        let snap = &mut self.snapshot;
        let Some(weather) = &self.weather else {
            snap.temp_digits = vec![Token::Symbol("E"), Token::Symbol("R")];
            // treat no-data as night so the face stays dim
            snap.sun_is_up = false;
            snap.show_sunrise = false;
            snap.show_sunset = false;
            snap.forecast_key = None;
            return;
        };

        if weather.current_temp > 99 || weather.current_temp < 0 {
            snap.temp_digits = vec![Token::Symbol("SKULL")];
        } else {
            snap.temp_digits = digit_pair(weather.current_temp as u32).to_vec();
        }

        match (weather.sunrise, weather.sunset) {
            (Some(sunrise), Some(sunset)) => {
                snap.sun_is_up = sunrise < *now && sunset > *now;
                let remaining = |event: DateTime<Local>| {
                    (event - *now).num_seconds() as f32 / SUN_ANIMATION_DURATION_SECS as f32
                };
                snap.sunrise_anim_pct = 1.0 - remaining(sunrise);
                snap.show_sunrise = snap.sunrise_anim_pct > 0.0 && snap.sunrise_anim_pct < 1.0;
                snap.sunset_anim_pct = 1.0 - remaining(sunset);
                snap.show_sunset = snap.sunset_anim_pct > 0.0 && snap.sunset_anim_pct < 1.0;
            }
            _ => {
                snap.sun_is_up = false;
                snap.show_sunrise = false;
                snap.show_sunset = false;
            }
        }

        let sun_is_up = snap.sun_is_up;
        snap.forecast_key = weather.forecast.map(|forecast| match (forecast, sun_is_up) {
            (WeatherType::Clear, true) => ForecastKey::Sunny,
            (WeatherType::Clear, false) => ForecastKey::Moon,
            (WeatherType::PartlyCloudy, true) => ForecastKey::CloudySun,
            (WeatherType::PartlyCloudy, false) => ForecastKey::CloudyMoon,
            (WeatherType::Cloudy, _) => ForecastKey::Cloudy,
            (WeatherType::Rain, _) => ForecastKey::Rain,
            (WeatherType::Extreme, _) => ForecastKey::Storm,
        });
    }

    fn update_color(&mut self, now: &DateTime<Local>) {
        let day_elapsed_mins = (now.hour() * 60 + now.minute()) as f32;
        let sunrise_hour = self
            .weather
            .as_ref()
            .and_then(|w| w.sunrise)
            .map(|t| t.hour())
            .unwrap_or(self.cfg.default_sunrise_hour);
        let sunset_hour = self
            .weather
            .as_ref()
            .and_then(|w| w.sunset)
            .map(|t| t.hour())
            .unwrap_or(self.cfg.default_sunset_hour);
        let bloom_start = ((sunrise_hour + BLOOM_START_HOUR_OFFSET) * 60) as f32;
        let bloom_end = ((sunset_hour + BLOOM_END_HOUR_OFFSET) * 60) as f32;

        let snap = &mut self.snapshot;
        snap.brightness = calc_color_cos(
            day_elapsed_mins,
            bloom_start,
            bloom_end,
            DAILY_BRIGHTNESS_MIN,
            DAILY_BRIGHTNESS_MAX,
        );
        let red = calc_color_cos(day_elapsed_mins, bloom_start, bloom_end, DAILY_R_MIN, DAILY_R_MAX);
        let green = calc_color_cos(day_elapsed_mins, bloom_start, bloom_end, DAILY_G_MIN, DAILY_G_MAX);
        let blue = calc_color_cos(day_elapsed_mins, bloom_start, bloom_end, DAILY_B_MIN, DAILY_B_MAX);
        snap.color = set_brightness(
            Rgb::new(red.round() as u8, green.round() as u8, blue.round() as u8),
            snap.brightness,
            false,
            false,
        );
    }

    fn update_traffic(&mut self, now: &DateTime<Local>) {
        let weekday = now.weekday().number_from_monday() <= 5;
        let window = weekday
            && now.hour() >= self.cfg.traffic_start_hour
            && now.hour() < self.cfg.traffic_end_hour;
        if window != self.traffic_window_active {
            self.traffic_window_active = window;
            // wake or park the worker; non-blocking, the engine never waits
            if let Err(e) = self.traffic_ctl.try_send(window) {
                debug!("traffic worker control send failed: {}", e);
            }
        }
        if window {
            if self.traffic_rx.has_changed().unwrap_or(false) {
                if let Some(reading) = self.traffic_rx.borrow_and_update().clone() {
                    self.traffic = Some(reading);
                }
            }
            if let Some(traffic) = &self.traffic {
                self.snapshot.traffic_delta_digits = Some(digit_pair(traffic.traffic_delta));
                self.snapshot.travel_time_digits = Some(digit_pair(traffic.travel_time));
            }
        }
        self.snapshot.show_traffic = window && self.traffic.is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_engine() -> (
        ClockEngine,
        watch::Sender<Option<WeatherReading>>,
        watch::Sender<Option<TrafficReading>>,
        mpsc::Receiver<bool>,
    ) {
        let (weather_tx, weather_rx) = watch::channel(None);
        let (traffic_tx, traffic_rx) = watch::channel(None);
        let (ctl_tx, ctl_rx) = mpsc::channel(4);
        let engine = ClockEngine::new(weather_rx, traffic_rx, ctl_tx, EngineConfig::default());
        (engine, weather_tx, traffic_tx, ctl_rx)
    }

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        // 2026-08-03 is a Monday
        Local.with_ymd_and_hms(2026, 8, 3, hour, minute, second).unwrap()
    }

    #[test]
    fn midnight_decomposes_to_twelve() {
        let (mut engine, ..) = test_engine();
        engine.tick(at(0, 5, 9));
        let snap = engine.snapshot();
        assert_eq!(snap.hour_digits, [Token::Digit(1), Token::Digit(2)]);
        assert_eq!(snap.minute_digits, [Token::Digit(0), Token::Digit(5)]);
        assert_eq!(snap.second_digits, [Token::Digit(0), Token::Digit(9)]);
    }

    #[test]
    fn single_digit_hour_blanks_its_tens_place() {
        let (mut engine, ..) = test_engine();
        engine.tick(at(3, 0, 0));
        assert_eq!(engine.snapshot().hour_digits, [Token::Symbol("BLANK"), Token::Digit(3)]);
        engine.tick(at(15, 0, 0));
        assert_eq!(engine.snapshot().hour_digits, [Token::Symbol("BLANK"), Token::Digit(3)]);
        engine.tick(at(12, 0, 0));
        assert_eq!(engine.snapshot().hour_digits, [Token::Digit(1), Token::Digit(2)]);
    }

    #[test]
    fn no_weather_ever_shows_error_tokens() {
        let (mut engine, ..) = test_engine();
        engine.tick(at(10, 0, 0));
        let snap = engine.snapshot();
        assert_eq!(snap.temp_digits, vec![Token::Symbol("E"), Token::Symbol("R")]);
        assert!(!snap.sun_is_up);
        assert_eq!(snap.forecast_key, None);
    }

    #[test]
    fn out_of_range_temperature_shows_the_skull() {
        let (mut engine, weather_tx, ..) = test_engine();
        weather_tx
            .send(Some(WeatherReading {
                current_temp: 105,
                forecast: Some(WeatherType::Clear),
                sunrise: Some(at(6, 12, 0)),
                sunset: Some(at(19, 48, 0)),
            }))
            .unwrap();
        engine.tick(at(14, 0, 0));
        assert_eq!(engine.snapshot().temp_digits, vec![Token::Symbol("SKULL")]);
    }

    #[test]
    fn in_range_temperature_becomes_digits() {
        let (mut engine, weather_tx, ..) = test_engine();
        weather_tx
            .send(Some(WeatherReading {
                current_temp: 72,
                forecast: Some(WeatherType::Clear),
                sunrise: Some(at(6, 12, 0)),
                sunset: Some(at(19, 48, 0)),
            }))
            .unwrap();
        engine.tick(at(14, 0, 0));
        let snap = engine.snapshot();
        assert_eq!(snap.temp_digits, vec![Token::Digit(7), Token::Digit(2)]);
        assert!(snap.sun_is_up);
        // clear sky at 2pm reads as sunny
        assert_eq!(snap.forecast_key, Some(ForecastKey::Sunny));
    }

    #[test]
    fn clear_night_maps_to_moon() {
        let (mut engine, weather_tx, ..) = test_engine();
        weather_tx
            .send(Some(WeatherReading {
                current_temp: 55,
                forecast: Some(WeatherType::Clear),
                sunrise: Some(at(6, 12, 0)),
                sunset: Some(at(19, 48, 0)),
            }))
            .unwrap();
        engine.tick(at(22, 0, 0));
        let snap = engine.snapshot();
        assert!(!snap.sun_is_up);
        assert_eq!(snap.forecast_key, Some(ForecastKey::Moon));
    }

    #[test]
    fn extreme_forecast_maps_to_storm() {
        let (mut engine, weather_tx, ..) = test_engine();
        weather_tx
            .send(Some(WeatherReading {
                current_temp: 60,
                forecast: Some(WeatherType::Extreme),
                sunrise: Some(at(6, 12, 0)),
                sunset: Some(at(19, 48, 0)),
            }))
            .unwrap();
        engine.tick(at(12, 0, 0));
        assert_eq!(engine.snapshot().forecast_key, Some(ForecastKey::Storm));
    }

    #[test]
    fn sunrise_sweep_runs_only_inside_its_window() {
        let (mut engine, weather_tx, ..) = test_engine();
        weather_tx
            .send(Some(WeatherReading {
                current_temp: 60,
                forecast: None,
                sunrise: Some(at(6, 10, 0)),
                sunset: Some(at(19, 48, 0)),
            }))
            .unwrap();

        // five minutes before sunrise: halfway through the 600s sweep
        engine.tick(at(6, 5, 0));
        let snap = engine.snapshot();
        assert!(snap.show_sunrise);
        assert!((snap.sunrise_anim_pct - 0.5).abs() < 1e-4);
        assert!(!snap.show_sunset);

        // an hour before: not started
        engine.tick(at(5, 10, 0));
        assert!(!engine.snapshot().show_sunrise);

        // well after: finished
        engine.tick(at(6, 30, 0));
        assert!(!engine.snapshot().show_sunrise);
        assert!(engine.snapshot().sun_is_up);
    }

    #[test]
    fn traffic_window_gates_regardless_of_cached_reading() {
        let (mut engine, _weather_tx, traffic_tx, mut ctl_rx) = test_engine();
        traffic_tx.send(Some(TrafficReading { traffic_delta: 8, travel_time: 33 })).unwrap();

        // inside the weekday window: reading drains and shows
        engine.tick(at(8, 0, 0));
        let snap = engine.snapshot();
        assert!(snap.show_traffic);
        assert_eq!(snap.traffic_delta_digits, Some([Token::Digit(0), Token::Digit(8)]));
        assert_eq!(snap.travel_time_digits, Some([Token::Digit(3), Token::Digit(3)]));
        // the worker was woken on the window transition
        assert_eq!(ctl_rx.try_recv().unwrap(), true);

        // late evening: off no matter what is cached
        engine.tick(at(23, 0, 0));
        assert!(!engine.snapshot().show_traffic);
        assert_eq!(ctl_rx.try_recv().unwrap(), false);
    }

    #[test]
    fn weekend_suppresses_traffic() {
        let (mut engine, _weather_tx, traffic_tx, _ctl) = test_engine();
        traffic_tx.send(Some(TrafficReading { traffic_delta: 3, travel_time: 20 })).unwrap();
        // 2026-08-02 is a Sunday
        let sunday = Local.with_ymd_and_hms(2026, 8, 2, 8, 0, 0).unwrap();
        engine.tick(sunday);
        assert!(!engine.snapshot().show_traffic);
    }

    #[test]
    fn window_without_any_reading_stays_hidden() {
        let (mut engine, ..) = test_engine();
        engine.tick(at(8, 0, 0));
        let snap = engine.snapshot();
        assert!(!snap.show_traffic);
        assert_eq!(snap.lookup(DataKey::TrafficDeltaDigits), None);
    }

    #[test]
    fn diurnal_color_is_dim_at_night_and_warm() {
        let (mut engine, ..) = test_engine();
        engine.tick(at(2, 0, 0));
        let night = engine.snapshot().color;
        // outside the bloom the face falls back to the red-channel floor
        assert!(night.r >= night.g && night.r >= night.b);
        assert!(night.r > 0);

        engine.tick(at(13, 0, 0));
        let midday = engine.snapshot().color;
        assert!(midday.max_channel() > night.max_channel());
    }

    #[test]
    fn forecast_frame_lookup_follows_seconds_parity() {
        let (mut engine, weather_tx, ..) = test_engine();
        weather_tx
            .send(Some(WeatherReading {
                current_temp: 70,
                forecast: Some(WeatherType::Clear),
                sunrise: Some(at(6, 0, 0)),
                sunset: Some(at(20, 0, 0)),
            }))
            .unwrap();
        engine.tick(at(12, 0, 0));
        assert_eq!(
            engine.snapshot().lookup(DataKey::ForecastFrame),
            Some(vec![Token::Symbol("CLEAR_DAY_0")])
        );
        engine.tick(at(12, 0, 1));
        assert_eq!(
            engine.snapshot().lookup(DataKey::ForecastFrame),
            Some(vec![Token::Symbol("CLEAR_DAY_1")])
        );
    }
}
