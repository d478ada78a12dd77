/*
 *  sun.rs
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
//! Sunrise/sunset for a given lat/lon and date (NOAA algorithm, zenith
//! 90.833°). Feeds the bloom window and the sunrise/sunset sweep.

use chrono::{prelude::*, Duration};

const ZENITH_DEG: f64 = 90.833_f64; // "official" sunrise/sunset (refraction accounted)
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Solar events for one civil date. `None` means the sun never crosses
/// the horizon there on that date.
#[derive(Debug, Clone, Default)]
pub struct SolarEvents {
    pub sunrise_utc: Option<DateTime<Utc>>,
    pub sunset_utc: Option<DateTime<Utc>>,
}

impl SolarEvents {
    /// Both events shifted into the local timezone.
    pub fn local(&self) -> (Option<DateTime<Local>>, Option<DateTime<Local>>) {
        (
            self.sunrise_utc.map(|t| t.with_timezone(&Local)),
            self.sunset_utc.map(|t| t.with_timezone(&Local)),
        )
    }
}

#[inline]
fn sin_deg(x: f64) -> f64 {
    (x * DEG_TO_RAD).sin()
}
#[inline]
fn cos_deg(x: f64) -> f64 {
    (x * DEG_TO_RAD).cos()
}
#[inline]
fn tan_deg(x: f64) -> f64 {
    (x * DEG_TO_RAD).tan()
}
#[inline]
fn acos_deg(x: f64) -> f64 {
    x.acos() * RAD_TO_DEG
}
#[inline]
fn atan_deg(x: f64) -> f64 {
    x.atan() * RAD_TO_DEG
}

/// Normalize angle to [0,360)
fn norm360(x: f64) -> f64 {
    let mut a = x % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    a
}

/// One NOAA pass: UT hours of the rising or setting crossing for the
/// given day-of-year, or None when the sun stays above/below the horizon.
fn crossing_ut_hours(lat_deg: f64, lng_hour: f64, doy: f64, is_rise: bool) -> Option<f64> {
    // Approximate solar time: 6h local for rise, 18h for set
    let t = if is_rise {
        doy + (6.0 - lng_hour) / 24.0
    } else {
        doy + (18.0 - lng_hour) / 24.0
    };

    // Mean anomaly, then true longitude
    let m = 0.9856 * t - 3.289;
    let l = norm360(m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634);

    // Right ascension, quadrant-adjusted to match L, in hours
    let mut ra = norm360(atan_deg(0.91764 * tan_deg(l)));
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra = (ra + (l_quadrant - ra_quadrant)) / 15.0;

    // Declination and local hour angle
    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = (1.0 - sin_dec * sin_dec).sqrt();
    let cos_h = (cos_deg(ZENITH_DEG) - sin_dec * sin_deg(lat_deg)) / (cos_dec * cos_deg(lat_deg));
    if !(-1.0..=1.0).contains(&cos_h) {
        // never rises / never sets on this date
        return None;
    }

    let h = if is_rise { 360.0 - acos_deg(cos_h) } else { acos_deg(cos_h) } / 15.0;

    // Local mean time back to UT, normalized into [0,24)
    let t_local = h + ra - (0.06571 * t) - 6.622;
    Some(((t_local - lng_hour) % 24.0 + 24.0) % 24.0)
}

/// Convert UT hours (0..24) to a UTC instant on the given civil date.
fn ut_hours_to_utc(date: NaiveDate, ut_hours: f64) -> DateTime<Utc> {
    let secs = (ut_hours * 3600.0).round() as i64;
    let base = NaiveDateTime::new(date, NaiveTime::MIN);
    DateTime::<Utc>::from_naive_utc_and_offset(base + Duration::seconds(secs), Utc)
}

/// Sunrise/sunset for a specific civil date (interpreted in UTC).
pub fn solar_events_for_date(lat_deg: f64, lon_deg: f64, date: NaiveDate) -> SolarEvents {
    let lng_hour = lon_deg / 15.0;
    let doy = date.ordinal() as f64;
    SolarEvents {
        sunrise_utc: crossing_ut_hours(lat_deg, lng_hour, doy, true).map(|h| ut_hours_to_utc(date, h)),
        sunset_utc: crossing_ut_hours(lat_deg, lng_hour, doy, false).map(|h| ut_hours_to_utc(date, h)),
    }
}

/// Sunrise/sunset for "today".
pub fn solar_events_today(lat_deg: f64, lon_deg: f64) -> SolarEvents {
    solar_events_for_date(lat_deg, lon_deg, Utc::now().date_naive())
}
