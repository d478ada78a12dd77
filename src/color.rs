/*
 *  color.rs
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
//! Pixel color type plus the brightness scaling and diurnal easing math
//! that tints the clock face across the day.

use serde::{Deserialize, Serialize};

use crate::constants::GLOBAL_BRIGHTNESS_MIN;

/// A single RGB pixel. `(0, 0, 0)` is "off".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// True if any channel is nonzero.
    pub fn is_lit(&self) -> bool {
        self.r != 0 || self.g != 0 || self.b != 0
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Index of the brightest channel; ties go to the first one.
    fn dominant_channel(&self) -> usize {
        let chans = self.channels();
        let mut best = 0;
        for (ii, &c) in chans.iter().enumerate() {
            if c > chans[best] {
                best = ii;
            }
        }
        best
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.channels()
    }
}

/// Rescales `color` to a target brightness while preserving the channel
/// ratios.
///
/// With `as_percentage` each channel is multiplied by `brightness`
/// directly; otherwise channels are normalized against their mean so the
/// brightest result hits `brightness`. When the rescaled color's peak
/// channel falls below [`GLOBAL_BRIGHTNESS_MIN`] and `allow_zero` is
/// false, the result is a single-channel floor color on whichever channel
/// dominated the input, so very dim colors stay visibly hued instead of
/// rounding to black.
pub fn set_brightness(color: Rgb, brightness: f32, as_percentage: bool, allow_zero: bool) -> Rgb {
    let chans = color.channels().map(|c| c as f32);
    let avg = (chans[0] + chans[1] + chans[2]) / 3.0;
    if avg == 0.0 {
        return Rgb::BLACK;
    }
    let scale = |c: f32| -> u8 {
        let v = if as_percentage { c * brightness } else { c / avg * brightness };
        v.round().clamp(0.0, 255.0) as u8
    };
    let scaled = Rgb::new(scale(chans[0]), scale(chans[1]), scale(chans[2]));
    if !allow_zero && scaled.max_channel() < GLOBAL_BRIGHTNESS_MIN {
        let mut floor = [0u8; 3];
        floor[color.dominant_channel()] = GLOBAL_BRIGHTNESS_MIN;
        return Rgb::from(floor);
    }
    scaled
}

/// Smooth diurnal easing: `min` everywhere outside `[start, end]`, an
/// inverted-cosine ramp inside it that peaks at `max` on the midpoint.
/// Flatlines at the boundary rather than wrapping.
pub fn calc_color_cos(t: f32, start: f32, end: f32, min: f32, max: f32) -> f32 {
    if t <= start || t >= end {
        return min;
    }
    let phase = std::f32::consts::TAU * (t - start) / (end - start);
    min + (max - min) / 2.0 * (1.0 - phase.cos())
}
