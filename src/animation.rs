/*
 *  animation.rs
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
//! Procedurally generated animation frames, plus the sunrise/sunset
//! sweep backdrop.

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::compositor::{blit, BlitOptions, BlitSource};
use crate::font::Glyph;
use crate::glyphs;
use crate::grid::Grid;

/// Color the sun sweep and the rain layer are drawn in.
pub const SUN_COLOR: Rgb = Rgb::new(255, 140, 0);
pub const RAIN_COLOR: Rgb = Rgb::new(30, 90, 200);

/// A generator producing frames on its own clock. Callers may poll every
/// render tick; between advances they get the cached frame back.
pub trait ProceduralAnimation {
    fn next_frame(&mut self) -> &Glyph;
}

/// Falling rain. The frame buffer works like a vertical shift register:
/// each advance drops the bottom row, pushes a blank row on top, and
/// stochastically seeds new droplets across the top. Advances are gated
/// to whole wall-clock seconds so the rain steps with the seconds digits.
pub struct Rain {
    width: usize,
    height: usize,
    density: f64,
    droplet_len: usize,
    last_frame_secs: i64,
    rows: Vec<Vec<u8>>,
    frame: Glyph,
    rng: StdRng,
}

impl Rain {
    /// Average number of droplets spawned per column per advance.
    pub const DROPLET_DENSITY: f64 = 0.12;
    /// Vertical length of a droplet.
    pub const DROPLET_LENGTH: usize = 2;

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Deterministic generator for tests.
    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Self {
        let rows = vec![vec![0u8; width]; height];
        Rain {
            width,
            height,
            density: Self::DROPLET_DENSITY,
            droplet_len: Self::DROPLET_LENGTH,
            last_frame_secs: 0,
            frame: Glyph::from_vec(rows.clone()),
            rows,
            rng,
        }
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = density;
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    fn advance(&mut self) {
        self.rows.pop();
        self.rows.insert(0, vec![0u8; self.width]);
        for xx in 0..self.width {
            if self.rng.random::<f64>() <= self.density {
                for yy in 0..self.droplet_len.min(self.height) {
                    self.rows[yy][xx] = 1;
                }
            }
        }
        self.frame = Glyph::from_vec(self.rows.clone());
    }

    /// Clock-injected variant of [`ProceduralAnimation::next_frame`];
    /// returns the cached frame untouched until the next whole second.
    pub fn next_frame_at(&mut self, now_secs: i64) -> &Glyph {
        if now_secs - self.last_frame_secs < 1 {
            return &self.frame;
        }
        self.last_frame_secs = now_secs;
        self.advance();
        &self.frame
    }
}

impl ProceduralAnimation for Rain {
    fn next_frame(&mut self) -> &Glyph {
        self.next_frame_at(Local::now().timestamp())
    }
}

/// Full-frame backdrop for the sunrise/sunset transition. `pct` runs from
/// 0 to 1 over the animation window; rising sweeps the sun up from below
/// the bottom edge toward the vertical center, setting runs the same path
/// in reverse. The sun glyph alternates its two ray frames by seconds
/// parity.
pub fn animated_sun(width: usize, height: usize, pct: f32, rising: bool, now_secs: i64) -> Grid {
    let mut grid = Grid::new(width, height);
    let rows = if now_secs % 2 == 0 { glyphs::SUN_RAYS_IN } else { glyphs::SUN_RAYS_OUT };
    let sun = Glyph::from_rows(rows);

    let pct = pct.clamp(0.0, 1.0);
    let progress = if rising { pct } else { 1.0 - pct };
    let start_y = height as f32;
    let end_y = (height as f32 - sun.height() as f32) / 2.0;
    let y = start_y + (end_y - start_y) * progress;
    let x = (width.saturating_sub(sun.width())) / 2;

    blit(
        &mut grid,
        BlitSource::Bits(&sun),
        x as i32,
        y.round() as i32,
        &BlitOptions { color: Some(SUN_COLOR), ..Default::default() },
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_second_returns_cached_frame() {
        let mut rain = Rain::seeded(8, 6, 7);
        let first = rain.next_frame_at(100).clone();
        let second = rain.next_frame_at(100).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn advance_shifts_rows_downward() {
        let mut rain = Rain::seeded(16, 8, 42);
        let before = rain.next_frame_at(100).clone();
        let after = rain.next_frame_at(101).clone();
        // every pre-advance row reappears one row lower; rows 0..droplet_len
        // are excluded because fresh droplets overwrite them
        for y in Rain::DROPLET_LENGTH - 1..7 {
            for x in 0..16 {
                assert_eq!(before.bit(x, y), after.bit(x, y + 1), "row {} column {}", y, x);
            }
        }
    }

    #[test]
    fn droplets_eventually_fall() {
        let mut rain = Rain::seeded(16, 8, 1);
        rain.set_density(0.5);
        for tick in 0..20 {
            rain.next_frame_at(100 + tick);
        }
        let frame = rain.next_frame_at(130).clone();
        let lit = (0..16).flat_map(|x| (0..8).map(move |y| (x, y))).filter(|&(x, y)| frame.bit(x, y)).count();
        assert!(lit > 0, "no droplets after 20 advances at default density");
    }

    #[test]
    fn sunrise_sweep_moves_up() {
        let early = animated_sun(64, 32, 0.1, true, 0);
        let late = animated_sun(64, 32, 0.9, true, 0);
        let top_lit = |g: &Grid| {
            (0..32).find(|&y| (0..64).any(|x| g.get(x, y).unwrap().is_lit()))
        };
        let early_top = top_lit(&early);
        let late_top = top_lit(&late).expect("sun visible near the end of the sweep");
        // at 10% the sun has barely cleared the edge, at 90% it is high
        assert!(early_top.is_none() || early_top.unwrap() > late_top);
    }

    #[test]
    fn sunset_is_the_reverse_path() {
        let rising = animated_sun(64, 32, 0.3, true, 0);
        let setting = animated_sun(64, 32, 0.7, false, 0);
        assert_eq!(rising, setting);
    }
}
