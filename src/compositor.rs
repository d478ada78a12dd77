/*
 *  compositor.rs
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
//! Blits bitmaps and frames onto the grid with selectable blend modes and
//! optional adjacency masking. Geometry is always clipped, never an error,
//! so variable-width text can run off the panel edge safely.

use crate::color::{set_brightness, Rgb};
use crate::constants::MASK_DIM_PERCENT;
use crate::font::Glyph;
use crate::grid::Grid;

/// Per-pixel combination rule applied when a source pixel lands on the
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source replaces destination, except off source pixels preserve it.
    #[default]
    Overwrite,
    /// Per-channel maximum; overlapping glyphs brighten without clipping.
    Or,
    /// Per-channel average when both are lit, else black.
    And,
    /// Black when both are lit, else the saturating sum.
    Xor,
}

#[derive(Debug, Clone)]
pub struct BlitOptions {
    pub mode: BlendMode,
    /// Replaces the color of every lit source pixel.
    pub color: Option<Rgb>,
    /// Rescales each written pixel through the color model before commit.
    pub brightness: Option<f32>,
    /// Swap the source's row/column interpretation. Fonts authored against
    /// the opposite axis convention set this.
    pub transpose: bool,
    /// Dim the 8-connected neighbors of each newly lit pixel.
    pub mask: bool,
    pub mask_percent: f32,
}

impl Default for BlitOptions {
    fn default() -> Self {
        BlitOptions {
            mode: BlendMode::default(),
            color: None,
            brightness: None,
            transpose: false,
            mask: false,
            mask_percent: MASK_DIM_PERCENT,
        }
    }
}

impl BlitOptions {
    pub fn with_mode(mode: BlendMode) -> Self {
        BlitOptions { mode, ..Default::default() }
    }
}

/// What gets blitted: a boolean bitmap or a full colored frame.
#[derive(Debug, Clone, Copy)]
pub enum BlitSource<'a> {
    Bits(&'a Glyph),
    Frame(&'a Grid),
}

/// A source cell: off cells are transparent; lit bits carry no color of
/// their own and get one substituted at blend time.
enum SourcePixel {
    Off,
    LitBit,
    LitColor(Rgb),
}

impl BlitSource<'_> {
    fn size(&self) -> (usize, usize) {
        match self {
            BlitSource::Bits(g) => (g.width(), g.height()),
            BlitSource::Frame(f) => (f.width(), f.height()),
        }
    }

    fn pixel(&self, x: usize, y: usize) -> SourcePixel {
        match self {
            BlitSource::Bits(g) => {
                if g.bit(x, y) {
                    SourcePixel::LitBit
                } else {
                    SourcePixel::Off
                }
            }
            BlitSource::Frame(f) => match f.get(x as i32, y as i32) {
                Some(p) if p.is_lit() => SourcePixel::LitColor(p),
                _ => SourcePixel::Off,
            },
        }
    }
}

fn saturating_add(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(
        a.r.saturating_add(b.r),
        a.g.saturating_add(b.g),
        a.b.saturating_add(b.b),
    )
}

fn channel_max(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(a.r.max(b.r), a.g.max(b.g), a.b.max(b.b))
}

fn channel_avg(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(
        ((a.r as u16 + b.r as u16) / 2) as u8,
        ((a.g as u16 + b.g as u16) / 2) as u8,
        ((a.b as u16 + b.b as u16) / 2) as u8,
    )
}

/// Blits `source` onto `grid` with its top-left cell at `(x, y)`.
///
/// Off source pixels never touch the destination. Lit boolean pixels take
/// the `color` override when present, otherwise the destination's own
/// color if it is lit, otherwise white. With `mask` on, every 8-connected
/// neighbor of a lit written pixel that was not itself written by this
/// call is knocked back to `mask_percent` of its value, at most once per
/// call.
pub fn blit(grid: &mut Grid, source: BlitSource<'_>, x: i32, y: i32, opts: &BlitOptions) {
    let (mut src_w, mut src_h) = source.size();
    if opts.transpose {
        std::mem::swap(&mut src_w, &mut src_h);
    }

    let mut lit_written: Vec<(i32, i32)> = Vec::new();
    let mut written = vec![false; grid.width() * grid.height()];

    for xx in 0..src_w {
        for yy in 0..src_h {
            let gx = x + xx as i32;
            let gy = y + yy as i32;
            let Some(dest) = grid.get(gx, gy) else { continue };
            let (sx, sy) = if opts.transpose { (yy, xx) } else { (xx, yy) };
            // Substitute a concrete color for bare lit bits; everything
            // downstream only sees the resulting pixel value.
            let src = match source.pixel(sx, sy) {
                SourcePixel::Off => Rgb::BLACK,
                SourcePixel::LitColor(c) => opts.color.unwrap_or(c),
                SourcePixel::LitBit => {
                    opts.color.unwrap_or(if dest.is_lit() { dest } else { Rgb::WHITE })
                }
            };
            let mut value = match opts.mode {
                BlendMode::And => {
                    if dest.is_lit() && src.is_lit() {
                        channel_avg(dest, src)
                    } else {
                        Rgb::BLACK
                    }
                }
                BlendMode::Xor => {
                    if dest.is_lit() && src.is_lit() {
                        Rgb::BLACK
                    } else {
                        saturating_add(dest, src)
                    }
                }
                BlendMode::Or => channel_max(dest, src),
                BlendMode::Overwrite => {
                    if src.is_lit() {
                        src
                    } else {
                        dest
                    }
                }
            };
            if let Some(b) = opts.brightness {
                value = set_brightness(value, b, false, false);
            }
            grid.set(gx, gy, value);
            if src.is_lit() {
                written[gy as usize * grid.width() + gx as usize] = true;
                lit_written.push((gx, gy));
            }
        }
    }

    if opts.mask {
        apply_adjacency_mask(grid, &lit_written, &written, opts.mask_percent);
    }
}

/// Knocks back every 8-connected neighbor of the written shape, once.
/// Pixels belonging to the shape itself are never dimmed, and the visited
/// set keeps a pixel bordering several shape cells from being dimmed
/// repeatedly in the same call.
fn apply_adjacency_mask(grid: &mut Grid, lit: &[(i32, i32)], written: &[bool], percent: f32) {
    let mut dimmed = vec![false; grid.width() * grid.height()];
    for &(cx, cy) in lit {
        for jj in -1i32..=1 {
            for ii in -1i32..=1 {
                if ii == 0 && jj == 0 {
                    continue;
                }
                let nx = cx + ii;
                let ny = cy + jj;
                if !grid.contains(nx, ny) {
                    continue;
                }
                let idx = ny as usize * grid.width() + nx as usize;
                if written[idx] || dimmed[idx] {
                    continue;
                }
                dimmed[idx] = true;
                if let Some(p) = grid.get(nx, ny) {
                    grid.set(nx, ny, set_brightness(p, percent, true, true));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Glyph;

    fn cross() -> Glyph {
        Glyph::from_vec(vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]])
    }

    #[test]
    fn fully_off_grid_blit_is_a_noop() {
        let glyph = cross();
        let mut grid = Grid::new(8, 8);
        blit(&mut grid, BlitSource::Bits(&glyph), -10, -10, &BlitOptions::default());
        blit(&mut grid, BlitSource::Bits(&glyph), 20, 3, &BlitOptions::default());
        assert!(grid.is_blank());
    }

    #[test]
    fn partial_clip_draws_the_visible_part() {
        let glyph = cross();
        let mut grid = Grid::new(8, 8);
        blit(&mut grid, BlitSource::Bits(&glyph), -1, 0, &BlitOptions::default());
        assert_eq!(grid.get(0, 1), Some(Rgb::WHITE));
        assert_eq!(grid.get(1, 1), Some(Rgb::WHITE));
    }

    #[test]
    fn overwrite_preserves_destination_under_off_pixels() {
        let glyph = cross();
        let mut grid = Grid::filled(3, 3, Rgb::new(9, 9, 9));
        blit(
            &mut grid,
            BlitSource::Bits(&glyph),
            0,
            0,
            &BlitOptions { color: Some(Rgb::new(50, 0, 0)), ..Default::default() },
        );
        assert_eq!(grid.get(0, 0), Some(Rgb::new(9, 9, 9)));
        assert_eq!(grid.get(1, 1), Some(Rgb::new(50, 0, 0)));
    }

    #[test]
    fn or_mode_never_darkens() {
        let glyph = cross();
        let mut grid = Grid::filled(3, 3, Rgb::new(40, 10, 60));
        let before = grid.clone();
        blit(
            &mut grid,
            BlitSource::Bits(&glyph),
            0,
            0,
            &BlitOptions { mode: BlendMode::Or, color: Some(Rgb::new(20, 30, 20)), ..Default::default() },
        );
        for y in 0..3 {
            for x in 0..3 {
                let old = before.get(x, y).unwrap();
                let new = grid.get(x, y).unwrap();
                assert!(new.r >= old.r && new.g >= old.g && new.b >= old.b);
            }
        }
        // lit-on-lit takes the per-channel max
        assert_eq!(grid.get(1, 1), Some(Rgb::new(40, 30, 60)));
    }

    #[test]
    fn xor_of_identical_regions_is_black() {
        let glyph = cross();
        let mut grid = Grid::new(3, 3);
        let opts = BlitOptions {
            mode: BlendMode::Xor,
            color: Some(Rgb::new(10, 20, 30)),
            ..Default::default()
        };
        blit(&mut grid, BlitSource::Bits(&glyph), 0, 0, &opts);
        assert_eq!(grid.get(1, 1), Some(Rgb::new(10, 20, 30)));
        blit(&mut grid, BlitSource::Bits(&glyph), 0, 0, &opts);
        assert!(grid.is_blank());
    }

    #[test]
    fn and_mode_averages_overlap() {
        let glyph = cross();
        let mut grid = Grid::filled(3, 3, Rgb::new(100, 0, 50));
        blit(
            &mut grid,
            BlitSource::Bits(&glyph),
            0,
            0,
            &BlitOptions { mode: BlendMode::And, color: Some(Rgb::new(50, 0, 100)), ..Default::default() },
        );
        assert_eq!(grid.get(1, 1), Some(Rgb::new(75, 0, 75)));
        // unlit source cell against lit destination goes black
        assert_eq!(grid.get(0, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn frame_source_carries_its_own_colors() {
        let mut src = Grid::new(2, 2);
        src.set(0, 0, Rgb::new(1, 2, 3));
        let mut dest = Grid::new(4, 4);
        blit(&mut dest, BlitSource::Frame(&src), 1, 1, &BlitOptions::default());
        assert_eq!(dest.get(1, 1), Some(Rgb::new(1, 2, 3)));
        assert_eq!(dest.get(2, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn transpose_swaps_axes() {
        let tall = Glyph::from_vec(vec![vec![1], vec![1], vec![1]]);
        let mut grid = Grid::new(4, 4);
        blit(
            &mut grid,
            BlitSource::Bits(&tall),
            0,
            0,
            &BlitOptions { transpose: true, ..Default::default() },
        );
        assert_eq!(grid.get(2, 0), Some(Rgb::WHITE));
        assert_eq!(grid.get(0, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn brightness_option_rescales_written_pixels() {
        let dot = Glyph::from_vec(vec![vec![1]]);
        let mut grid = Grid::new(2, 2);
        blit(
            &mut grid,
            BlitSource::Bits(&dot),
            0,
            0,
            &BlitOptions {
                color: Some(Rgb::new(100, 50, 50)),
                brightness: Some(20.0),
                ..Default::default()
            },
        );
        let px = grid.get(0, 0).unwrap();
        // mean-normalized to a peak of 20/avg ratio, hue preserved
        assert_eq!(px, Rgb::new(30, 15, 15));
        // untouched pixels stay untouched
        assert_eq!(grid.get(1, 1), Some(Rgb::BLACK));
    }

    #[test]
    fn mask_dims_neighbors_exactly_once() {
        let dot = Glyph::from_vec(vec![vec![1, 1]]);
        let mut grid = Grid::filled(5, 3, Rgb::new(100, 100, 100));
        blit(
            &mut grid,
            BlitSource::Bits(&dot),
            1,
            1,
            &BlitOptions { mask: true, color: Some(Rgb::new(200, 0, 0)), ..Default::default() },
        );
        // the shape itself is never dimmed
        assert_eq!(grid.get(1, 1), Some(Rgb::new(200, 0, 0)));
        assert_eq!(grid.get(2, 1), Some(Rgb::new(200, 0, 0)));
        // (1,0) borders both lit cells but is only knocked back once
        assert_eq!(grid.get(1, 0), Some(Rgb::new(50, 50, 50)));
        assert_eq!(grid.get(0, 0), Some(Rgb::new(50, 50, 50)));
        assert_eq!(grid.get(3, 2), Some(Rgb::new(50, 50, 50)));
        // pixels not adjacent to the shape are untouched
        assert_eq!(grid.get(4, 1), Some(Rgb::new(100, 100, 100)));
    }
}
