/*
 *  glyphs.rs
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
//! Hand-drawn bitmap tables for every built-in font and icon. Row-major,
//! one byte per pixel, nonzero = lit. These are catalog data; the lookup
//! machinery lives in `font`.

/// Row-major static bitmap rows.
pub type Rows = &'static [&'static [u8]];

// ---------------------------------------------------------------------------
// numbers_large: 6x14 chunky digits for the main HH:MM readout
// ---------------------------------------------------------------------------

pub static LARGE_DIGITS: [Rows; 10] = [
    // 0
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 1
    &[
        &[0, 0, 1, 1, 0, 0],
        &[0, 1, 1, 1, 0, 0],
        &[1, 1, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 2
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 3
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 1, 1, 1, 1, 1],
        &[0, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 4
    &[
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
    ],
    // 5
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 6
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 7
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 1, 1, 0],
        &[0, 0, 0, 1, 1, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
    ],
    // 8
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
    // 9
    &[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ],
];

pub static LARGE_SEPARATOR: Rows = &[
    &[0, 0],
    &[0, 0],
    &[0, 0],
    &[1, 1],
    &[1, 1],
    &[0, 0],
    &[0, 0],
    &[0, 0],
    &[0, 0],
    &[1, 1],
    &[1, 1],
    &[0, 0],
    &[0, 0],
    &[0, 0],
];

pub static LARGE_BLANK: Rows = &[
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0],
];

// ---------------------------------------------------------------------------
// numbers_small: 4x7, used for the denser traffic layout
// ---------------------------------------------------------------------------

pub static SMALL_DIGITS: [Rows; 10] = [
    // 0
    &[
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
    ],
    // 1
    &[
        &[0, 0, 1, 0],
        &[0, 1, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 1, 1, 1],
    ],
    // 2
    &[
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
    ],
    // 3
    &[
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 1, 1, 1],
    ],
    // 4
    &[
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
    ],
    // 5
    &[
        &[1, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 1, 1, 1],
    ],
    // 6
    &[
        &[1, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
    ],
    // 7
    &[
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 1, 0, 0],
        &[0, 1, 0, 0],
    ],
    // 8
    &[
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
    ],
    // 9
    &[
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 1, 1, 1],
    ],
];

pub static SMALL_SEPARATOR: Rows = &[
    &[0],
    &[0],
    &[1],
    &[0],
    &[1],
    &[0],
    &[0],
];

pub static SMALL_BLANK: Rows = &[
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
];

// ---------------------------------------------------------------------------
// numbers_tiny: 3x5, seconds and temperature
// ---------------------------------------------------------------------------

pub static TINY_DIGITS: [Rows; 10] = [
    // 0
    &[
        &[1, 1, 1],
        &[1, 0, 1],
        &[1, 0, 1],
        &[1, 0, 1],
        &[1, 1, 1],
    ],
    // 1
    &[
        &[0, 1, 0],
        &[1, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[1, 1, 1],
    ],
    // 2
    &[
        &[1, 1, 1],
        &[0, 0, 1],
        &[1, 1, 1],
        &[1, 0, 0],
        &[1, 1, 1],
    ],
    // 3
    &[
        &[1, 1, 1],
        &[0, 0, 1],
        &[0, 1, 1],
        &[0, 0, 1],
        &[1, 1, 1],
    ],
    // 4
    &[
        &[1, 0, 1],
        &[1, 0, 1],
        &[1, 1, 1],
        &[0, 0, 1],
        &[0, 0, 1],
    ],
    // 5
    &[
        &[1, 1, 1],
        &[1, 0, 0],
        &[1, 1, 1],
        &[0, 0, 1],
        &[1, 1, 1],
    ],
    // 6
    &[
        &[1, 1, 1],
        &[1, 0, 0],
        &[1, 1, 1],
        &[1, 0, 1],
        &[1, 1, 1],
    ],
    // 7
    &[
        &[1, 1, 1],
        &[0, 0, 1],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
    ],
    // 8
    &[
        &[1, 1, 1],
        &[1, 0, 1],
        &[1, 1, 1],
        &[1, 0, 1],
        &[1, 1, 1],
    ],
    // 9
    &[
        &[1, 1, 1],
        &[1, 0, 1],
        &[1, 1, 1],
        &[0, 0, 1],
        &[1, 1, 1],
    ],
];

pub static TINY_SEPARATOR: Rows = &[
    &[0],
    &[1],
    &[0],
    &[1],
    &[0],
];

pub static TINY_BLANK: Rows = &[
    &[0, 0, 0],
    &[0, 0, 0],
    &[0, 0, 0],
    &[0, 0, 0],
    &[0, 0, 0],
];

// ---------------------------------------------------------------------------
// letters_tiny: only what the temperature error readout needs
// ---------------------------------------------------------------------------

pub static TINY_E: Rows = &[
    &[1, 1, 1],
    &[1, 0, 0],
    &[1, 1, 1],
    &[1, 0, 0],
    &[1, 1, 1],
];

pub static TINY_R: Rows = &[
    &[1, 1, 0],
    &[1, 0, 1],
    &[1, 1, 0],
    &[1, 0, 1],
    &[1, 0, 1],
];

// ---------------------------------------------------------------------------
// icon glyphs
// ---------------------------------------------------------------------------

pub static SKULL: Rows = &[
    &[0, 0, 1, 1, 1, 0, 0],
    &[0, 1, 0, 1, 0, 1, 0],
    &[0, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 0, 0],
];

pub static DEGREE: Rows = &[
    &[1, 1],
    &[1, 1],
];

/// 15x15 shining sun, rays pulled in. Pairs with [`SUN_RAYS_OUT`] for a
/// two-frame twinkle.
pub static SUN_RAYS_IN: Rows = &[
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    &[0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// 15x15 shining sun, rays pushed out.
pub static SUN_RAYS_OUT: Rows = &[
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    &[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1],
    &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    &[0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
];

// 7x7 forecast corner icons

pub static CLEAR_DAY_0: Rows = &[
    &[0, 0, 0, 1, 0, 0, 0],
    &[0, 1, 0, 0, 0, 1, 0],
    &[0, 0, 1, 1, 1, 0, 0],
    &[1, 0, 1, 1, 1, 0, 1],
    &[0, 0, 1, 1, 1, 0, 0],
    &[0, 1, 0, 0, 0, 1, 0],
    &[0, 0, 0, 1, 0, 0, 0],
];

pub static CLEAR_DAY_1: Rows = &[
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 1, 0, 1, 0, 1, 0],
    &[0, 0, 1, 1, 1, 0, 0],
    &[0, 1, 1, 1, 1, 1, 0],
    &[0, 0, 1, 1, 1, 0, 0],
    &[0, 1, 0, 1, 0, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0],
];

pub static CLEAR_NIGHT: Rows = &[
    &[0, 0, 1, 1, 1, 0, 0],
    &[0, 1, 1, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0],
    &[1, 1, 0, 0, 0, 0, 0],
    &[0, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 0, 0],
];

pub static PARTLY_DAY: Rows = &[
    &[0, 0, 0, 0, 1, 0, 0],
    &[0, 0, 0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 1, 0, 0],
    &[0, 1, 1, 1, 0, 0, 0],
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 1, 1, 0],
];

pub static PARTLY_NIGHT: Rows = &[
    &[0, 0, 0, 0, 1, 1, 0],
    &[0, 0, 0, 1, 1, 0, 0],
    &[0, 0, 0, 0, 1, 1, 0],
    &[0, 1, 1, 1, 0, 0, 0],
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 1, 1, 0],
];

pub static CLOUDY: Rows = &[
    &[0, 0, 1, 1, 0, 0, 0],
    &[0, 1, 1, 1, 1, 0, 0],
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0],
];

pub static ICON_BLANK: Rows = &[
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
];
