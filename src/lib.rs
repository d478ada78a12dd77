/*
 *  lib.rs
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
//! Frame compositor and clock-state engine for an RGB LED matrix clock.
//! The binary in `main.rs` wires the engine to the refresh workers and a
//! frame sink; everything else lives here so it can be driven from tests.

pub mod animation;
pub mod clockface;
pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod font;
pub mod glyphs;
pub mod grid;
pub mod layout;
pub mod refresh;
pub mod scene;
pub mod sink;
pub mod sun;
pub mod traffic;
pub mod weather;
