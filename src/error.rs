/*
 *  error.rs
 *
 *  chronoled - time you can squint at
 *  (c) 2020-26 Stuart Hunter
 *
 *  Render-path error taxonomy
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

use thiserror::Error;

use crate::engine::DataKey;
use crate::font::Token;

/// Errors raised while turning a scene description into a frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// A draw token has no glyph in the given source. Recoverable through
    /// a fallback chain; fatal once the chain is exhausted.
    #[error("cannot resolve {token} against {source}")]
    Resolution { token: Token, source: &'static str },

    /// A data-keyed scene group's snapshot field is absent. The caller's
    /// policy decides between skipping the group and aborting the scene.
    #[error("snapshot has no value for {key}")]
    MissingData { key: DataKey },

    /// Malformed scene or layout description. Programmer error; surfaced
    /// immediately and never retried.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
