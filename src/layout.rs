//! Lays out a left-to-right glyph sequence against an absolute origin or
//! a center point, then drives the compositor for each item.

use serde::Deserialize;

use crate::compositor::{blit, BlitOptions, BlitSource};
use crate::error::RenderError;
use crate::font::Glyph;
use crate::grid::Grid;

/// Gap between consecutive items: one value for every gap, or one value
/// per gap (`N-1` entries for `N` items).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(i32),
    PerGap(Vec<i32>),
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0)
    }
}

impl Spacing {
    fn gap(&self, index: usize) -> i32 {
        match self {
            Spacing::Uniform(s) => *s,
            // length is validated in place() before any gap is read
            Spacing::PerGap(gaps) => gaps[index],
        }
    }
}

/// Spatial anchor for a laid-out sequence. Per axis, exactly one of the
/// origin (top-left) or center coordinate must be given.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Placement {
    pub origin_x: Option<i32>,
    pub origin_y: Option<i32>,
    pub center_x: Option<i32>,
    pub center_y: Option<i32>,
    #[serde(default)]
    pub spacing: Spacing,
}

impl Placement {
    pub fn origin(x: i32, y: i32, spacing: Spacing) -> Self {
        Placement { origin_x: Some(x), origin_y: Some(y), spacing, ..Default::default() }
    }

    pub fn centered(x: i32, y: i32, spacing: Spacing) -> Self {
        Placement { center_x: Some(x), center_y: Some(y), spacing, ..Default::default() }
    }

    /// Anchor sanity: both-or-neither on an axis is a config error.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.origin_x.is_some() == self.center_x.is_some() {
            return Err(RenderError::Configuration(
                "must specify exactly one of origin_x or center_x".to_string(),
            ));
        }
        if self.origin_y.is_some() == self.center_y.is_some() {
            return Err(RenderError::Configuration(
                "must specify exactly one of origin_y or center_y".to_string(),
            ));
        }
        Ok(())
    }
}

/// Blits `items` in sequence at their computed offsets, sharing
/// `blit_options` across the row. Centered axes derive the origin from
/// the sequence's total extent.
pub fn place(
    grid: &mut Grid,
    items: &[&Glyph],
    placement: &Placement,
    blit_options: &BlitOptions,
) -> Result<(), RenderError> {
    placement.validate()?;
    if let Spacing::PerGap(gaps) = &placement.spacing {
        if gaps.len() != items.len().saturating_sub(1) {
            return Err(RenderError::Configuration(format!(
                "spacing list has {} gaps for {} items",
                gaps.len(),
                items.len()
            )));
        }
    }

    let mut origin_x = placement.origin_x.unwrap_or(0);
    let mut origin_y = placement.origin_y.unwrap_or(0);
    if placement.center_x.is_some() || placement.center_y.is_some() {
        let mut total_width = 0i32;
        let mut total_height = 0i32;
        for (ii, item) in items.iter().enumerate() {
            total_width += item.width() as i32;
            total_height = total_height.max(item.height() as i32);
            if ii > 0 {
                total_width += placement.spacing.gap(ii - 1);
            }
        }
        if let Some(cx) = placement.center_x {
            origin_x = cx - total_width / 2;
        }
        if let Some(cy) = placement.center_y {
            origin_y = cy - total_height / 2;
        }
    }

    let mut x = origin_x;
    for (ii, item) in items.iter().enumerate() {
        if ii > 0 {
            x += placement.spacing.gap(ii - 1) + items[ii - 1].width() as i32;
        }
        blit(grid, BlitSource::Bits(item), x, origin_y, blit_options);
    }
    Ok(())
}
