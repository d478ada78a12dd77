/*
 *  scene.rs
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
//! Declarative scene descriptions and their resolution into a frame.
//! Scenes are validated once when built; each render walks the groups
//! independently, so one group failing never corrupts its neighbors.

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use crate::animation::{ProceduralAnimation, Rain};
use crate::color::Rgb;
use crate::compositor::{BlendMode, BlitOptions};
use crate::engine::{DataKey, Snapshot};
use crate::error::RenderError;
use crate::font::{resolve_chain, FontBook, FontId, Glyph};
use crate::grid::Grid;
use crate::layout::{place, Placement};

/// What happens when a data-keyed group's snapshot field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDataPolicy {
    /// Log and move on; the rest of the scene still renders.
    #[default]
    SkipGroup,
    /// Fail the whole frame.
    AbortScene,
}

/// Source of truth for one group's displayed content.
pub enum GroupContent {
    /// A fixed bitmap.
    Static(Glyph),
    /// A frame list indexed by wall-clock seconds.
    Animated(Vec<Glyph>),
    /// A generator advancing on its own clock.
    Procedural(Box<dyn ProceduralAnimation + Send>),
    /// A snapshot lookup resolved through an ordered font chain.
    Data { key: DataKey, fonts: Vec<FontId> },
}

pub struct SceneGroup {
    pub name: String,
    pub placement: Placement,
    pub content: GroupContent,
    pub color: Option<Rgb>,
    pub mask: bool,
}

impl SceneGroup {
    pub fn data(name: &str, key: DataKey, fonts: &[FontId], placement: Placement) -> Self {
        SceneGroup {
            name: name.to_string(),
            placement,
            content: GroupContent::Data { key, fonts: fonts.to_vec() },
            color: None,
            mask: false,
        }
    }
}

/// A named, ordered collection of groups plus the frame dimensions they
/// render into.
pub struct Scene {
    width: usize,
    height: usize,
    groups: Vec<SceneGroup>,
}

impl Scene {
    /// Builds and validates a scene. Anchors, font chains, and names are
    /// checked here once so renders only see well-formed groups.
    pub fn new(width: usize, height: usize, groups: Vec<SceneGroup>) -> Result<Self, RenderError> {
        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            group.placement.validate()?;
            if !seen.insert(group.name.clone()) {
                return Err(RenderError::Configuration(format!(
                    "duplicate scene group '{}'",
                    group.name
                )));
            }
            match &group.content {
                GroupContent::Data { fonts, .. } if fonts.is_empty() => {
                    return Err(RenderError::Configuration(format!(
                        "group '{}' has an empty font chain",
                        group.name
                    )));
                }
                GroupContent::Animated(frames) if frames.is_empty() => {
                    return Err(RenderError::Configuration(format!(
                        "group '{}' has no animation frames",
                        group.name
                    )));
                }
                _ => {}
            }
        }
        Ok(Scene { width, height, groups })
    }

    /// Resolves every group against `snapshot` and accumulates the draws
    /// onto a fresh grid. Group color/mask shadow the globals for that
    /// group only.
    pub fn render(
        &mut self,
        snapshot: &Snapshot,
        fonts: &FontBook,
        now_secs: i64,
        global_color: Option<Rgb>,
        global_brightness: Option<f32>,
        policy: MissingDataPolicy,
    ) -> Result<Grid, RenderError> {
        let mut grid = Grid::new(self.width, self.height);
        for group in &mut self.groups {
            let opts = BlitOptions {
                mode: BlendMode::Or,
                color: group.color.or(global_color),
                brightness: global_brightness,
                mask: group.mask,
                ..Default::default()
            };
            let result = render_group(&mut grid, group, snapshot, fonts, now_secs, &opts);
            match result {
                Ok(()) => {}
                Err(e @ RenderError::MissingData { .. })
                    if policy == MissingDataPolicy::SkipGroup =>
                {
                    debug!("skipping scene group '{}': {}", group.name, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(grid)
    }
}

fn render_group(
    grid: &mut Grid,
    group: &mut SceneGroup,
    snapshot: &Snapshot,
    fonts: &FontBook,
    now_secs: i64,
    opts: &BlitOptions,
) -> Result<(), RenderError> {
    match &mut group.content {
        GroupContent::Static(item) => place(grid, &[&*item], &group.placement, opts),
        GroupContent::Animated(frames) => {
            let idx = now_secs.rem_euclid(frames.len() as i64) as usize;
            place(grid, &[&frames[idx]], &group.placement, opts)
        }
        GroupContent::Procedural(generator) => {
            let frame = generator.next_frame();
            place(grid, &[frame], &group.placement, opts)
        }
        GroupContent::Data { key, fonts: choices } => {
            let tokens = snapshot
                .lookup(*key)
                .ok_or(RenderError::MissingData { key: *key })?;
            let sources: Vec<_> = choices.iter().map(|id| fonts.get(*id)).collect();
            let glyphs = resolve_chain(&tokens, &sources)?;
            place(grid, &glyphs, &group.placement, opts)
        }
    }
}

// ---------------------------------------------------------------------------
// YAML scene descriptions
// ---------------------------------------------------------------------------

/// On-disk shape of one group. Exactly one of `item`,
/// `procedural_animation`, or `data_key` must be present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupSpec {
    spatial: Placement,
    #[serde(default)]
    item: Option<Vec<Vec<u8>>>,
    #[serde(default)]
    procedural_animation: Option<String>,
    #[serde(default)]
    data_key: Option<DataKey>,
    #[serde(default)]
    font: Option<FontId>,
    #[serde(default)]
    font_choices: Option<Vec<FontId>>,
    #[serde(default)]
    color: Option<Rgb>,
    #[serde(default)]
    mask: bool,
}

impl GroupSpec {
    fn into_group(self, name: String, width: usize, height: usize) -> Result<SceneGroup, RenderError> {
        let content = match (self.item, self.procedural_animation, self.data_key) {
            (Some(rows), None, None) => GroupContent::Static(Glyph::from_vec(rows)),
            (None, Some(kind), None) => match kind.as_str() {
                "rain" => GroupContent::Procedural(Box::new(Rain::new(width, height))),
                other => {
                    return Err(RenderError::Configuration(format!(
                        "group '{}' names unknown procedural animation '{}'",
                        name, other
                    )));
                }
            },
            (None, None, Some(key)) => {
                let fonts = match (self.font, self.font_choices) {
                    (Some(_), Some(_)) => {
                        return Err(RenderError::Configuration(format!(
                            "group '{}' sets both font and font_choices",
                            name
                        )));
                    }
                    (Some(font), None) => vec![font],
                    (None, Some(choices)) => choices,
                    (None, None) => {
                        return Err(RenderError::Configuration(format!(
                            "group '{}' is data-keyed but names no font",
                            name
                        )));
                    }
                };
                GroupContent::Data { key, fonts }
            }
            _ => {
                return Err(RenderError::Configuration(format!(
                    "group '{}' needs exactly one of item, procedural_animation, data_key",
                    name
                )));
            }
        };
        Ok(SceneGroup {
            name,
            placement: self.spatial,
            content,
            color: self.color,
            mask: self.mask,
        })
    }
}

/// Parses a scene description from YAML against the canonical group
/// schema, validating it once up front.
pub fn scene_from_yaml(yaml: &str, width: usize, height: usize) -> Result<Scene, RenderError> {
    let specs: BTreeMap<String, GroupSpec> = serde_yaml::from_str(yaml)
        .map_err(|e| RenderError::Configuration(format!("scene parse error: {}", e)))?;
    let groups = specs
        .into_iter()
        .map(|(name, spec)| spec.into_group(name, width, height))
        .collect::<Result<Vec<_>, _>>()?;
    Scene::new(width, height, groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Token;
    use crate::layout::Spacing;

    fn snapshot_with_time() -> Snapshot {
        Snapshot {
            hour_digits: [Token::Digit(1), Token::Digit(2)],
            minute_digits: [Token::Digit(3), Token::Digit(4)],
            ..Default::default()
        }
    }

    #[test]
    fn data_group_renders_digits() {
        let fonts = FontBook::builtin();
        let mut scene = Scene::new(
            64,
            32,
            vec![SceneGroup::data(
                "hours",
                DataKey::HourDigits,
                &[FontId::NumbersTiny],
                Placement::origin(0, 0, Spacing::Uniform(1)),
            )],
        )
        .unwrap();
        let grid = scene
            .render(&snapshot_with_time(), &fonts, 0, Some(Rgb::new(10, 10, 10)), None, MissingDataPolicy::SkipGroup)
            .unwrap();
        assert!(!grid.is_blank());
    }

    #[test]
    fn missing_data_policy_skip_vs_abort() {
        let fonts = FontBook::builtin();
        let groups = || {
            vec![
                SceneGroup::data(
                    "traffic",
                    DataKey::TrafficDeltaDigits,
                    &[FontId::NumbersTiny],
                    Placement::origin(0, 8, Spacing::Uniform(1)),
                ),
                SceneGroup::data(
                    "hours",
                    DataKey::HourDigits,
                    &[FontId::NumbersTiny],
                    Placement::origin(0, 0, Spacing::Uniform(1)),
                ),
            ]
        };
        let snap = snapshot_with_time();

        // skip: the present group still draws
        let mut scene = Scene::new(64, 32, groups()).unwrap();
        let grid = scene
            .render(&snap, &fonts, 0, None, None, MissingDataPolicy::SkipGroup)
            .unwrap();
        assert!(!grid.is_blank());

        // abort: the whole frame fails
        let mut scene = Scene::new(64, 32, groups()).unwrap();
        let err = scene
            .render(&snap, &fonts, 0, None, None, MissingDataPolicy::AbortScene)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingData { key: DataKey::TrafficDeltaDigits }));
    }

    #[test]
    fn animated_group_indexes_by_seconds() {
        let fonts = FontBook::builtin();
        let frame_a = Glyph::from_vec(vec![vec![1]]);
        let frame_b = Glyph::from_vec(vec![vec![0]]);
        let mut scene = Scene::new(
            4,
            4,
            vec![SceneGroup {
                name: "blink".to_string(),
                placement: Placement::origin(0, 0, Spacing::Uniform(0)),
                content: GroupContent::Animated(vec![frame_a, frame_b]),
                color: None,
                mask: false,
            }],
        )
        .unwrap();
        let snap = Snapshot::default();
        let even = scene.render(&snap, &fonts, 10, None, None, MissingDataPolicy::SkipGroup).unwrap();
        assert!(even.get(0, 0).unwrap().is_lit());
        let odd = scene.render(&snap, &fonts, 11, None, None, MissingDataPolicy::SkipGroup).unwrap();
        assert!(!odd.get(0, 0).unwrap().is_lit());
    }

    #[test]
    fn validation_rejects_bad_groups() {
        let bad_anchor = SceneGroup::data(
            "x",
            DataKey::HourDigits,
            &[FontId::NumbersTiny],
            Placement::default(),
        );
        assert!(Scene::new(8, 8, vec![bad_anchor]).is_err());

        let empty_fonts = SceneGroup::data(
            "x",
            DataKey::HourDigits,
            &[],
            Placement::origin(0, 0, Spacing::Uniform(0)),
        );
        assert!(Scene::new(8, 8, vec![empty_fonts]).is_err());

        let dup_a = SceneGroup::data(
            "same",
            DataKey::HourDigits,
            &[FontId::NumbersTiny],
            Placement::origin(0, 0, Spacing::Uniform(0)),
        );
        let dup_b = SceneGroup::data(
            "same",
            DataKey::MinuteDigits,
            &[FontId::NumbersTiny],
            Placement::origin(0, 8, Spacing::Uniform(0)),
        );
        assert!(Scene::new(8, 8, vec![dup_a, dup_b]).is_err());
    }

    #[test]
    fn yaml_scene_round_trip() {
        let yaml = r#"
hour_digits:
  spatial:
    origin_x: 1
    origin_y: 1
    spacing: 1
  data_key: hour_digits
  font: numbers_tiny
temp:
  spatial:
    center_x: 16
    origin_y: 10
    spacing: [2]
  data_key: temp_digits
  font_choices: [numbers_tiny, letters_tiny]
  color: [40, 0, 0]
  mask: true
"#;
        let mut scene = scene_from_yaml(yaml, 32, 16).unwrap();
        let mut snap = snapshot_with_time();
        snap.temp_digits = vec![Token::Symbol("E"), Token::Symbol("R")];
        let grid = scene
            .render(&snap, &FontBook::builtin(), 0, None, None, MissingDataPolicy::SkipGroup)
            .unwrap();
        assert!(!grid.is_blank());
    }

    #[test]
    fn yaml_rejects_ambiguous_content() {
        let yaml = r#"
bad:
  spatial:
    origin_x: 0
    origin_y: 0
  data_key: hour_digits
  font: numbers_tiny
  procedural_animation: rain
"#;
        assert!(matches!(
            scene_from_yaml(yaml, 8, 8),
            Err(RenderError::Configuration(_))
        ));
    }
}
