/*
 *  clockface.rs
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
//! The top-level frame builder: picks a backdrop from the sun state,
//! overlays precipitation, renders the right clock scene, and folds it
//! all into one frame.

use chrono::Local;

use crate::animation::{animated_sun, Rain, RAIN_COLOR};
use crate::compositor::{blit, BlendMode, BlitOptions, BlitSource};
use crate::engine::{DataKey, ForecastKey, Snapshot};
use crate::error::RenderError;
use crate::font::{FontBook, FontId};
use crate::grid::Grid;
use crate::layout::{Placement, Spacing};
use crate::scene::{MissingDataPolicy, Scene, SceneGroup};

/// The default face: big hours and minutes, tiny seconds and temperature,
/// a forecast icon in the left margin.
fn large_with_temperature(width: usize, height: usize) -> Result<Scene, RenderError> {
    Scene::new(
        width,
        height,
        vec![
            SceneGroup::data(
                "forecast_icon",
                DataKey::ForecastFrame,
                &[FontId::Glyphs],
                Placement::origin(2, 10, Spacing::Uniform(0)),
            ),
            SceneGroup::data(
                "hour_digits",
                DataKey::HourDigits,
                &[FontId::NumbersLarge],
                Placement::origin(13, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "separator",
                DataKey::Separator,
                &[FontId::NumbersLarge],
                Placement::origin(27, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "minute_digits",
                DataKey::MinuteDigits,
                &[FontId::NumbersLarge],
                Placement::origin(30, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "second_digits",
                DataKey::SecondDigits,
                &[FontId::NumbersTiny],
                Placement::origin(44, 18, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "temp_digits",
                DataKey::TempDigits,
                &[FontId::NumbersTiny, FontId::LettersTiny, FontId::Glyphs],
                Placement::origin(44, 9, Spacing::Uniform(1)),
            ),
        ],
    )
}

/// The commute face: small HH:MM:SS on the top row, traffic delay and
/// door-to-door time on the bottom.
fn traffic_face(width: usize, height: usize) -> Result<Scene, RenderError> {
    Scene::new(
        width,
        height,
        vec![
            SceneGroup::data(
                "hour_digits",
                DataKey::HourDigits,
                &[FontId::NumbersSmall],
                Placement::origin(15, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "hour_minute_separator",
                DataKey::Separator,
                &[FontId::NumbersSmall],
                Placement::origin(25, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "minute_digits",
                DataKey::MinuteDigits,
                &[FontId::NumbersSmall],
                Placement::origin(27, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "minute_second_separator",
                DataKey::Separator,
                &[FontId::NumbersSmall],
                Placement::origin(37, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "minute_second_separator_2",
                DataKey::Separator,
                &[FontId::NumbersSmall],
                Placement::origin(38, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "second_digits",
                DataKey::SecondDigits,
                &[FontId::NumbersSmall],
                Placement::origin(40, 9, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "traffic_delta",
                DataKey::TrafficDeltaDigits,
                &[FontId::NumbersSmall],
                Placement::origin(15, 17, Spacing::Uniform(1)),
            ),
            SceneGroup::data(
                "travel_time",
                DataKey::TravelTimeDigits,
                &[FontId::NumbersSmall],
                Placement::origin(40, 17, Spacing::Uniform(1)),
            ),
        ],
    )
}

pub struct ClockFace {
    width: usize,
    height: usize,
    fonts: FontBook,
    large_scene: Scene,
    traffic_scene: Scene,
    rain: Rain,
}

impl ClockFace {
    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        Ok(ClockFace {
            width,
            height,
            fonts: FontBook::builtin(),
            large_scene: large_with_temperature(width, height)?,
            traffic_scene: traffic_face(width, height)?,
            rain: Rain::new(width, height),
        })
    }

    /// Builds one finished frame from the current snapshot.
    pub fn compose(&mut self, snapshot: &Snapshot) -> Result<Grid, RenderError> {
        self.compose_at(snapshot, Local::now().timestamp())
    }

    /// Clock-injected variant of [`compose`].
    pub fn compose_at(&mut self, snapshot: &Snapshot, now_secs: i64) -> Result<Grid, RenderError> {
        // Backdrop: sun sweep during a transition, a soft wash while the
        // sun is up, black at night.
        let mut frame = if snapshot.show_sunrise {
            animated_sun(self.width, self.height, snapshot.sunrise_anim_pct, true, now_secs)
        } else if snapshot.show_sunset {
            animated_sun(self.width, self.height, snapshot.sunset_anim_pct, false, now_secs)
        } else if snapshot.sun_is_up {
            Grid::filled(self.width, self.height, snapshot.color)
        } else {
            Grid::new(self.width, self.height)
        };

        if let Some(key) = snapshot.forecast_key {
            if key.is_precipitation() {
                // storms just rain twice as hard
                self.rain.set_density(match key {
                    ForecastKey::Storm => Rain::DROPLET_DENSITY * 2.0,
                    _ => Rain::DROPLET_DENSITY,
                });
                let drops = self.rain.next_frame_at(now_secs);
                blit(
                    &mut frame,
                    BlitSource::Bits(drops),
                    0,
                    0,
                    &BlitOptions {
                        mode: BlendMode::Or,
                        color: Some(RAIN_COLOR),
                        ..Default::default()
                    },
                );
            }
        }

        let scene = if snapshot.show_traffic {
            &mut self.traffic_scene
        } else {
            &mut self.large_scene
        };
        let face = scene.render(
            snapshot,
            &self.fonts,
            now_secs,
            Some(snapshot.color),
            None,
            MissingDataPolicy::SkipGroup,
        )?;

        // Xor the face over the backdrop so digits knock holes in the
        // daylight wash instead of vanishing into it.
        blit(
            &mut frame,
            BlitSource::Frame(&face),
            0,
            0,
            &BlitOptions::with_mode(BlendMode::Xor),
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::font::Token;

    fn daytime_snapshot() -> Snapshot {
        Snapshot {
            hour_digits: [Token::Digit(1), Token::Digit(2)],
            minute_digits: [Token::Digit(3), Token::Digit(4)],
            second_digits: [Token::Digit(5), Token::Digit(6)],
            temp_digits: vec![Token::Digit(7), Token::Digit(2)],
            sun_is_up: true,
            color: Rgb::new(40, 40, 40),
            ..Default::default()
        }
    }

    #[test]
    fn day_face_renders_and_punches_through_the_wash() {
        let mut face = ClockFace::new(64, 32).unwrap();
        let frame = face.compose_at(&daytime_snapshot(), 0).unwrap();
        // wash survives in the margins
        assert_eq!(frame.get(0, 0), Some(Rgb::new(40, 40, 40)));
        // a digit stroke (top of the hour's '1') xors to black in the wash
        assert_eq!(frame.get(15, 9), Some(Rgb::BLACK));
    }

    #[test]
    fn night_face_renders_digits_on_black() {
        let mut face = ClockFace::new(64, 32).unwrap();
        let mut snap = daytime_snapshot();
        snap.sun_is_up = false;
        snap.color = Rgb::new(3, 0, 0);
        let frame = face.compose_at(&snap, 0).unwrap();
        assert_eq!(frame.get(0, 0), Some(Rgb::BLACK));
        // the hour's first stroke shows in the face color
        assert_eq!(frame.get(15, 9), Some(Rgb::new(3, 0, 0)));
    }

    #[test]
    fn rain_key_overlays_droplets() {
        let mut face = ClockFace::new(64, 32).unwrap();
        face.rain = Rain::seeded(64, 32, 3);
        let mut snap = daytime_snapshot();
        snap.sun_is_up = false;
        snap.forecast_key = Some(ForecastKey::Rain);
        // let the shift register fill before looking
        let mut frame = face.compose_at(&snap, 100).unwrap();
        for tick in 1..10 {
            frame = face.compose_at(&snap, 100 + tick).unwrap();
        }
        let rain_pixels = (0..32)
            .flat_map(|y| (0..64).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.get(x, y).unwrap() == RAIN_COLOR)
            .count();
        assert!(rain_pixels > 0, "no rain-colored pixels with a rain forecast");
    }

    #[test]
    fn traffic_face_swaps_in_when_shown() {
        let mut face = ClockFace::new(64, 32).unwrap();
        let mut snap = daytime_snapshot();
        snap.sun_is_up = false;
        snap.color = Rgb::new(10, 10, 10);
        snap.show_traffic = true;
        snap.traffic_delta_digits = Some([Token::Digit(0), Token::Digit(8)]);
        snap.travel_time_digits = Some([Token::Digit(3), Token::Digit(3)]);
        let traffic_frame = face.compose_at(&snap, 0).unwrap();
        // the commute row renders on the traffic face
        let commute_row_lit = (15..24).any(|x| traffic_frame.get(x, 17).unwrap().is_lit());
        assert!(commute_row_lit);

        snap.show_traffic = false;
        let large_frame = face.compose_at(&snap, 0).unwrap();
        assert_ne!(traffic_frame, large_frame);
    }
}
