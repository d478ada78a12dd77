/*
 *  traffic.rs
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
//! Traffic producer: reduces a directions feed to commute minutes. The
//! worker is spawned disabled and only runs while the engine holds the
//! traffic window open.

use std::time::Duration;

use log::info;
use reqwest::Client;
use serde_json::Value;

use crate::config::TrafficConfig;
use crate::refresh::{spawn_worker, FetchError, RefreshHandle};

/// One cleaned directions observation, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficReading {
    /// Minutes of delay versus the free-flowing route, floored at 0.
    pub traffic_delta: u32,
    /// Total travel time in current traffic.
    pub travel_time: u32,
}

/// Extracts the reading from the first leg of the first route.
fn clean_directions(body: &Value) -> Result<TrafficReading, FetchError> {
    let leg = body["routes"][0]["legs"][0]
        .as_object()
        .ok_or_else(|| FetchError::Shape("routes[0].legs[0] missing".to_string()))?;
    let duration = leg["duration"]["value"]
        .as_i64()
        .ok_or_else(|| FetchError::Shape("duration missing".to_string()))?;
    // The feed doesn't always include duration_in_traffic
    let in_traffic = leg
        .get("duration_in_traffic")
        .and_then(|d| d["value"].as_i64())
        .unwrap_or(duration);
    let delta = if in_traffic > duration { (in_traffic - duration) / 60 } else { 0 };
    Ok(TrafficReading {
        traffic_delta: delta as u32,
        travel_time: (in_traffic / 60) as u32,
    })
}

#[derive(Debug, Clone)]
pub struct TrafficClient {
    client: Client,
    directions_url: String,
}

impl TrafficClient {
    pub fn new(cfg: &TrafficConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(8))
            .build()?;
        Ok(TrafficClient { client, directions_url: cfg.directions_url.clone() })
    }

    pub async fn fetch(&self) -> Result<TrafficReading, FetchError> {
        let body: Value = self
            .client
            .get(&self.directions_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let reading = clean_directions(&body)?;
        info!(
            "traffic: +{}min delay, {}min door to door",
            reading.traffic_delta, reading.travel_time
        );
        Ok(reading)
    }

    /// Moves the client into a background refresh worker, disabled until
    /// the engine opens the traffic window.
    pub fn spawn(self, cache_interval: Duration) -> RefreshHandle<TrafficReading> {
        spawn_worker("traffic", cache_interval, false, move || {
            let client = self.clone();
            async move { client.fetch().await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_directions_computes_delta_minutes() {
        let body = json!({
            "routes": [{"legs": [{
                "duration": {"value": 1500},
                "duration_in_traffic": {"value": 1980},
            }]}]
        });
        let reading = clean_directions(&body).unwrap();
        assert_eq!(reading.traffic_delta, 8);
        assert_eq!(reading.travel_time, 33);
    }

    #[test]
    fn missing_traffic_duration_falls_back() {
        let body = json!({
            "routes": [{"legs": [{"duration": {"value": 1500}}]}]
        });
        let reading = clean_directions(&body).unwrap();
        assert_eq!(reading.traffic_delta, 0);
        assert_eq!(reading.travel_time, 25);
    }

    #[test]
    fn faster_than_usual_floors_at_zero() {
        let body = json!({
            "routes": [{"legs": [{
                "duration": {"value": 1500},
                "duration_in_traffic": {"value": 1200},
            }]}]
        });
        let reading = clean_directions(&body).unwrap();
        assert_eq!(reading.traffic_delta, 0);
        assert_eq!(reading.travel_time, 20);
    }

    #[test]
    fn malformed_payload_is_a_shape_error() {
        let body = json!({"routes": []});
        assert!(matches!(clean_directions(&body), Err(FetchError::Shape(_))));
    }
}
