/*
 *  main.rs
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

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use chronoled::clockface::ClockFace;
use chronoled::config::{Cli, Config};
use chronoled::engine::ClockEngine;
use chronoled::refresh::{idle_worker, RefreshHandle};
use chronoled::sink::{AnsiSink, FrameSink, NullSink};
use chronoled::traffic::{TrafficClient, TrafficReading};
use chronoled::weather::{WeatherClient, WeatherReading};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn spawn_weather(config: &Config) -> anyhow::Result<RefreshHandle<WeatherReading>> {
    match &config.weather {
        Some(cfg) => {
            let client = WeatherClient::new(cfg).context("building weather client")?;
            Ok(client.spawn(Duration::from_secs(config.weather_cache_minutes() * 60)))
        }
        None => {
            warn!("no weather configured; the face will show the error readout");
            Ok(idle_worker("weather"))
        }
    }
}

fn spawn_traffic(config: &Config) -> anyhow::Result<RefreshHandle<TrafficReading>> {
    match &config.traffic {
        Some(cfg) => {
            let client = TrafficClient::new(cfg).context("building traffic client")?;
            Ok(client.spawn(Duration::from_secs(config.traffic_cache_minutes() * 60)))
        }
        None => {
            info!("no traffic configured; commute rows stay off");
            Ok(idle_worker("traffic"))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli).context("loading configuration")?;

    let default_level = config.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
    info!("chronoled v{} (built {})", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let (width, height) = config.panel_size();
    let update_freq = config.update_freq();

    let weather = spawn_weather(&config)?;
    let traffic = spawn_traffic(&config)?;

    let mut engine = ClockEngine::new(
        weather.rx.clone(),
        traffic.rx.clone(),
        traffic.ctl.clone(),
        config.engine_config(),
    );
    let mut face = ClockFace::new(width, height).context("building clock face")?;
    let mut sink: Box<dyn FrameSink> = if cli.headless {
        Box::new(NullSink::default())
    } else {
        Box::new(AnsiSink::stdout())
    };

    info!("driving {}x{} panel at {}s update cadence", width, height, update_freq);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {
                if !engine.run(update_freq) {
                    continue;
                }
                match face.compose(engine.snapshot()) {
                    Ok(frame) => {
                        if let Err(e) = sink.push(&frame) {
                            error!("frame sink error: {}", e);
                        }
                    }
                    Err(e) => error!("render failed: {}", e),
                }
                if cli.run_once {
                    break;
                }
            }
        }
    }

    weather.stop().await;
    traffic.stop().await;
    info!("shutdown complete");
    Ok(())
}
