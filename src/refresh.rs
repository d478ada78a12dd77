/*
 *  refresh.rs
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
//! Rate-limited background refresh workers. Each worker owns its cache
//! timestamp, fetches only while enabled, and hands results back over a
//! one-slot latest-value-wins channel. Fetch failures are logged and
//! swallowed; the engine just keeps the last good value.

use std::future::Future;
use std::time::{Duration, Instant};

use log::{error, info};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// How often a worker wakes up to check its control and cache state.
const POLL_TICK: Duration = Duration::from_secs(5);

/// Failures confined to the worker boundary; these never reach the
/// engine as errors, only as absent data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

/// The engine-facing side of one refresh worker.
pub struct RefreshHandle<T> {
    /// Latest reading; `None` until the first successful fetch.
    pub rx: watch::Receiver<Option<T>>,
    /// Enable/disable control.
    pub ctl: mpsc::Sender<bool>,
    stop: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl<T> RefreshHandle<T> {
    /// Signals the worker loop and waits for it to wind down.
    pub async fn stop(self) {
        let _ = self.stop.send(()).await;
        if let Err(e) = self.task.await {
            error!("refresh worker failed to join: {}", e);
        }
    }
}

/// Spawns a worker looping over control messages, a stop signal, and a
/// cache-gated fetch. `fetch` is called only while enabled and at most
/// once per `cache_interval`; failed attempts still consume the interval
/// so a broken upstream is not hammered.
pub fn spawn_worker<T, F, Fut>(
    name: &'static str,
    cache_interval: Duration,
    initially_enabled: bool,
    mut fetch: F,
) -> RefreshHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, FetchError>> + Send,
{
    let (data_tx, data_rx) = watch::channel(None);
    let (ctl_tx, mut ctl_rx) = mpsc::channel::<bool>(4);
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        let mut enabled = initially_enabled;
        let mut last_attempt: Option<Instant> = None;
        let mut tick = tokio::time::interval(POLL_TICK);
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                Some(flag) = ctl_rx.recv() => {
                    if flag != enabled {
                        info!("{} worker {}", name, if flag { "enabled" } else { "disabled" });
                    }
                    enabled = flag;
                }
                _ = stop_rx.recv() => {
                    info!("{} worker received stop signal, exiting", name);
                    break;
                }
                _ = tick.tick() => {
                    if !enabled {
                        continue;
                    }
                    if let Some(t) = last_attempt {
                        if t.elapsed() < cache_interval {
                            continue;
                        }
                    }
                    last_attempt = Some(Instant::now());
                    match fetch().await {
                        Ok(reading) => {
                            data_tx.send_replace(Some(reading));
                            info!("{} refresh ok", name);
                        }
                        Err(e) => error!("{} refresh failed: {}", name, e),
                    }
                }
            }
        }
    });

    RefreshHandle { rx: data_rx, ctl: ctl_tx, stop: stop_tx, task }
}

/// A handle wired to nothing: the channel stays empty and control
/// messages are absorbed. Used when a producer is not configured.
pub fn idle_worker<T>(name: &'static str) -> RefreshHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (data_tx, data_rx) = watch::channel(None);
    let (ctl_tx, mut ctl_rx) = mpsc::channel::<bool>(4);
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
    let task = tokio::spawn(async move {
        // keep the sender alive so the engine's poll side stays valid
        let _hold = data_tx;
        loop {
            tokio::select! {
                Some(_) = ctl_rx.recv() => {}
                _ = stop_rx.recv() => break,
            }
        }
        info!("{} idle worker exiting", name);
    });
    RefreshHandle { rx: data_rx, ctl: ctl_tx, stop: stop_tx, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn worker_pushes_latest_value_and_respects_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = spawn_worker("test", Duration::from_secs(600), true, move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, FetchError>(n) }
        });
        let mut rx = handle.rx.clone();

        // first tick fires immediately; a value lands in the slot
        tokio::time::timeout(Duration::from_secs(30), rx.changed()).await.unwrap().unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(0));

        // well within the cache interval: no second fetch
        tokio::time::advance(Duration::from_secs(60)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_worker_never_fetches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = spawn_worker("test", Duration::from_secs(1), false, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, FetchError>(()) }
        });
        tokio::time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(*handle.rx.borrow(), None);
        handle.stop().await;
    }
}
