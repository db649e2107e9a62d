//! Readiness notice for the launched application.
//!
//! Polls the health endpoint on a background thread and prints a single line
//! once it answers. No request is sent during the grace period; an application
//! that exits within it (e.g. the port is already taken) never gets a notice.
//! It never influences the launcher's exit code.

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use url::Url;

use crate::messages;

pub const GRACE_PERIOD: Duration = Duration::from_secs(2);
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

pub struct ReadinessProbe {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<bool>,
}

impl ReadinessProbe {
    pub fn spawn(health_url: Url) -> Self {
        Self::spawn_with(health_url, GRACE_PERIOD, POLL_INTERVAL, PROBE_TIMEOUT)
    }

    pub fn spawn_with(
        health_url: Url,
        grace: Duration,
        interval: Duration,
        timeout: Duration,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            if !wait_unless_stopped(&flag, grace) {
                return false;
            }
            poll(&health_url, &flag, interval, timeout)
        });
        Self { stop, handle }
    }

    /// Stop polling and wait for the thread. Returns whether the app answered.
    pub fn finish(self) -> bool {
        self.stop.store(true, Ordering::SeqCst);
        self.handle.join().unwrap_or(false)
    }
}

/// Sleep for `duration` in short slices. Returns false if stopped meanwhile.
fn wait_unless_stopped(stop: &AtomicBool, duration: Duration) -> bool {
    const SLICE: Duration = Duration::from_millis(50);
    let started = Instant::now();
    while started.elapsed() < duration {
        if stop.load(Ordering::SeqCst) {
            return false;
        }
        thread::sleep(SLICE.min(duration.saturating_sub(started.elapsed())));
    }
    !stop.load(Ordering::SeqCst)
}

fn poll(url: &Url, stop: &AtomicBool, interval: Duration, timeout: Duration) -> bool {
    let client = match reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!(error = %e, "Readiness probe disabled");
            return false;
        }
    };

    let started = Instant::now();
    while !stop.load(Ordering::SeqCst) && started.elapsed() < timeout {
        match client.get(url.clone()).send() {
            Ok(resp) if resp.status().is_success() => {
                println!("{} {}", "✓".green(), messages::SERVICE_READY.green().bold());
                tracing::debug!(url = %url, "Application answered health check");
                return true;
            }
            Ok(resp) => {
                tracing::debug!(status = resp.status().as_u16(), "Health check not ready")
            }
            Err(e) => tracing::trace!(error = %e, "Health check failed"),
        }
        thread::sleep(interval);
    }
    false
}
