//! Polling fallback for views without a working event transport.
//!
//! Drives a refresh callback on a fixed interval, counts consecutive
//! failures and stops after a bound instead of retrying forever, and pauses
//! while the hosting view is hidden (resuming with an immediate refresh).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::constants::DEFAULT_MAX_REFRESH_FAILURES;
use crate::errors::Result;

/// The refresh callback driven by `AutoRefresh`.
#[async_trait]
pub trait RefreshHandler: Send + Sync {
    /// Performs one refresh round (typically a forced re-fetch).
    async fn refresh(&self) -> Result<()>;
}

struct Inner {
    interval: Duration,
    max_failures: u32,
    handler: Arc<dyn RefreshHandler>,
    running: AtomicBool,
    visible: AtomicBool,
    resumed: Notify,
}

/// Interval-driven refresh with bounded retries and visibility awareness.
///
/// `stop()` guarantees no further handler invocations once it returns;
/// `restart()` resets the failure count. While hidden, ticks are skipped;
/// becoming visible again triggers an immediate refresh.
pub struct AutoRefresh {
    inner: Arc<Inner>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AutoRefresh {
    /// Creates a stopped auto-refresh with the default failure bound.
    pub fn new(interval: Duration, handler: Arc<dyn RefreshHandler>) -> Self {
        Self::with_max_failures(interval, handler, DEFAULT_MAX_REFRESH_FAILURES)
    }

    /// Creates a stopped auto-refresh with an explicit failure bound.
    pub fn with_max_failures(
        interval: Duration,
        handler: Arc<dyn RefreshHandler>,
        max_failures: u32,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                interval,
                max_failures,
                handler,
                running: AtomicBool::new(false),
                visible: AtomicBool::new(true),
                resumed: Notify::new(),
            }),
            task: Mutex::new(None),
        }
    }

    /// Starts the refresh loop. A no-op when already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let mut failures: u32 = 0;
            let mut ticker = tokio::time::interval(inner.interval);
            // The first tick of a tokio interval completes immediately;
            // consume it so the first refresh waits a full interval.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if !inner.visible.load(Ordering::SeqCst) {
                            debug!("Auto refresh tick skipped while hidden");
                            continue;
                        }
                    }
                    _ = inner.resumed.notified() => {
                        debug!("Auto refresh resumed, refreshing immediately");
                    }
                }

                if !inner.running.load(Ordering::SeqCst) {
                    break;
                }

                match inner.handler.refresh().await {
                    Ok(()) => failures = 0,
                    Err(e) => {
                        failures += 1;
                        warn!(
                            "Auto refresh failed ({}/{}): {}",
                            failures, inner.max_failures, e
                        );
                        if failures >= inner.max_failures {
                            warn!(
                                "Auto refresh stopped after {} consecutive failures",
                                failures
                            );
                            inner.running.store(false, Ordering::SeqCst);
                            break;
                        }
                    }
                }
            }
        });

        *self.task.lock().unwrap() = Some(handle);
    }

    /// Stops the loop. No handler invocation happens after this returns.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.task.lock().unwrap().take() {
            handle.abort();
        }
    }

    /// Stops and starts again, resetting the failure count.
    pub fn restart(&self) {
        self.stop();
        self.start();
    }

    /// True while the loop is scheduled (not stopped or failed out).
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Updates the hosting view's visibility.
    ///
    /// Ticks are skipped while hidden; the hidden-to-visible transition
    /// triggers an immediate refresh when the loop is running.
    pub fn set_visible(&self, visible: bool) {
        let was_visible = self.inner.visible.swap(visible, Ordering::SeqCst);
        if visible && !was_visible && self.inner.running.load(Ordering::SeqCst) {
            self.inner.resumed.notify_one();
        }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.stop();
    }
}
