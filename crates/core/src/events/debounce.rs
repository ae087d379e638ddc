//! Debounced event publishing.
//!
//! Bursty local mutations (a batch delete, a rapid series of edits) would
//! otherwise storm the bus with one event per record and trigger a re-fetch
//! for each. The debouncer coalesces repeated publishes for the same domain
//! within a window into a single trailing publish carrying the latest event.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::bus::EventBus;
use super::domain_event::DomainEvent;
use crate::constants::DEFAULT_DEBOUNCE_MS;
use crate::store::Domain;

/// Coalesces rapid repeated publishes of the same domain.
#[derive(Clone)]
pub struct DebouncedPublisher {
    bus: EventBus,
    window: Duration,
    pending: Arc<Mutex<HashMap<Domain, DomainEvent>>>,
}

impl DebouncedPublisher {
    /// Wraps a bus with the default window.
    pub fn new(bus: EventBus) -> Self {
        Self::with_window(bus, Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    /// Wraps a bus with an explicit window.
    pub fn with_window(bus: EventBus, window: Duration) -> Self {
        Self {
            bus,
            window,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Schedules `event` for publication.
    ///
    /// The first publish for a domain opens the window; further publishes for
    /// the same domain within it replace the pending event. When the window
    /// closes, the latest event is published once. Must be called from within
    /// a tokio runtime.
    pub fn publish(&self, event: DomainEvent) {
        let domain = event.domain();
        let mut pending = self.pending.lock().unwrap();
        let window_open = pending.contains_key(&domain);
        pending.insert(domain, event);
        drop(pending);

        if window_open {
            return;
        }

        let bus = self.bus.clone();
        let pending = Arc::clone(&self.pending);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let event = pending.lock().unwrap().remove(&domain);
            if let Some(event) = event {
                bus.publish(event);
            }
        });
    }

    /// Number of domains with an open window (for diagnostics).
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}
