//! Cross-view event transport boundary.

use std::sync::{Arc, RwLock};

use super::bus::EventBus;
use crate::errors::Result;

/// The "write a key, sibling views observe the write" collaborator boundary.
///
/// Any primitive with at-least-once, best-effort delivery satisfies this
/// contract; consumers must not assume ordering or exactly-once delivery.
pub trait EventTransport: Send + Sync {
    /// Delivers a serialized envelope to sibling views.
    fn send(&self, frame: &str) -> Result<()>;
}

/// Transport connecting every bus attached to the same hub.
///
/// Stands in for the browser's shared-storage channel when several views run
/// in one process, and doubles as the test transport. A frame sent by one
/// bus is observed by all attached buses; each bus drops its own frames by
/// source tag, so attaching the sender too is harmless.
#[derive(Clone, Default)]
pub struct InProcessHub {
    buses: Arc<RwLock<Vec<EventBus>>>,
}

impl InProcessHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bus with the hub and wires the hub in as its transport.
    pub fn attach(&self, bus: &EventBus) {
        self.buses.write().unwrap().push(bus.clone());
        bus.set_transport(Arc::new(self.clone()));
    }

    /// Number of attached buses.
    pub fn len(&self) -> usize {
        self.buses.read().unwrap().len()
    }

    /// True if no bus is attached.
    pub fn is_empty(&self) -> bool {
        self.buses.read().unwrap().is_empty()
    }
}

impl EventTransport for InProcessHub {
    fn send(&self, frame: &str) -> Result<()> {
        let buses = self.buses.read().unwrap().clone();
        for bus in &buses {
            bus.receive_remote(frame);
        }
        Ok(())
    }
}
