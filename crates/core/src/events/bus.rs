//! Event bus - same-process dispatch plus cross-view forwarding.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain_event::DomainEvent;
use super::sink::DomainEventSink;
use super::transport::EventTransport;
use crate::store::Domain;

/// A published event with its origin and publish time.
///
/// The `source` tag identifies the publishing bus so a view never re-handles
/// an event it published itself when it comes back over the transport.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub event: DomainEvent,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

type Handler = Arc<dyn Fn(&EventEnvelope) + Send + Sync>;

struct Subscriber {
    id: u64,
    domains: Vec<Domain>,
    handler: Handler,
}

struct BusInner {
    source_tag: String,
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
    transport: RwLock<Option<Arc<dyn EventTransport>>>,
}

/// Propagates domain-changed events to every interested consumer.
///
/// Same-process subscribers are invoked synchronously within `publish`, each
/// exactly once per event. The envelope is then serialized and handed to the
/// attached transport (best-effort, failures logged) so sibling views of the
/// same session can react. Clones share the same subscriber list.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                source_tag: Uuid::new_v4().to_string(),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
                transport: RwLock::new(None),
            }),
        }
    }

    /// The tag stamped on every envelope this bus publishes.
    pub fn source_tag(&self) -> &str {
        &self.inner.source_tag
    }

    /// Attaches the cross-view transport. Replaces any previous one.
    pub fn set_transport(&self, transport: Arc<dyn EventTransport>) {
        *self.inner.transport.write().unwrap() = Some(transport);
    }

    /// Registers `handler` for one or more domains.
    ///
    /// The returned subscription removes the handler when unsubscribed or
    /// dropped via `unsubscribe`; until then every matching publish invokes
    /// the handler exactly once.
    pub fn subscribe<F>(&self, domains: &[Domain], handler: F) -> Subscription
    where
        F: Fn(&EventEnvelope) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.write().unwrap().push(Subscriber {
            id,
            domains: domains.to_vec(),
            handler: Arc::new(handler),
        });
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Publishes an event to same-process subscribers and, best-effort, to
    /// sibling views over the attached transport.
    pub fn publish(&self, event: DomainEvent) {
        let envelope = EventEnvelope {
            event,
            source: self.inner.source_tag.clone(),
            published_at: Utc::now(),
        };

        self.dispatch(&envelope);
        self.forward(&envelope);
    }

    /// Handles a serialized envelope observed on the shared channel.
    ///
    /// Frames published by this bus itself and frames that fail to parse are
    /// ignored; a malformed frame is never an error condition.
    pub fn receive_remote(&self, frame: &str) {
        let envelope: EventEnvelope = match serde_json::from_str(frame) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Ignoring malformed event frame: {}", e);
                return;
            }
        };

        if envelope.source == self.inner.source_tag {
            debug!("Ignoring own {} event echoed by transport", envelope.event.domain());
            return;
        }

        self.dispatch(&envelope);
    }

    fn dispatch(&self, envelope: &EventEnvelope) {
        let domain = envelope.event.domain();
        // Snapshot the matching handlers before invoking them, so a handler
        // may itself subscribe or unsubscribe without deadlocking.
        let handlers: Vec<Handler> = {
            let subscribers = self.inner.subscribers.read().unwrap();
            subscribers
                .iter()
                .filter(|subscriber| subscriber.domains.contains(&domain))
                .map(|subscriber| subscriber.handler.clone())
                .collect()
        };
        for handler in handlers {
            handler(envelope);
        }
    }

    fn forward(&self, envelope: &EventEnvelope) {
        let transport = self.inner.transport.read().unwrap().clone();
        let Some(transport) = transport else {
            return;
        };

        match serde_json::to_string(envelope) {
            Ok(frame) => {
                if let Err(e) = transport.send(&frame) {
                    warn!("Event transport delivery failed: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize event envelope: {}", e),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEventSink for EventBus {
    fn emit(&self, event: DomainEvent) {
        self.publish(event);
    }
}

/// Handle for removing a registered subscriber.
pub struct Subscription {
    id: u64,
    inner: Weak<BusInner>,
}

impl Subscription {
    /// Removes the handler; it receives no further events.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .subscribers
                .write()
                .unwrap()
                .retain(|subscriber| subscriber.id != self.id);
        }
    }
}
