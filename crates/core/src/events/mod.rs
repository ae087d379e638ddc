//! Update propagation - events, bus, cross-view transport, polling fallback.
//!
//! This module provides:
//! - `DomainEvent` / `EventEnvelope` - typed change notifications
//! - `DomainEventSink` - the emit seam used by the store and services
//! - `EventBus` - same-process synchronous dispatch plus serialized
//!   best-effort delivery over an `EventTransport` to sibling views
//! - `DebouncedPublisher` - coalesces bursts of repeated publishes
//! - `AutoRefresh` - bounded-retry, visibility-aware polling fallback

mod auto_refresh;
mod bus;
mod debounce;
mod domain_event;
mod sink;
mod transport;

pub use auto_refresh::{AutoRefresh, RefreshHandler};
pub use bus::{EventBus, EventEnvelope, Subscription};
pub use debounce::DebouncedPublisher;
pub use domain_event::DomainEvent;
pub use sink::{DomainEventSink, MockDomainEventSink, NoOpDomainEventSink};
pub use transport::{EventTransport, InProcessHub};
