//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via DomainEventSink, debounces them, and persists
//! the snapshots of the services that changed.

mod planner;
mod queue_worker;
mod sink;

pub use sink::WebDomainEventSink;
