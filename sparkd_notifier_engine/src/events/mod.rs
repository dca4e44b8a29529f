//! Simple stateless pub-sub event bus
//!
//! Record changes are published as typed events. Components subscribe to them by registering hooks in
//! [`EventHooks`], which are turned into running [`EventHandlers`]. Producers for each hook are handed to the APIs
//! that publish the events.
mod channel;
mod event_types;
mod hooks;

pub use channel::{EventHandler, EventProducer, Handler};
pub use event_types::*;
pub use hooks::{EventHandlers, EventHooks, EventProducers};
