//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. The presentation layer implements
//! the sink to translate domain events into UI updates.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
