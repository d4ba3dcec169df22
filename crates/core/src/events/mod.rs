//! Store events module.
//!
//! Provides the event type and the sink trait the store emits to after a
//! successful mutation. Presentation layers implement the sink to refresh
//! views or log activity.

mod sink;
mod store_event;

pub use sink::*;
pub use store_event::*;
