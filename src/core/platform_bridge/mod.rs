//=========================================================================
// Platform Bridge
//
// The only types both threads share. The window thread produces
// `PlatformEvent`s; the logic thread consumes them through
// `EventCollector`.
//
//=========================================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

pub(crate) use event_collector::{EventCollector, Frame};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
