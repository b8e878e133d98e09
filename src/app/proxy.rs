//! Defines an abstraction over the event sending mechanism.

use super::events::UserEvent;

/// A trait that abstracts the sending of user events.
/// This is "fire-and-forget" and doesn't return a result, simplifying its
/// use: failing to present an event is the presenter's problem, never the
/// engines'.
pub trait EventProxy {
    fn send_event(&self, event: UserEvent);
}
