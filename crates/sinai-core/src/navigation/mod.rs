//! Cross-component navigation.
//!
//! The search overlay holds no reference to the map or the timeline. It
//! publishes a typed `NavigationSignal` on a shared `NavigationBus`, and the
//! widgets subscribe to the variant they consume. Dispatch is fire-and-forget:
//! there is no acknowledgment, timeout or retry.

mod bus;
mod navigator;
mod signal;

pub use bus::{NavigationBus, SubscriptionId};
pub use navigator::{HeadlessScroller, NavigationOutcome, Navigator, Scroller, Section};
pub use signal::NavigationSignal;
