//! Event relay for the Devbar developer toolbar.
//!
//! Apps hosted on the toolbar talk to it through a [`ToolbarRelay`]: typed
//! channels for notification toggles, app open/close announcements, and
//! toolbar placement changes. Dispatch is synchronous and ordered; see
//! [`EventChannel`] for the delivery rules.

pub mod channel;
pub mod relay;
pub mod types;

pub use channel::{EventChannel, Listener};
pub use relay::ToolbarRelay;
pub use types::*;
