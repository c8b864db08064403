//! Bridge between the Devbar toolbar and the dev server.
//!
//! A [`ServerBridge`] sends and receives typed messages over an optional
//! [`DevTransport`]; without one, it degrades to a no-op so the toolbar
//! works in static previews. [`ToolbarSession`] pairs the bridge with a
//! [`relay::ToolbarRelay`] and forwards app open/close announcements to
//! the server.

mod bridge;
mod messages;
mod session;
mod transport;

pub use bridge::ServerBridge;
pub use messages::HotMessage;
pub use session::ToolbarSession;
pub use transport::{hot_channel, DevTransport, HotCallback, HotChannel};
