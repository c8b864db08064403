//! Toolbar-side relay wiring apps to the toolbar over typed channels.

use crate::channel::EventChannel;
use crate::types::{AppStatePayload, NotificationPayload, ToolbarPlacement};

/// Event hub shared between the toolbar and the apps it hosts.
///
/// Each event kind has its own channel, so a notification toggle never
/// reaches an app-state listener and vice versa. Cloning the relay yields
/// another handle onto the same channels.
#[derive(Clone, Default)]
pub struct ToolbarRelay {
    notification: EventChannel<NotificationPayload>,
    app_state: EventChannel<AppStatePayload>,
    placement: EventChannel<ToolbarPlacement>,
}

impl ToolbarRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or clear an app's notification dot.
    pub fn toggle_notification(&self, payload: NotificationPayload) {
        self.notification.emit(payload);
    }

    /// Announce that an app's UI was opened or closed.
    pub fn toggle_app_state(&self, payload: AppStatePayload) {
        self.app_state.emit(payload);
    }

    /// Move the toolbar to a new placement.
    pub fn update_placement(&self, placement: ToolbarPlacement) {
        self.placement.emit(placement);
    }

    /// Listen for notification toggles.
    pub fn on_notification<F>(&self, listener: F)
    where
        F: Fn(NotificationPayload) + Send + Sync + 'static,
    {
        self.notification.subscribe(listener);
    }

    /// Listen for app open/close announcements.
    pub fn on_app_toggled<F>(&self, listener: F)
    where
        F: Fn(AppStatePayload) + Send + Sync + 'static,
    {
        self.app_state.subscribe(listener);
    }

    /// Listen for toolbar placement changes.
    pub fn on_toolbar_placement<F>(&self, listener: F)
    where
        F: Fn(ToolbarPlacement) + Send + Sync + 'static,
    {
        self.placement.subscribe(listener);
    }
}

impl std::fmt::Debug for ToolbarRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarRelay")
            .field("notification_listeners", &self.notification.listener_count())
            .field("app_state_listeners", &self.app_state.listener_count())
            .field("placement_listeners", &self.placement.listener_count())
            .finish()
    }
}
