//! Payload types for the toolbar event relay.
//!
//! These records are the wire vocabulary shared with the browser side of the
//! toolbar; serialized names and values are fixed and not user-configurable.

use serde::{Deserialize, Serialize};

/// Event name for notification-state changes.
pub const TOGGLE_NOTIFICATION: &str = "toggle-notification";
/// Event name for app activation changes.
pub const APP_TOGGLED: &str = "app-toggled";
/// Event name for toolbar placement changes.
pub const PLACEMENT_UPDATED: &str = "placement-updated";

/// Severity of an active toolbar notification badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Error,
    Warn,
    Info,
}

/// Notification state broadcast by a toolbar app.
///
/// A level only exists while the notification is active; the inactive state
/// carries none. Wire input such as `{"active": false, "level": "warn"}`
/// normalizes to plain [`Inactive`](Self::Inactive) when constructed, so a
/// stray level can never reach listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NotificationWire", into = "NotificationWire")]
pub enum NotificationPayload {
    Active { level: Option<NotificationLevel> },
    Inactive,
}

impl NotificationPayload {
    /// Active notification with no particular severity.
    pub fn active() -> Self {
        Self::Active { level: None }
    }

    /// Active notification at the given severity.
    pub fn active_with(level: NotificationLevel) -> Self {
        Self::Active { level: Some(level) }
    }

    pub fn inactive() -> Self {
        Self::Inactive
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn level(&self) -> Option<NotificationLevel> {
        match self {
            Self::Active { level } => *level,
            Self::Inactive => None,
        }
    }
}

/// Serialized form of [`NotificationPayload`], and the shape the browser
/// toolbar sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export, rename = "NotificationPayload"))]
pub struct NotificationWire {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "typescript", ts(optional))]
    pub level: Option<NotificationLevel>,
}

impl From<NotificationWire> for NotificationPayload {
    fn from(wire: NotificationWire) -> Self {
        if wire.active {
            Self::Active { level: wire.level }
        } else {
            Self::Inactive
        }
    }
}

impl From<NotificationPayload> for NotificationWire {
    fn from(payload: NotificationPayload) -> Self {
        match payload {
            NotificationPayload::Active { level } => Self {
                active: true,
                level,
            },
            NotificationPayload::Inactive => Self {
                active: false,
                level: None,
            },
        }
    }
}

/// App activation state broadcast on the `app-toggled` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AppStatePayload {
    pub active: bool,
}

/// Screen anchor of the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarPlacement {
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

/// Serialized record form of a placement update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PlacementPayload {
    pub placement: ToolbarPlacement,
}

impl From<ToolbarPlacement> for PlacementPayload {
    fn from(placement: ToolbarPlacement) -> Self {
        Self { placement }
    }
}

impl From<PlacementPayload> for ToolbarPlacement {
    fn from(payload: PlacementPayload) -> Self {
        payload.placement
    }
}
