//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use larder_core::InventoryItem;

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Data events (from the data bridge) ─────────────────────────
    ItemsUpdated(Arc<Vec<InventoryItem>>),

    // ── Connection status ─────────────────────────────────────────
    Connected,
    Disconnected(String),

    // ── Add-item modal ────────────────────────────────────────────
    OpenAddModal,
    CloseAddModal,
    /// Confirm the modal: dispatch the add (if non-empty), clear the
    /// input, and close. An empty value still closes the modal.
    SubmitAdd,

    // ── Search ────────────────────────────────────────────────────
    FocusSearch,
    LeaveSearch,
    /// Search text changed — recompute the filtered view.
    SearchChanged,

    // ── Item operations (selected row) ────────────────────────────
    AddOne,
    RemoveOne,
    Refresh,

    // ── Selection ─────────────────────────────────────────────────
    SelectUp,
    SelectDown,
    SelectTop,
    SelectBottom,

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
    DismissNotification,
}
