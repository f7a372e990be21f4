//! UI state - notifications and surface-wide pointer capture

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

// ============================================================================
// Notifications
// ============================================================================

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// A toast with auto-expiry
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message text
    pub message: String,
    pub kind: NotificationKind,
    /// When this notification expires
    pub expires_at: Instant,
}

impl Notification {
    /// Create a new notification visible for `duration`
    pub fn new(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this notification has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// ============================================================================
// Surface capture
// ============================================================================

/// A listener registered on the whole surface while a gesture is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Listener {
    PointerMove,
    PointerUp,
}

/// Which controller holds a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureOwner {
    PanelDrag,
    Reorder,
}

/// Proof that a controller holds the surface listeners.
///
/// Not `Clone`: the only way to give it back is [`SurfaceCapture::release`],
/// so a session that owns one cannot end without releasing it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a capture token must be released through SurfaceCapture::release"]
pub struct CaptureToken {
    owner: CaptureOwner,
}

impl CaptureToken {
    pub fn owner(&self) -> CaptureOwner {
        self.owner
    }
}

/// Surface-wide listeners and text-selection suppression
#[derive(Debug, Clone, Default)]
pub struct SurfaceCapture {
    listeners: Vec<(CaptureOwner, Listener)>,
    selection_suppressed_by: Option<CaptureOwner>,
}

impl SurfaceCapture {
    /// Register pointer-move/up listeners for `owner`
    pub fn acquire(&mut self, owner: CaptureOwner, suppress_selection: bool) -> CaptureToken {
        for listener in [Listener::PointerMove, Listener::PointerUp] {
            if !self.listeners.contains(&(owner, listener)) {
                self.listeners.push((owner, listener));
            }
        }
        if suppress_selection {
            self.selection_suppressed_by = Some(owner);
        }
        CaptureToken { owner }
    }

    /// Remove everything registered for the token's owner
    pub fn release(&mut self, token: CaptureToken) {
        self.listeners.retain(|(owner, _)| *owner != token.owner);
        if self.selection_suppressed_by == Some(token.owner) {
            self.selection_suppressed_by = None;
        }
    }

    pub fn listeners(&self) -> &[(CaptureOwner, Listener)] {
        &self.listeners
    }

    pub fn is_held_by(&self, owner: CaptureOwner) -> bool {
        self.listeners.iter().any(|(o, _)| *o == owner)
    }

    pub fn text_selection_suppressed(&self) -> bool {
        self.selection_suppressed_by.is_some()
    }

    /// No listeners registered and text selection enabled
    pub fn is_idle(&self) -> bool {
        self.listeners.is_empty() && self.selection_suppressed_by.is_none()
    }
}

// ============================================================================
// UiState
// ============================================================================

/// UI state shared by both drag controllers
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Visible notifications, oldest first
    pub notifications: Vec<Notification>,
    /// Listeners installed for the active gesture (if any)
    pub surface: SurfaceCapture,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, duration: Duration) {
        self.notifications
            .push(Notification::new(message, kind, duration));
    }

    /// Drop expired notifications.
    /// Returns true if anything was removed (needs redraw)
    pub fn prune_notifications(&mut self) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired());
        self.notifications.len() != before
    }

    /// Most recent notification, if any
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}
