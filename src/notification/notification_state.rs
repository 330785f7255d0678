use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long an alert stays on screen
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn color(self) -> Color {
        match self {
            AlertKind::Info => Color::Cyan,
            AlertKind::Success => Color::Green,
            AlertKind::Warning => Color::Yellow,
            AlertKind::Danger => Color::Red,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Info => " Info ",
            AlertKind::Success => " Success ",
            AlertKind::Warning => " Warning ",
            AlertKind::Danger => " Error ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    pub expires_at: Instant,
}

/// Alerts currently on screen, oldest first
#[derive(Debug, Clone)]
pub struct NotificationState {
    alerts: Vec<Alert>,
    timeout: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self::with_timeout(ALERT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            alerts: Vec::new(),
            timeout,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: AlertKind, now: Instant) {
        let message = message.into();
        log::debug!("alert ({kind:?}): {message}");
        self.alerts.push(Alert {
            message,
            kind,
            expires_at: now + self.timeout,
        });
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Drop expired alerts; returns true if any were removed
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.expires_at > now);
        self.alerts.len() != before
    }

    /// Time until the next alert expires
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.alerts
            .iter()
            .map(|alert| alert.expires_at.saturating_duration_since(now))
            .min()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
