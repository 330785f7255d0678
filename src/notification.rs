//! Transient alerts and the loading overlay
//!
//! Alerts stack in the top-right corner and expire on their own. The loading
//! overlay covers the whole screen while a search is submitted.

mod loading;
mod notification_render;
mod notification_state;

pub use loading::{LOADING_MESSAGE, LoadingState};
pub use notification_render::{render_loading, render_notifications};
pub use notification_state::{ALERT_TIMEOUT, Alert, AlertKind, NotificationState};
