//! Notification domain model.

mod notification;

pub use notification::{Notification, NotificationId, NotificationKind};
