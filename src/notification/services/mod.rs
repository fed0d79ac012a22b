//! Application services for notification inboxes.

mod inbox;

pub use inbox::{
    INBOX_LIMIT, NotificationService, NotificationServiceError, NotificationServiceResult,
};
