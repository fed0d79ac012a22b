//! In-memory notification storage.

mod notification;

pub use notification::InMemoryNotificationRepository;
