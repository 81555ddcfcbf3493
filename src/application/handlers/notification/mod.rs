//! Notification handlers.

mod list_notifications;
mod mark_read;
mod notify_user;

pub use list_notifications::{ListNotificationsHandler, UnreadCountHandler};
pub use mark_read::{DeleteNotificationHandler, MarkAllReadHandler, MarkNotificationReadHandler};
pub use notify_user::{NotifyUserCommand, NotifyUserHandler};
