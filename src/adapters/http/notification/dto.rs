//! JSON request/response types for notification endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::notification::{Notification, NotificationKind};

/// Request to send a notification to a user (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyUserRequest {
    pub user_id: UserId,
    #[serde(default = "NotifyUserRequest::default_kind")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl NotifyUserRequest {
    fn default_kind() -> NotificationKind {
        NotificationKind::System
    }
}

/// Inbox listing filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboxParams {
    #[serde(default)]
    pub unread_only: bool,
}

/// A notification as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: String,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id().to_string(),
            user_id: n.user_id().to_string(),
            kind: n.kind(),
            title: n.title().to_string(),
            body: n.body().to_string(),
            read: n.is_read(),
            created_at: n.created_at().to_string(),
        }
    }
}

/// Body for the unread-count endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountResponse {
    pub unread: u64,
}

/// Body for the mark-all-read endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MarkAllReadResponse {
    pub marked: u64,
}
