//! Notification domain module.
//!
//! Per-user in-app notifications with a read flag. Created by the system
//! or by admins (e.g. leader approval, admin ticket replies).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, NotificationId, Timestamp, UserId, ValidationError};

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    System,
    LeaderReviewed,
    TicketReply,
    PollOpened,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::System => "system",
            NotificationKind::LeaderReviewed => "leader_reviewed",
            NotificationKind::TicketReply => "ticket_reply",
            NotificationKind::PollOpened => "poll_opened",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(NotificationKind::System),
            "leader_reviewed" => Ok(NotificationKind::LeaderReviewed),
            "ticket_reply" => Ok(NotificationKind::TicketReply),
            "poll_opened" => Ok(NotificationKind::PollOpened),
            other => Err(format!("unknown notification kind: {}", other)),
        }
    }
}

/// An in-app notification for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    user_id: UserId,
    kind: NotificationKind,
    title: String,
    body: String,
    read: bool,
    created_at: Timestamp,
}

impl Notification {
    /// Creates a new unread notification.
    pub fn new(
        id: NotificationId,
        user_id: UserId,
        kind: NotificationKind,
        title: String,
        body: String,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }

        Ok(Self {
            id,
            user_id,
            kind,
            title,
            body,
            read: false,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a notification from persistence (no validation).
    pub fn reconstitute(
        id: NotificationId,
        user_id: UserId,
        kind: NotificationKind,
        title: String,
        body: String,
        read: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            title,
            body,
            read,
            created_at,
        }
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Marks the notification read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_is_unread() {
        let n = Notification::new(
            NotificationId::new(),
            UserId::new(),
            NotificationKind::System,
            "Welcome".into(),
            "Thanks for signing up".into(),
        )
        .unwrap();
        assert!(!n.is_read());
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut n = Notification::new(
            NotificationId::new(),
            UserId::new(),
            NotificationKind::TicketReply,
            "Reply".into(),
            String::new(),
        )
        .unwrap();
        n.mark_read();
        n.mark_read();
        assert!(n.is_read());
    }

    #[test]
    fn empty_title_is_rejected() {
        let result = Notification::new(
            NotificationId::new(),
            UserId::new(),
            NotificationKind::System,
            " ".into(),
            "body".into(),
        );
        assert!(result.is_err());
    }
}
