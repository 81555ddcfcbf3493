//! Support domain module.
//!
//! Support tickets opened by users (or anonymously, with just an email)
//! and the admin messages attached to them. Entering `Resolved` stamps
//! `resolved_at`; reopening clears it, so resolution-time stats only
//! average tickets that actually carry a resolution timestamp.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    AdminMessageId, DomainError, ErrorCode, TicketId, Timestamp, UserId, ValidationError,
};

/// Status vocabulary for support tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// All statuses, in lifecycle order.
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(format!("unknown ticket status: {}", other)),
        }
    }
}

/// A support ticket.
///
/// `user_id` is optional: anonymous visitors may open tickets with just a
/// contact email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    id: TicketId,
    user_id: Option<UserId>,
    email: String,
    subject: String,
    body: String,
    status: TicketStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
    resolved_at: Option<Timestamp>,
}

impl SupportTicket {
    /// Opens a new ticket.
    pub fn new(
        id: TicketId,
        user_id: Option<UserId>,
        email: String,
        subject: String,
        body: String,
    ) -> Result<Self, DomainError> {
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing '@'").into());
        }
        if subject.trim().is_empty() {
            return Err(ValidationError::empty_field("subject").into());
        }
        if body.trim().is_empty() {
            return Err(ValidationError::empty_field("body").into());
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            email,
            subject,
            body,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        })
    }

    /// Reconstitutes a ticket from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TicketId,
        user_id: Option<UserId>,
        email: String,
        subject: String,
        body: String,
        status: TicketStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
        resolved_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            email,
            subject,
            body,
            status,
            created_at,
            updated_at,
            resolved_at,
        }
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn resolved_at(&self) -> Option<&Timestamp> {
        self.resolved_at.as_ref()
    }

    /// Moves the ticket to a new status.
    ///
    /// Entering `Resolved` stamps `resolved_at`; leaving it clears the
    /// stamp. Closed tickets cannot change status.
    pub fn transition(&mut self, status: TicketStatus) -> Result<(), DomainError> {
        if self.status == TicketStatus::Closed {
            return Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                "Closed tickets cannot change status",
            ));
        }
        if status == TicketStatus::Resolved && self.status != TicketStatus::Resolved {
            self.resolved_at = Some(Timestamp::now());
        }
        if status != TicketStatus::Resolved && status != TicketStatus::Closed {
            self.resolved_at = None;
        }
        self.status = status;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

/// An admin reply attached to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminMessage {
    pub id: AdminMessageId,
    pub ticket_id: TicketId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: Timestamp,
}

impl AdminMessage {
    /// Creates a new admin message.
    pub fn new(
        id: AdminMessageId,
        ticket_id: TicketId,
        author_id: UserId,
        body: String,
    ) -> Result<Self, DomainError> {
        if body.trim().is_empty() {
            return Err(ValidationError::empty_field("body").into());
        }
        Ok(Self {
            id,
            ticket_id,
            author_id,
            body,
            created_at: Timestamp::now(),
        })
    }
}

/// Aggregate view over all tickets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketStats {
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
    /// Mean hours from `created_at` to `resolved_at` over tickets that have
    /// one, rounded to two decimals; 0.0 when none do.
    pub avg_resolution_hours: f64,
}

impl TicketStats {
    /// Computes stats from status counts and resolution durations (hours).
    pub fn compute(counts: &[(TicketStatus, u64)], resolution_hours: &[f64]) -> Self {
        let count_for = |status: TicketStatus| {
            counts
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        let avg = if resolution_hours.is_empty() {
            0.0
        } else {
            let sum: f64 = resolution_hours.iter().sum();
            let avg = sum / resolution_hours.len() as f64;
            (avg * 100.0).round() / 100.0
        };

        Self {
            open: count_for(TicketStatus::Open),
            in_progress: count_for(TicketStatus::InProgress),
            resolved: count_for(TicketStatus::Resolved),
            closed: count_for(TicketStatus::Closed),
            avg_resolution_hours: avg,
        }
    }
}
