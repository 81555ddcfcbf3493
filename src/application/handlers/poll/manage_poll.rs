//! Poll lifecycle commands: open, close, delete.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, NotificationId, PollId};
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::poll::Poll;
use crate::ports::{NotificationRepository, PollRepository, UserRepository};

/// Handler opening a draft poll for responses. Admin only.
///
/// Every registered user is notified; notification failures are logged
/// and don't fail the open.
pub struct OpenPollHandler {
    polls: Arc<dyn PollRepository>,
    users: Arc<dyn UserRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl OpenPollHandler {
    pub fn new(
        polls: Arc<dyn PollRepository>,
        users: Arc<dyn UserRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            polls,
            users,
            notifications,
        }
    }

    pub async fn handle(&self, poll_id: PollId, actor: &Actor) -> Result<Poll, DomainError> {
        actor.check_admin()?;

        let mut poll = find_poll(self.polls.as_ref(), &poll_id).await?;
        poll.open()?;
        self.polls.update(&poll).await?;

        match self.users.list().await {
            Ok(users) => {
                for user in users {
                    let notification = Notification::new(
                        NotificationId::new(),
                        *user.id(),
                        NotificationKind::PollOpened,
                        format!("New poll: {}", poll.title()),
                        "A new poll is open for responses.".into(),
                    )?;
                    if let Err(e) = self.notifications.create(&notification).await {
                        tracing::warn!(error = %e, user_id = %user.id(), "poll notification failed");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, poll_id = %poll.id(), "could not notify users of poll");
            }
        }

        tracing::info!(poll_id = %poll.id(), "poll opened");
        Ok(poll)
    }
}

/// Handler closing an active poll. Admin only.
pub struct ClosePollHandler {
    polls: Arc<dyn PollRepository>,
}

impl ClosePollHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(&self, poll_id: PollId, actor: &Actor) -> Result<Poll, DomainError> {
        actor.check_admin()?;

        let mut poll = find_poll(self.polls.as_ref(), &poll_id).await?;
        poll.close()?;
        self.polls.update(&poll).await?;

        tracing::info!(poll_id = %poll.id(), "poll closed");
        Ok(poll)
    }
}

/// Handler deleting a poll and its dependent rows. Admin only.
pub struct DeletePollHandler {
    polls: Arc<dyn PollRepository>,
}

impl DeletePollHandler {
    pub fn new(polls: Arc<dyn PollRepository>) -> Self {
        Self { polls }
    }

    pub async fn handle(&self, poll_id: PollId, actor: &Actor) -> Result<(), DomainError> {
        actor.check_admin()?;

        // Surface PollNotFound before attempting the delete.
        find_poll(self.polls.as_ref(), &poll_id).await?;
        self.polls.delete(&poll_id).await?;

        tracing::info!(poll_id = %poll_id, "poll deleted");
        Ok(())
    }
}

async fn find_poll(polls: &dyn PollRepository, id: &PollId) -> Result<Poll, DomainError> {
    polls.find_by_id(id).await?.ok_or_else(|| {
        DomainError::new(ErrorCode::PollNotFound, format!("Poll not found: {}", id))
    })
}
