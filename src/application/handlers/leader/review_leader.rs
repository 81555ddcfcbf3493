//! ReviewLeaderHandler - admin approval or rejection of a submitted profile.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, LeaderId, NotificationId};
use crate::domain::leader::Leader;
use crate::domain::notification::{Notification, NotificationKind};
use crate::ports::{LeaderRepository, NotificationRepository};

/// The review outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Command to review a pending leader profile.
#[derive(Debug, Clone)]
pub struct ReviewLeaderCommand {
    pub leader_id: LeaderId,
    pub decision: ReviewDecision,
}

/// Handler for leader review. Admin only.
///
/// The submitter is notified of the outcome; a failed notification is
/// logged but doesn't fail the review.
pub struct ReviewLeaderHandler {
    leaders: Arc<dyn LeaderRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl ReviewLeaderHandler {
    pub fn new(
        leaders: Arc<dyn LeaderRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            leaders,
            notifications,
        }
    }

    pub async fn handle(&self, cmd: ReviewLeaderCommand, actor: &Actor) -> Result<Leader, DomainError> {
        actor.check_admin()?;

        let mut leader = self
            .leaders
            .find_by_id(&cmd.leader_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LeaderNotFound,
                    format!("Leader not found: {}", cmd.leader_id),
                )
            })?;

        match cmd.decision {
            ReviewDecision::Approve => leader.approve(),
            ReviewDecision::Reject => leader.reject(),
        }
        self.leaders.update(&leader).await?;

        let outcome = match cmd.decision {
            ReviewDecision::Approve => "approved",
            ReviewDecision::Reject => "rejected",
        };
        let notification = Notification::new(
            NotificationId::new(),
            *leader.submitted_by(),
            NotificationKind::LeaderReviewed,
            format!("Your leader submission was {}", outcome),
            format!("\"{}\" was {} by a moderator.", leader.profile().full_name, outcome),
        )?;
        if let Err(e) = self.notifications.create(&notification).await {
            tracing::warn!(error = %e, leader_id = %leader.id(), "review notification failed");
        }

        tracing::info!(leader_id = %leader.id(), outcome, "leader reviewed");
        Ok(leader)
    }
}
