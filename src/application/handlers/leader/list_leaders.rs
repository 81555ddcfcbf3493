//! Query handlers for leader lookups and listings.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, LeaderId};
use crate::domain::leader::{ApprovalStatus, Leader};
use crate::ports::{LeaderFilter, LeaderRepository};

/// Query for one leader by id.
#[derive(Debug, Clone)]
pub struct GetLeaderQuery {
    pub leader_id: LeaderId,
}

/// Handler for fetching a single leader.
pub struct GetLeaderHandler {
    repository: Arc<dyn LeaderRepository>,
}

impl GetLeaderHandler {
    pub fn new(repository: Arc<dyn LeaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetLeaderQuery) -> Result<Leader, DomainError> {
        self.repository
            .find_by_id(&query.leader_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LeaderNotFound,
                    format!("Leader not found: {}", query.leader_id),
                )
            })
    }
}

/// Query for the public approved-leader listing.
#[derive(Debug, Clone, Default)]
pub struct ListLeadersQuery {
    pub region: Option<String>,
    pub office: Option<String>,
}

/// Handler for the public listing.
///
/// Degrades gracefully on read failure: logs and returns an empty list.
pub struct ListLeadersHandler {
    repository: Arc<dyn LeaderRepository>,
}

impl ListLeadersHandler {
    pub fn new(repository: Arc<dyn LeaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListLeadersQuery) -> Result<Vec<Leader>, DomainError> {
        let filter = LeaderFilter {
            region: query.region,
            office: query.office,
        };

        match self
            .repository
            .list_by_status(ApprovalStatus::Approved, &filter)
            .await
        {
            Ok(leaders) => Ok(leaders),
            Err(e) => {
                tracing::warn!(error = %e, "leader listing failed, returning empty");
                Ok(Vec::new())
            }
        }
    }
}

/// Handler for the admin pending-review queue.
pub struct ListPendingLeadersHandler {
    repository: Arc<dyn LeaderRepository>,
}

impl ListPendingLeadersHandler {
    pub fn new(repository: Arc<dyn LeaderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, actor: &Actor) -> Result<Vec<Leader>, DomainError> {
        actor.check_admin()?;
        self.repository
            .list_by_status(ApprovalStatus::Pending, &LeaderFilter::default())
            .await
    }
}
