//! Leader repository port.
//!
//! Listing splits along visibility: the public sees approved leaders,
//! admins also page through the pending review queue.

use crate::domain::foundation::{DomainError, LeaderId};
use crate::domain::leader::{ApprovalStatus, Leader};
use async_trait::async_trait;

/// Optional filters for the public leader listing.
#[derive(Debug, Clone, Default)]
pub struct LeaderFilter {
    pub region: Option<String>,
    pub office: Option<String>,
}

/// Repository port for leader profile persistence.
#[async_trait]
pub trait LeaderRepository: Send + Sync {
    /// Inserts a new leader profile.
    async fn create(&self, leader: &Leader) -> Result<(), DomainError>;

    /// Updates an existing leader profile.
    ///
    /// # Errors
    ///
    /// - `LeaderNotFound` if the leader doesn't exist
    async fn update(&self, leader: &Leader) -> Result<(), DomainError>;

    /// Finds a leader by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &LeaderId) -> Result<Option<Leader>, DomainError>;

    /// Lists leaders with the given approval status, newest first,
    /// narrowed by the filter's region/office when set.
    async fn list_by_status(
        &self,
        status: ApprovalStatus,
        filter: &LeaderFilter,
    ) -> Result<Vec<Leader>, DomainError>;

    /// Deletes a leader profile and its dependent ratings/comments.
    ///
    /// # Errors
    ///
    /// - `LeaderNotFound` if the leader doesn't exist
    async fn delete(&self, id: &LeaderId) -> Result<(), DomainError>;
}
