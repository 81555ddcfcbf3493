//! Leader command and query handlers.

mod delete_leader;
mod list_leaders;
mod review_leader;
mod submit_leader;
mod update_leader;

pub use delete_leader::{DeleteLeaderCommand, DeleteLeaderHandler};
pub use list_leaders::{
    GetLeaderHandler, GetLeaderQuery, ListLeadersHandler, ListLeadersQuery,
    ListPendingLeadersHandler,
};
pub use review_leader::{ReviewDecision, ReviewLeaderCommand, ReviewLeaderHandler};
pub use submit_leader::{SubmitLeaderCommand, SubmitLeaderHandler};
pub use update_leader::{UpdateLeaderCommand, UpdateLeaderHandler};

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, ErrorCode, LeaderId};
    use crate::domain::leader::{ApprovalStatus, Leader};
    use crate::ports::{LeaderFilter, LeaderRepository};

    /// In-memory leader repository for handler tests.
    pub struct MockLeaderRepository {
        leaders: Mutex<Vec<Leader>>,
    }

    impl MockLeaderRepository {
        pub fn new() -> Self {
            Self {
                leaders: Mutex::new(Vec::new()),
            }
        }

        pub fn with(leaders: Vec<Leader>) -> Self {
            Self {
                leaders: Mutex::new(leaders),
            }
        }

        pub fn all(&self) -> Vec<Leader> {
            self.leaders.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LeaderRepository for MockLeaderRepository {
        async fn create(&self, leader: &Leader) -> Result<(), DomainError> {
            self.leaders.lock().unwrap().push(leader.clone());
            Ok(())
        }

        async fn update(&self, leader: &Leader) -> Result<(), DomainError> {
            let mut leaders = self.leaders.lock().unwrap();
            match leaders.iter().position(|l| l.id() == leader.id()) {
                Some(pos) => {
                    leaders[pos] = leader.clone();
                    Ok(())
                }
                None => Err(DomainError::new(ErrorCode::LeaderNotFound, "Leader not found")),
            }
        }

        async fn find_by_id(&self, id: &LeaderId) -> Result<Option<Leader>, DomainError> {
            Ok(self
                .leaders
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.id() == id)
                .cloned())
        }

        async fn list_by_status(
            &self,
            status: ApprovalStatus,
            filter: &LeaderFilter,
        ) -> Result<Vec<Leader>, DomainError> {
            Ok(self
                .leaders
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.approval_status() == status)
                .filter(|l| {
                    filter
                        .region
                        .as_ref()
                        .map(|r| &l.profile().region == r)
                        .unwrap_or(true)
                })
                .filter(|l| {
                    filter
                        .office
                        .as_ref()
                        .map(|o| &l.profile().office == o)
                        .unwrap_or(true)
                })
                .cloned()
                .collect())
        }

        async fn delete(&self, id: &LeaderId) -> Result<(), DomainError> {
            let mut leaders = self.leaders.lock().unwrap();
            match leaders.iter().position(|l| l.id() == id) {
                Some(pos) => {
                    leaders.remove(pos);
                    Ok(())
                }
                None => Err(DomainError::new(ErrorCode::LeaderNotFound, "Leader not found")),
            }
        }
    }
}
