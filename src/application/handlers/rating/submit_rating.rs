//! SubmitRatingHandler - creates or replaces the caller's rating.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DomainError, ErrorCode, LeaderId, RatingId, Score};
use crate::domain::rating::{Rating, SocialBehaviour};
use crate::ports::{LeaderRepository, RatingRepository};

/// Command to rate a leader.
#[derive(Debug, Clone)]
pub struct SubmitRatingCommand {
    pub leader_id: LeaderId,
    pub score: u8,
    pub social_behaviour: SocialBehaviour,
    pub comment: Option<String>,
}

/// Handler for rating submission.
///
/// One rating per (user, leader): resubmitting upserts over the previous
/// one. The leader must be approved.
pub struct SubmitRatingHandler {
    ratings: Arc<dyn RatingRepository>,
    leaders: Arc<dyn LeaderRepository>,
}

impl SubmitRatingHandler {
    pub fn new(ratings: Arc<dyn RatingRepository>, leaders: Arc<dyn LeaderRepository>) -> Self {
        Self { ratings, leaders }
    }

    pub async fn handle(&self, cmd: SubmitRatingCommand, actor: &Actor) -> Result<Rating, DomainError> {
        let leader = self
            .leaders
            .find_by_id(&cmd.leader_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LeaderNotFound,
                    format!("Leader not found: {}", cmd.leader_id),
                )
            })?;
        leader.check_ratable()?;

        let score = Score::try_new(cmd.score)?;
        let rating = Rating::new(
            RatingId::new(),
            actor.user_id,
            cmd.leader_id,
            score,
            cmd.social_behaviour,
            cmd.comment,
        )?;
        self.ratings.upsert(&rating).await?;

        tracing::info!(leader_id = %cmd.leader_id, user_id = %actor.user_id, score = cmd.score, "rating submitted");
        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::leader::tests::MockLeaderRepository;
    use crate::application::handlers::rating::tests::MockRatingRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::leader::{Leader, LeaderProfile};

    fn approved_leader() -> Leader {
        let mut leader = Leader::new(
            LeaderId::new(),
            LeaderProfile {
                full_name: "Jane Doe".into(),
                office: "Senator".into(),
                region: "Westland".into(),
                ..Default::default()
            },
            UserId::new(),
        )
        .unwrap();
        leader.approve();
        leader
    }

    #[tokio::test]
    async fn resubmitting_replaces_the_previous_rating() {
        let leader = approved_leader();
        let leader_id = *leader.id();
        let ratings = Arc::new(MockRatingRepository::new());
        let handler = SubmitRatingHandler::new(
            ratings.clone(),
            Arc::new(MockLeaderRepository::with(vec![leader])),
        );
        let actor = Actor::new(UserId::new(), Role::User);

        handler
            .handle(
                SubmitRatingCommand {
                    leader_id,
                    score: 2,
                    social_behaviour: SocialBehaviour::Unresponsive,
                    comment: None,
                },
                &actor,
            )
            .await
            .unwrap();
        handler
            .handle(
                SubmitRatingCommand {
                    leader_id,
                    score: 5,
                    social_behaviour: SocialBehaviour::Responsive,
                    comment: Some("Turned it around".into()),
                },
                &actor,
            )
            .await
            .unwrap();

        let stored = ratings.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].score().value(), 5);
    }

    #[tokio::test]
    async fn unapproved_leaders_cannot_be_rated() {
        let leader = Leader::new(
            LeaderId::new(),
            LeaderProfile {
                full_name: "Pending Person".into(),
                office: "Clerk".into(),
                region: "Westland".into(),
                ..Default::default()
            },
            UserId::new(),
        )
        .unwrap();
        let leader_id = *leader.id();
        let handler = SubmitRatingHandler::new(
            Arc::new(MockRatingRepository::new()),
            Arc::new(MockLeaderRepository::with(vec![leader])),
        );

        let err = handler
            .handle(
                SubmitRatingCommand {
                    leader_id,
                    score: 3,
                    social_behaviour: SocialBehaviour::Neutral,
                    comment: None,
                },
                &Actor::new(UserId::new(), Role::User),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LeaderNotApproved);
    }

    #[tokio::test]
    async fn score_out_of_range_is_rejected() {
        let leader = approved_leader();
        let leader_id = *leader.id();
        let handler = SubmitRatingHandler::new(
            Arc::new(MockRatingRepository::new()),
            Arc::new(MockLeaderRepository::with(vec![leader])),
        );

        let err = handler
            .handle(
                SubmitRatingCommand {
                    leader_id,
                    score: 6,
                    social_behaviour: SocialBehaviour::Neutral,
                    comment: None,
                },
                &Actor::new(UserId::new(), Role::User),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }
}
