//! Strongly-typed identifier value objects.
//!
//! Every aggregate gets its own UUID-backed id type so a `LeaderId` can
//! never be passed where a `PollId` is expected. All ids share the same
//! surface: `new`, `from_uuid`, `as_uuid`, `Display`, `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an id from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a registered user.
    UserId
);
define_id!(
    /// Unique identifier for a leader profile.
    LeaderId
);
define_id!(
    /// Unique identifier for a rating.
    RatingId
);
define_id!(
    /// Unique identifier for a leader-page comment.
    CommentId
);
define_id!(
    /// Unique identifier for a poll.
    PollId
);
define_id!(
    /// Unique identifier for a poll question.
    PollQuestionId
);
define_id!(
    /// Unique identifier for a poll option.
    PollOptionId
);
define_id!(
    /// Unique identifier for a poll response.
    PollResponseId
);
define_id!(
    /// Unique identifier for a notification.
    NotificationId
);
define_id!(
    /// Unique identifier for a support ticket.
    TicketId
);
define_id!(
    /// Unique identifier for an admin message on a ticket.
    AdminMessageId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_display_and_from_str() {
        let id = LeaderId::new();
        let parsed: LeaderId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }

    #[test]
    fn distinct_ids_are_unequal() {
        assert_ne!(PollId::new(), PollId::new());
    }
}
