//! JSON request/response types for leader endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::leader::{Leader, LeaderProfile};

/// Request to submit or update a leader profile.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderProfileRequest {
    pub full_name: String,
    pub office: String,
    pub region: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl From<LeaderProfileRequest> for LeaderProfile {
    fn from(request: LeaderProfileRequest) -> Self {
        Self {
            full_name: request.full_name,
            office: request.office,
            region: request.region,
            party: request.party,
            bio: request.bio,
            photo_url: request.photo_url,
        }
    }
}

/// Request to approve or reject a pending profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewLeaderRequest {
    /// Either "approve" or "reject".
    pub decision: String,
}

/// Optional filters on the public listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderListParams {
    pub region: Option<String>,
    pub office: Option<String>,
}

/// A leader as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderResponse {
    pub id: String,
    pub full_name: String,
    pub office: String,
    pub region: String,
    pub party: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub approval_status: String,
    pub submitted_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Leader> for LeaderResponse {
    fn from(leader: Leader) -> Self {
        let profile = leader.profile().clone();
        Self {
            id: leader.id().to_string(),
            full_name: profile.full_name,
            office: profile.office,
            region: profile.region,
            party: profile.party,
            bio: profile.bio,
            photo_url: profile.photo_url,
            approval_status: leader.approval_status().as_str().to_string(),
            submitted_by: leader.submitted_by().to_string(),
            created_at: leader.created_at().to_string(),
            updated_at: leader.updated_at().to_string(),
        }
    }
}
