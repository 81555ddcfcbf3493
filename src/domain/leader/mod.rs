//! Leader domain module.
//!
//! Leader profiles are submitted by users and held in `Pending` until an
//! admin approves or rejects them. Only approved leaders are ratable or
//! publicly listed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, LeaderId, Timestamp, UserId, ValidationError};

/// Maximum length for a leader's full name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Review state of a submitted leader profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(format!("unknown approval status: {}", other)),
        }
    }
}

/// Fields of a leader profile editable after submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderProfile {
    pub full_name: String,
    pub office: String,
    pub region: String,
    pub party: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

/// A profile of an elected or candidate official that site users rate.
///
/// # Invariants
///
/// - `full_name` and `office` are non-empty
/// - only `Approved` leaders accept ratings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    id: LeaderId,
    profile: LeaderProfile,
    approval_status: ApprovalStatus,
    submitted_by: UserId,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Leader {
    /// Creates a new leader profile in `Pending` state.
    pub fn new(id: LeaderId, profile: LeaderProfile, submitted_by: UserId) -> Result<Self, DomainError> {
        validate_profile(&profile)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            profile,
            approval_status: ApprovalStatus::Pending,
            submitted_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a leader from persistence (no validation).
    pub fn reconstitute(
        id: LeaderId,
        profile: LeaderProfile,
        approval_status: ApprovalStatus,
        submitted_by: UserId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            profile,
            approval_status,
            submitted_by,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &LeaderId {
        &self.id
    }

    pub fn profile(&self) -> &LeaderProfile {
        &self.profile
    }

    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    pub fn submitted_by(&self) -> &UserId {
        &self.submitted_by
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true if the leader is publicly visible and ratable.
    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }

    /// Marks the profile approved.
    pub fn approve(&mut self) {
        self.approval_status = ApprovalStatus::Approved;
        self.updated_at = Timestamp::now();
    }

    /// Marks the profile rejected.
    pub fn reject(&mut self) {
        self.approval_status = ApprovalStatus::Rejected;
        self.updated_at = Timestamp::now();
    }

    /// Replaces the editable profile fields.
    pub fn update_profile(&mut self, profile: LeaderProfile) -> Result<(), DomainError> {
        validate_profile(&profile)?;
        self.profile = profile;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Validates that ratings may be attached to this leader.
    pub fn check_ratable(&self) -> Result<(), DomainError> {
        if self.is_approved() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::LeaderNotApproved,
                format!("Leader {} is not approved", self.id),
            ))
        }
    }
}

fn validate_profile(profile: &LeaderProfile) -> Result<(), ValidationError> {
    if profile.full_name.trim().is_empty() {
        return Err(ValidationError::empty_field("full_name"));
    }
    if profile.full_name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::out_of_range(
            "full_name",
            1,
            MAX_NAME_LENGTH as i32,
            profile.full_name.len() as i32,
        ));
    }
    if profile.office.trim().is_empty() {
        return Err(ValidationError::empty_field("office"));
    }
    Ok(())
}
