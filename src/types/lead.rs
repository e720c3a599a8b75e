//! Sales leads

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    FollowUp,
    Joined,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::FollowUp => "FOLLOW_UP",
            LeadStatus::Joined => "JOINED",
            LeadStatus::Lost => "LOST",
        }
    }

    /// All stages in pipeline order
    pub fn all() -> &'static [LeadStatus] {
        &[
            LeadStatus::New,
            LeadStatus::FollowUp,
            LeadStatus::Joined,
            LeadStatus::Lost,
        ]
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "NEW" => Ok(LeadStatus::New),
            "FOLLOW_UP" | "FOLLOWUP" => Ok(LeadStatus::FollowUp),
            "JOINED" => Ok(LeadStatus::Joined),
            "LOST" => Ok(LeadStatus::Lost),
            _ => Err(format!(
                "Unknown lead status '{}'. Valid: new, follow-up, joined, lost",
                s
            )),
        }
    }
}

/// A prospective member.
///
/// Only the status is ever changed after the lead is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}
