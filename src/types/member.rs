//! Gym members

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Member Status
// ─────────────────────────────────────────────────────────────────

/// Membership state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    Active,
    Inactive,
    Pending,
    Expired,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "ACTIVE",
            MemberStatus::Inactive => "INACTIVE",
            MemberStatus::Pending => "PENDING",
            MemberStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(MemberStatus::Active),
            "INACTIVE" => Ok(MemberStatus::Inactive),
            "PENDING" => Ok(MemberStatus::Pending),
            "EXPIRED" => Ok(MemberStatus::Expired),
            _ => Err(format!(
                "Unknown member status '{}'. Valid: active, inactive, pending, expired",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Member
// ─────────────────────────────────────────────────────────────────

/// A gym member.
///
/// `plan_id` and `trainer_id` name records in other collections but are
/// never checked against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: MemberStatus,
    pub renewal_date: NaiveDate,
    pub plan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attendance: Option<NaiveDate>,
}

impl Member {
    /// Case-insensitive substring match on name or email
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

/// Data for a new member; the id is assigned on create
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: MemberStatus,
    pub renewal_date: NaiveDate,
    pub plan_id: String,
    pub trainer_id: Option<String>,
    pub last_attendance: Option<NaiveDate>,
}

impl NewMember {
    pub(crate) fn into_member(self, id: String) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            renewal_date: self.renewal_date,
            plan_id: self.plan_id,
            trainer_id: self.trainer_id,
            last_attendance: self.last_attendance,
        }
    }
}

/// Field-by-field update for a member.
///
/// `None` leaves a field untouched. Optional member fields take
/// `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<MemberStatus>,
    pub renewal_date: Option<NaiveDate>,
    pub plan_id: Option<String>,
    pub trainer_id: Option<Option<String>>,
    pub last_attendance: Option<Option<NaiveDate>>,
}

impl MemberPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        *self == MemberPatch::default()
    }

    /// Shallow-merge the patch over `member`
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(phone) = self.phone {
            member.phone = phone;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
        if let Some(renewal_date) = self.renewal_date {
            member.renewal_date = renewal_date;
        }
        if let Some(plan_id) = self.plan_id {
            member.plan_id = plan_id;
        }
        if let Some(trainer_id) = self.trainer_id {
            member.trainer_id = trainer_id;
        }
        if let Some(last_attendance) = self.last_attendance {
            member.last_attendance = last_attendance;
        }
    }
}
