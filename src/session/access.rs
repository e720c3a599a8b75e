//! Static role → resource visibility table
//!
//! The table only decides what a role is shown. It is not an authorization
//! boundary.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Role;

/// Functional area of the dashboard, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    Dashboard,
    Members,
    Leads,
    Trainers,
    Payments,
}

impl Resource {
    pub fn slug(&self) -> &'static str {
        match self {
            Resource::Dashboard => "dashboard",
            Resource::Members => "members",
            Resource::Leads => "leads",
            Resource::Trainers => "trainers",
            Resource::Payments => "payments",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Resource::Dashboard => "Dashboard",
            Resource::Members => "Members",
            Resource::Leads => "Leads",
            Resource::Trainers => "Trainers",
            Resource::Payments => "Payments",
        }
    }

    pub fn all() -> &'static [Resource] {
        &[
            Resource::Dashboard,
            Resource::Members,
            Resource::Leads,
            Resource::Trainers,
            Resource::Payments,
        ]
    }

    /// Roles allowed to see this resource
    fn roles(&self) -> &'static [Role] {
        match self {
            Resource::Dashboard | Resource::Members => &[Role::Owner, Role::Manager, Role::Staff],
            Resource::Leads | Resource::Trainers => &[Role::Owner, Role::Manager],
            Resource::Payments => &[Role::Owner],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Resource::all()
            .iter()
            .find(|r| r.slug() == s.to_lowercase())
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown resource '{}'. Valid: dashboard, members, leads, trainers, payments",
                    s
                )
            })
    }
}

/// Resources a role may see
pub fn visible_resources(role: Role) -> BTreeSet<Resource> {
    Resource::all()
        .iter()
        .filter(|r| r.roles().contains(&role))
        .copied()
        .collect()
}

pub fn can_view(role: Role, resource: Resource) -> bool {
    resource.roles().contains(&role)
}

/// Fail with `AccessDenied` unless `role` may see `resource`
pub fn ensure_visible(role: Role, resource: Resource) -> Result<()> {
    if can_view(role, resource) {
        Ok(())
    } else {
        Err(Error::AccessDenied {
            role: role.to_string(),
            resource: resource.to_string(),
        })
    }
}
