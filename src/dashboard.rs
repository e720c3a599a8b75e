//! Headline figures for the dashboard view

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::store::DataStore;
use crate::types::{LeadStatus, MemberStatus};

/// Member and lead counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_members: usize,
    pub active_members: usize,
    pub total_leads: usize,
    /// Every status is present, zero or not
    pub leads_by_status: BTreeMap<LeadStatus, usize>,
}

impl DashboardSummary {
    /// Load members and leads together and count them
    pub async fn collect(store: &DataStore) -> Result<Self> {
        let members = store.members();
        let leads = store.leads();
        let (members, leads) = tokio::join!(members.get_all(), leads.get_all());
        let (members, leads) = (members?, leads?);

        let mut leads_by_status: BTreeMap<LeadStatus, usize> =
            LeadStatus::all().iter().map(|s| (*s, 0)).collect();
        for lead in &leads {
            *leads_by_status.entry(lead.status).or_default() += 1;
        }

        Ok(Self {
            total_members: members.len(),
            active_members: members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            total_leads: leads.len(),
            leads_by_status,
        })
    }
}
