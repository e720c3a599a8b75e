//! Lead collection accessor

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::types::{Lead, LeadStatus};

use super::DataStore;

/// Lead operations. Leads are listed and re-classified, never created here.
pub struct Leads<'a> {
    store: &'a DataStore,
}

impl<'a> Leads<'a> {
    pub(super) fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Lead>> {
        self.store.get_all().await
    }

    /// Leads with the given status, in storage order
    pub async fn with_status(&self, status: LeadStatus) -> Result<Vec<Lead>> {
        let leads = self.get_all().await?;
        Ok(leads.into_iter().filter(|l| l.status == status).collect())
    }

    /// Move a lead to another pipeline stage
    pub async fn update_status(&self, id: &str, status: LeadStatus) -> Result<Lead> {
        self.store
            .modify(id, |lead: &mut Lead| lead.status = status)
            .await
    }

    /// All leads grouped by status
    pub async fn board(&self) -> Result<LeadBoard> {
        Ok(LeadBoard::from_leads(self.get_all().await?))
    }
}

/// Leads grouped into one column per status.
///
/// Every status has a column, empty or not, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LeadBoard {
    columns: BTreeMap<LeadStatus, Vec<Lead>>,
}

impl LeadBoard {
    pub fn from_leads(leads: Vec<Lead>) -> Self {
        let mut columns: BTreeMap<LeadStatus, Vec<Lead>> = LeadStatus::all()
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        for lead in leads {
            columns.entry(lead.status).or_default().push(lead);
        }
        Self { columns }
    }

    pub fn column(&self, status: LeadStatus) -> &[Lead] {
        self.columns.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn columns(&self) -> impl Iterator<Item = (LeadStatus, &[Lead])> {
        self.columns.iter().map(|(status, leads)| (*status, leads.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }
}
