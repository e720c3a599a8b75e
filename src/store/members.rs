//! Member collection accessor

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::{Member, MemberPatch, NewMember};

use super::collection::InsertPosition;
use super::DataStore;

/// Member operations. New members are listed first.
pub struct Members<'a> {
    store: &'a DataStore,
}

impl<'a> Members<'a> {
    pub(super) fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Member>> {
        self.store.get_all().await
    }

    /// Look up one member
    pub async fn get(&self, id: &str) -> Result<Member> {
        self.get_all()
            .await?
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| Error::not_found("members", id))
    }

    /// Members whose name or email contains `term`, ignoring case.
    /// A blank term matches everyone.
    pub async fn search(&self, term: &str) -> Result<Vec<Member>> {
        let term = term.trim();
        let members = self.get_all().await?;
        if term.is_empty() {
            return Ok(members);
        }
        Ok(members.into_iter().filter(|m| m.matches(term)).collect())
    }

    pub async fn create(&self, draft: NewMember) -> Result<Member> {
        let member = draft.into_member(Uuid::new_v4().to_string());
        self.store.insert(member, InsertPosition::Front).await
    }

    pub async fn update(&self, id: &str, patch: MemberPatch) -> Result<Member> {
        self.store
            .modify(id, move |member: &mut Member| patch.apply(member))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.remove::<Member>(id).await.map(|_| ())
    }
}
