//! Trainer collection accessor

use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::{NewTrainer, Trainer};

use super::collection::InsertPosition;
use super::DataStore;

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Generated avatar image URL for a display name
pub fn avatar_url(name: &str) -> Result<String> {
    let url = Url::parse_with_params(
        AVATAR_SERVICE,
        &[("name", name), ("background", "3b82f6"), ("color", "fff")],
    )
    .map_err(|e| Error::Internal(format!("avatar url: {}", e)))?;
    Ok(url.into())
}

/// Trainer operations. New trainers are listed first.
pub struct Trainers<'a> {
    store: &'a DataStore,
}

impl<'a> Trainers<'a> {
    pub(super) fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Trainer>> {
        self.store.get_all().await
    }

    /// Add a trainer with no assigned members and full performance
    pub async fn create(&self, draft: NewTrainer) -> Result<Trainer> {
        let trainer = Trainer {
            id: format!("t-{}", Uuid::new_v4()),
            avatar: avatar_url(&draft.name)?,
            name: draft.name,
            specialty: draft.specialty,
            assigned_members: 0,
            performance: 100,
        };
        self.store.insert(trainer, InsertPosition::Front).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.remove::<Trainer>(id).await.map(|_| ())
    }
}
