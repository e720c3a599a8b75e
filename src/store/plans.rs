//! Plan collection accessor

use uuid::Uuid;

use crate::error::Result;
use crate::types::{NewPlan, Plan};

use super::collection::InsertPosition;
use super::DataStore;

/// Plan operations. New plans are listed last.
pub struct Plans<'a> {
    store: &'a DataStore,
}

impl<'a> Plans<'a> {
    pub(super) fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Plan>> {
        self.store.get_all().await
    }

    /// Validate and append a plan
    pub async fn create(&self, draft: NewPlan) -> Result<Plan> {
        draft.validate()?;
        let plan = draft.into_plan(format!("p-{}", Uuid::new_v4()));
        self.store.insert(plan, InsertPosition::Back).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.remove::<Plan>(id).await.map(|_| ())
    }
}
