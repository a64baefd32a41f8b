//! Document store collaborator.
//!
//! The backend treats the database as an opaque collaborator behind the
//! [`DocumentStore`] trait: per-record CRUD keyed by id plus the bulk
//! primitives the legacy path needs. `MemoryStore` is the shipped backend;
//! anything that can answer these eight operations can be swapped in through
//! [`crate::state::AppState::new`].

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::recipe::Recipe;

/// Failure of an underlying store operation. The primary CRUD path
/// propagates this; the legacy path catches and logs it.
#[derive(Error, Debug)]
#[error("document store unavailable: {0}")]
pub struct StoreError(pub String);

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts every recipe, assigning fresh ids. Returns the count inserted.
    async fn insert_many(&self, recipes: Vec<Recipe>) -> Result<u64, StoreError>;

    /// All stored recipes in store order. No guaranteed sort.
    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// Id-preserving upsert: overwrites the record with the same id, or
    /// inserts with a fresh id when the recipe has none.
    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    /// Returns whether a record was actually removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Deletes every record whose name is in `names`. Returns the count
    /// deleted.
    async fn delete_by_name_in(&self, names: &[String]) -> Result<u64, StoreError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError>;

    async fn drop_collection(&self) -> Result<(), StoreError>;
}

/// In-memory store, insertion-ordered. Each operation takes the lock once,
/// so single operations are atomic; nothing spans two operations.
#[derive(Default)]
pub struct MemoryStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_many(&self, recipes: Vec<Recipe>) -> Result<u64, StoreError> {
        let mut stored = self.recipes.write().await;
        let count = recipes.len() as u64;
        for mut recipe in recipes {
            recipe.id = Some(Uuid::new_v4().to_string());
            stored.push(recipe);
        }
        Ok(count)
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let stored = self.recipes.read().await;
        Ok(stored.iter().find(|r| r.id.as_deref() == Some(id)).cloned())
    }

    async fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut stored = self.recipes.write().await;
        match &recipe.id {
            Some(id) => {
                if let Some(existing) = stored.iter_mut().find(|r| r.id.as_deref() == Some(id)) {
                    *existing = recipe.clone();
                } else {
                    stored.push(recipe.clone());
                }
            }
            None => {
                recipe.id = Some(Uuid::new_v4().to_string());
                stored.push(recipe.clone());
            }
        }
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut stored = self.recipes.write().await;
        let before = stored.len();
        stored.retain(|r| r.id.as_deref() != Some(id));
        Ok(stored.len() < before)
    }

    async fn delete_by_name_in(&self, names: &[String]) -> Result<u64, StoreError> {
        let mut stored = self.recipes.write().await;
        let before = stored.len();
        stored.retain(|r| !names.contains(&r.name));
        Ok((before - stored.len()) as u64)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let stored = self.recipes.read().await;
        Ok(stored.iter().any(|r| r.id.as_deref() == Some(id)))
    }

    async fn drop_collection(&self) -> Result<(), StoreError> {
        self.recipes.write().await.clear();
        Ok(())
    }
}
