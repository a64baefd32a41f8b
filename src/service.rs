//! Primary CRUD contract over the document store.
//!
//! Store failures are not translated here: every operation returns
//! `Result<_, StoreError>` and the HTTP layer turns an `Err` into a 5xx.

use std::sync::Arc;

use crate::{
    recipe::Recipe,
    store::{DocumentStore, StoreError},
};

#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn DocumentStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        self.store.find_all().await
    }

    pub async fn get_recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        self.store.find_by_id(id).await
    }

    /// Persists `recipe` as a new record. Any client-supplied id is
    /// discarded; the store assigns the real one.
    pub async fn create_recipe(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        recipe.id = None;
        self.store.save(recipe).await
    }

    /// Overwrites the record with `id` if it exists, returning the updated
    /// record. Returns `None` when the id is absent; never creates. Strict
    /// update, unlike the store's native upsert.
    ///
    /// The existence check and the save are two store calls; a concurrent
    /// delete can land between them. Accepted, matching the store's
    /// per-operation atomicity model.
    pub async fn update_recipe(&self, id: &str, mut recipe: Recipe) -> Result<Option<Recipe>, StoreError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        recipe.id = Some(id.to_string());
        self.store.save(recipe).await.map(Some)
    }

    /// Deletes the record with `id`, reporting whether anything was removed.
    /// A second call on the same id returns `false`, never an error.
    pub async fn delete_recipe(&self, id: &str) -> Result<bool, StoreError> {
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        self.store.delete_by_id(id).await
    }
}
