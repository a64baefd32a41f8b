//! Legacy bulk path: batch insert, delete-by-name, and the reseeding reads.
//!
//! Unlike [`crate::service::RecipeService`], callers of this surface never
//! see a store failure as an HTTP error; the handlers in
//! [`crate::routes`] log the `Err` and answer with the `-1` wire sentinel.

use std::sync::Arc;

use tracing::info;

use crate::{
    recipe::{sample_recipes, Recipe},
    store::{DocumentStore, StoreError},
};

#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn DocumentStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Bulk insert. Returns the number of recipes inserted.
    pub async fn add_recipes(&self, recipes: Vec<Recipe>) -> Result<u64, StoreError> {
        info!("Inserting {} recipes", recipes.len());
        self.store.insert_many(recipes).await
    }

    /// Deletes every recipe whose name is in `names`. Returns the number of
    /// records removed, which can exceed `names.len()` when names repeat in
    /// the store.
    pub async fn delete_recipes_by_name(&self, names: &[String]) -> Result<u64, StoreError> {
        info!("Deleting recipes named {names:?}");
        self.store.delete_by_name_in(names).await
    }

    /// Read with a write side effect: an empty store is reseeded with the
    /// built-in samples before the listing is returned.
    pub async fn list_recipes_or_seed_defaults(&self) -> Result<Vec<Recipe>, StoreError> {
        let recipes = self.store.find_all().await?;
        if !recipes.is_empty() {
            return Ok(recipes);
        }

        info!("No recipes found, inserting sample recipes");
        self.reseed().await?;
        self.store.find_all().await
    }

    /// Drops the collection and inserts the four built-in samples.
    pub async fn reseed(&self) -> Result<(), StoreError> {
        self.store.drop_collection().await?;
        let inserted = self.store.insert_many(sample_recipes()).await?;
        info!("Reseeded collection with {inserted} sample recipes");
        Ok(())
    }
}
