//! HTTP handlers for both surfaces.
//!
//! The `/api/recipes` handlers only translate service results into status
//! codes. The legacy handlers keep the old wire contract, including the
//! `-1` failure sentinel for the bulk operations.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{error, info};

use crate::{error::AppError, recipe::Recipe, state::AppState};

pub const GREETING: &str = "Greetings from the recipe catalog!";

/// Wire value the legacy bulk endpoints answer with when the store fails.
const FAILURE_SENTINEL: i64 = -1;

pub async fn list_recipes(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let recipes = state.service.get_all_recipes().await?;
    Ok(Json(recipes))
}

pub async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match state.service.get_recipe_by_id(&id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(AppError::NotFound),
    }
}

pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(recipe): Json<Recipe>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.service.create_recipe(recipe).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(recipe): Json<Recipe>,
) -> Result<impl IntoResponse, AppError> {
    match state.service.update_recipe(&id, recipe).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.service.delete_recipe(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

/// Root greeting. Every hit resets the collection to the built-in samples.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.persistence.reseed().await?;
    Ok(GREETING)
}

pub async fn legacy_list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let recipes = state.persistence.list_recipes_or_seed_defaults().await?;
    info!("Found {} recipes", recipes.len());
    Ok(Json(recipes))
}

pub async fn legacy_create_recipe(
    State(state): State<Arc<AppState>>,
    Json(recipe): Json<Recipe>,
) -> impl IntoResponse {
    let count = match state.persistence.add_recipes(vec![recipe]).await {
        Ok(inserted) => inserted as i64,
        Err(e) => {
            error!("Unable to insert any recipes: {e}");
            FAILURE_SENTINEL
        }
    };
    (StatusCode::CREATED, Json(count))
}

pub async fn legacy_delete_recipes(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let count = match state.persistence.delete_recipes_by_name(&[name]).await {
        Ok(deleted) => deleted as i64,
        Err(e) => {
            error!("Unable to delete any recipes: {e}");
            FAILURE_SENTINEL
        }
    };
    Json(count)
}
