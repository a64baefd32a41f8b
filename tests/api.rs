//! Router-level tests for both HTTP surfaces.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use recipe_backend::{
    config::Config,
    recipe::Recipe,
    router,
    routes::GREETING,
    state::AppState,
    store::{DocumentStore, MemoryStore, StoreError},
};

fn app() -> Router {
    router(AppState::new(Config { port: 0 }, Arc::new(MemoryStore::new())))
}

fn broken_app() -> Router {
    router(AppState::new(Config { port: 0 }, Arc::new(BrokenStore)))
}

/// Store that fails every operation, for exercising the failure contracts.
struct BrokenStore;

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn insert_many(&self, _recipes: Vec<Recipe>) -> Result<u64, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Recipe>, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn save(&self, _recipe: Recipe) -> Result<Recipe, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn delete_by_name_in(&self, _names: &[String]) -> Result<u64, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn exists_by_id(&self, _id: &str) -> Result<bool, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    async fn drop_collection(&self) -> Result<(), StoreError> {
        Err(StoreError("connection refused".into()))
    }
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn delete(path: &str) -> Request<Body> {
    Request::delete(path).body(Body::empty()).unwrap()
}

fn json_request(method: &str, path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn tacos() -> Value {
    json!({"name": "Tacos", "ingredients": ["tortilla", "beef"], "prepTimeInMinutes": 15})
}

#[tokio::test]
async fn post_assigns_id_and_get_round_trips() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/recipes", tacos()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let response = app.oneshot(get(&format!("/api/recipes/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], "Tacos");
    assert_eq!(fetched["ingredients"], json!(["tortilla", "beef"]));
    assert_eq!(fetched["prepTimeInMinutes"], 15);
}

#[tokio::test]
async fn get_missing_recipe_is_404_with_empty_body() {
    let response = app().oneshot(get("/api/recipes/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn put_missing_recipe_is_404_and_creates_nothing() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/recipes/does-not-exist", tacos()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/recipes")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn put_existing_recipe_overwrites_fields() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/recipes", tacos()))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let update = json!({"name": "Tacos al pastor", "ingredients": ["tortilla", "pork"], "prepTimeInMinutes": 45});
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/recipes/{id}"), update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["name"], "Tacos al pastor");
    assert_eq!(updated["prepTimeInMinutes"], 45);
}

#[tokio::test]
async fn delete_is_204_then_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/recipes", tacos()))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/recipes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete(&format!("/api/recipes/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_recipe_is_404_and_store_unchanged() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/api/recipes", tacos()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(delete("/api/recipes/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/recipes")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn store_failure_on_primary_path_is_500() {
    let response = broken_app().oneshot(get("/api/recipes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn index_resets_collection_to_the_samples() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/api/recipes", tacos()))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes, GREETING.as_bytes());

    let response = app.oneshot(get("/api/recipes")).await.unwrap();
    let recipes = body_json(response).await;
    let names: Vec<&str> = recipes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["elotes", "loco moco", "patatas bravas", "fried rice"]);
}

#[tokio::test]
async fn legacy_list_reseeds_an_empty_store() {
    let response = app().oneshot(get("/recipes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let recipes = body_json(response).await;
    let times: Vec<u64> = recipes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["prepTimeInMinutes"].as_u64().unwrap())
        .collect();
    assert_eq!(times, [35, 54, 80, 40]);
}

#[tokio::test]
async fn legacy_create_and_delete_report_counts() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/recipe", tacos()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!(1));

    let response = app.clone().oneshot(delete("/recipe/Tacos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(1));

    let response = app.oneshot(delete("/recipe/Tacos")).await.unwrap();
    assert_eq!(body_json(response).await, json!(0));
}

#[tokio::test]
async fn legacy_bulk_operations_answer_minus_one_on_store_failure() {
    let app = broken_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/recipe", tacos()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!(-1));

    let response = app.oneshot(delete("/recipe/Tacos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(-1));
}
