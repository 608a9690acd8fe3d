//! Integration tests for the pantry API.
//!
//! Each test starts a real server on an ephemeral port, drives it through
//! [`PantryClient`] and stops it again.
//!
//! Run with: cargo test --test integration

use std::collections::BTreeSet;
use std::net::SocketAddr;

use pantry_api::api::AppState;
use pantry_api::client::PantryClient;
use pantry_api::server::{self, ServerHandle};
use pantry_api::store::{Item, ItemDraft, Recipe, RecipeDraft, RecordId, Replacement};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

async fn spawn(state: AppState) -> (ServerHandle, PantryClient) {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let handle = server::start(addr, state).await.expect("server starts");
    let client = PantryClient::new(handle.base_url());
    (handle, client)
}

fn keys(value: &Value) -> BTreeSet<&str> {
    value
        .as_object()
        .expect("record is an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[tokio::test]
async fn server_starts_and_stops() {
    let state = AppState::new();
    let (handle, client) = spawn(state.clone()).await;

    assert!(state.is_ready());
    assert!(client.health().await.unwrap());

    handle.stop().await.unwrap();
    assert!(!state.is_ready());
    assert!(client.health().await.is_err());
}

#[tokio::test]
async fn shopping_list_elements_have_contract_keys() {
    let (handle, _client) = spawn(AppState::seeded()).await;

    let body: Value = reqwest::get(format!("{}/shopping-list", handle.base_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let items = body.as_array().expect("array");
    assert!(!items.is_empty());
    for item in items {
        assert_eq!(keys(item), BTreeSet::from(["id", "name", "checked"]));
    }

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn recipes_elements_have_contract_keys() {
    let (handle, _client) = spawn(AppState::seeded()).await;

    let body: Value = reqwest::get(format!("{}/recipes", handle.base_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for recipe in body.as_array().expect("array") {
        assert_eq!(keys(recipe), BTreeSet::from(["id", "name", "ingredients"]));
    }

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn item_lifecycle() {
    let (handle, client) = spawn(AppState::new()).await;

    // POST echoes the input plus an id
    let draft = ItemDraft::new("Eggs");
    let created: Item = client.create(&draft).await.unwrap();
    assert_eq!(created.name, draft.name);
    assert_eq!(created.checked, draft.checked);

    // PUT returns exactly the submitted record
    let submitted = Item {
        id: created.id,
        name: "Free-range eggs".to_string(),
        checked: true,
    };
    let updated = client.update(&submitted).await.unwrap();
    assert_eq!(updated, submitted);
    assert_eq!(client.get::<Item>(created.id).await.unwrap(), submitted);

    // DELETE removes it from the listing
    client.delete::<Item>(created.id).await.unwrap();
    let remaining: Vec<Item> = client.list().await.unwrap();
    assert!(remaining.iter().all(|item| item.id != created.id));

    // Deleting again is a 404, not a 204
    let err = client.delete::<Item>(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn recipe_lifecycle() {
    let (handle, client) = spawn(AppState::new()).await;

    let draft = RecipeDraft::new("Omelette", ["eggs", "salt"]);
    let created: Recipe = client.create(&draft).await.unwrap();
    assert_eq!(created.name, "Omelette");
    assert_eq!(created.ingredients, draft.ingredients);

    let submitted = Recipe {
        id: created.id,
        name: "Cheese omelette".to_string(),
        ingredients: vec!["eggs".into(), "salt".into(), "cheese".into()],
    };
    assert_eq!(client.update(&submitted).await.unwrap(), submitted);

    client.delete::<Recipe>(created.id).await.unwrap();
    assert!(client.list::<Recipe>().await.unwrap().is_empty());

    let err = client.delete::<Recipe>(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn post_with_missing_fields_is_rejected() {
    let (handle, _client) = spawn(AppState::new()).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/shopping-list", handle.base_url()))
        .json(&json!({"checked": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = http
        .post(format!("{}/recipes", handle.base_url()))
        .json(&json!({"name": "Toast"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn put_on_unknown_id_is_404() {
    let (handle, client) = spawn(AppState::new()).await;

    let err = client
        .replace::<Item>(RecordId(42), &Replacement::new(RecordId(42), ItemDraft::new("Tea")))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn put_on_unknown_recipe_is_404() {
    let (handle, client) = spawn(AppState::new()).await;

    let body = Replacement::new(RecordId(7), RecipeDraft::new("Soup", ["water"]));
    let err = client
        .replace::<Recipe>(RecordId(7), &body)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn put_recipe_with_conflicting_id_is_400() {
    let (handle, client) = spawn(AppState::seeded()).await;

    let body = Replacement::new(RecordId(2), RecipeDraft::new("Soup", ["water"]));
    let err = client
        .replace::<Recipe>(RecordId(1), &body)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(client.get::<Recipe>(RecordId(1)).await.unwrap().name, "Pancakes");

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn stores_are_independent() {
    let (handle, client) = spawn(AppState::new()).await;

    let item: Item = client.create(&ItemDraft::new("Flour")).await.unwrap();
    let recipe: Recipe = client
        .create(&RecipeDraft::new("Bread", ["flour", "water"]))
        .await
        .unwrap();

    // Each collection numbers its own records
    assert_eq!(item.id, RecordId(1));
    assert_eq!(recipe.id, RecordId(1));

    client.delete::<Item>(item.id).await.unwrap();
    assert_eq!(client.list::<Recipe>().await.unwrap(), vec![recipe]);

    handle.stop().await.unwrap();
}
