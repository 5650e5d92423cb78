//! Integration tests for orphanage requirements.

use http::StatusCode;
use serde_json::Value;

use crate::helpers::{TestApp, TestResponse};

async fn create_requirement(app: &TestApp, token: &str, item: &str) -> TestResponse {
    app.request(
        "POST",
        "/api/requirements",
        Some(serde_json::json!({
            "item_name": item,
            "category": "clothing",
            "description": "Winter wear for the children",
            "quantity_needed": 25,
        })),
        Some(token),
    )
    .await
}

#[tokio::test]
async fn test_create_requires_orphanage_profile() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;

    // No profile yet, so the caller has no orphanage to post against.
    let response = create_requirement(&app, &token, "Blankets").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    app.create_orphanage_profile(&token, &email).await;

    let response = create_requirement(&app, &token, "Blankets").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("item_name").unwrap().as_str().unwrap(),
        "Blankets"
    );
    assert_eq!(
        response.data().get("quantity_received").unwrap().as_i64(),
        Some(0)
    );
    assert_eq!(
        response.data().get("is_fulfilled").unwrap().as_bool(),
        Some(false)
    );
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    app.create_orphanage_profile(&token, &email).await;

    let response = app
        .request(
            "POST",
            "/api/requirements",
            Some(serde_json::json!({
                "item_name": "Blankets",
                "category": "spaceships",
                "quantity_needed": 5,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_omitted_category_defaults_to_others() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    app.create_orphanage_profile(&token, &email).await;

    let response = app
        .request(
            "POST",
            "/api/requirements",
            Some(serde_json::json!({
                "item_name": "Cricket kit",
                "quantity_needed": 2,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("category").unwrap().as_str().unwrap(),
        "others"
    );
}

#[tokio::test]
async fn test_list_mine_and_update() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    app.create_orphanage_profile(&token, &email).await;

    let created = create_requirement(&app, &token, "School bags").await;
    let id = TestApp::id_of(&created);

    let response = app
        .request("GET", "/api/requirements/mine", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let mine = response.data().as_array().unwrap();
    assert!(
        mine.iter()
            .any(|r| r.get("id").and_then(Value::as_str) == Some(id.to_string().as_str()))
    );

    let response = app
        .request(
            "PUT",
            &format!("/api/requirements/{id}"),
            Some(serde_json::json!({ "quantity_needed": 40 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("quantity_needed").unwrap().as_i64(),
        Some(40)
    );
}

#[tokio::test]
async fn test_non_owner_cannot_update_or_delete() {
    let app = TestApp::new().await;

    let owner_email = TestApp::unique_email("orphanage");
    let owner_token = app.register_and_login(&owner_email, "orphanage").await;
    app.create_orphanage_profile(&owner_token, &owner_email).await;
    let created = create_requirement(&app, &owner_token, "Notebooks").await;
    let id = TestApp::id_of(&created);

    let other_email = TestApp::unique_email("orphanage");
    let other_token = app.register_and_login(&other_email, "orphanage").await;
    app.create_orphanage_profile(&other_token, &other_email).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/requirements/{id}"),
            Some(serde_json::json!({ "quantity_needed": 1 })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let response = app
        .request(
            "DELETE",
            &format!("/api/requirements/{id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_can_delete() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    app.create_orphanage_profile(&token, &email).await;

    let created = create_requirement(&app, &token, "Story books").await;
    let id = TestApp::id_of(&created);

    let response = app
        .request("DELETE", &format!("/api/requirements/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/requirements/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_listing_excludes_fulfilled() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    let orphanage_id = app.create_orphanage_profile(&token, &email).await;

    let open = create_requirement(&app, &token, "Open item").await;
    let open_id = TestApp::id_of(&open);
    let fulfilled = create_requirement(&app, &token, "Fulfilled item").await;
    let fulfilled_id = TestApp::id_of(&fulfilled);

    // Fulfillment is tracked server-side; flip it directly for the test.
    sqlx::query("UPDATE requirements SET is_fulfilled = TRUE WHERE id = $1")
        .bind(fulfilled_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .request(
            "GET",
            &format!("/api/requirements/orphanage/{orphanage_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_str))
        .collect();
    assert!(ids.contains(&open_id.to_string().as_str()));
    assert!(!ids.contains(&fulfilled_id.to_string().as_str()));
}

#[tokio::test]
async fn test_public_listing_needs_no_auth() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/requirements/public", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().is_array());
}
