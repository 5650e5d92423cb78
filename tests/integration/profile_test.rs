//! Integration tests for donor and orphanage profiles.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_donor_profile_create_get_update() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    let token = app.register_and_login(&email, "donor").await;

    app.create_donor_profile(&token, &email).await;

    let response = app.request("GET", "/api/donors/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("full_name").unwrap().as_str().unwrap(),
        "Test Donor"
    );

    let response = app
        .request(
            "PUT",
            "/api/donors/me",
            Some(serde_json::json!({
                "full_name": "Renamed Donor",
                "address": "44 Hill Street",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("full_name").unwrap().as_str().unwrap(),
        "Renamed Donor"
    );
    assert_eq!(
        response.data().get("address").unwrap().as_str().unwrap(),
        "44 Hill Street"
    );
}

#[tokio::test]
async fn test_duplicate_donor_profile_conflicts() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    let token = app.register_and_login(&email, "donor").await;

    app.create_donor_profile(&token, &email).await;

    let response = app
        .request(
            "POST",
            "/api/donors",
            Some(serde_json::json!({
                "full_name": "Second Profile",
                "contact_number": "1112223334",
                "email": email,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_profile_routes_require_auth() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/donors/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/orphanages/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_donor_profile_is_not_found() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    let token = app.register_and_login(&email, "donor").await;

    let response = app.request("GET", "/api/donors/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_orphanage_profile_create_get_update() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;

    app.create_orphanage_profile(&token, &email).await;

    let response = app
        .request("GET", "/api/orphanages/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("name").unwrap().as_str().unwrap(),
        "Sunrise Home"
    );

    let response = app
        .request(
            "PUT",
            "/api/orphanages/me",
            Some(serde_json::json!({
                "name": "Sunrise Children's Home",
                "total_orphans": 42,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("name").unwrap().as_str().unwrap(),
        "Sunrise Children's Home"
    );
    assert_eq!(
        response.data().get("total_orphans").unwrap().as_i64(),
        Some(42)
    );
}

#[tokio::test]
async fn test_duplicate_orphanage_profile_conflicts() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;

    app.create_orphanage_profile(&token, &email).await;

    let response = app
        .request(
            "POST",
            "/api/orphanages",
            Some(serde_json::json!({
                "name": "Second Home",
                "address": "9 Other Road",
                "city": "Pune",
                "state": "Maharashtra",
                "pincode": "411002",
                "phone_number": "020-7654321",
                "email": email,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_orphanage_directory_lists_profiles() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    let id = app.create_orphanage_profile(&token, &email).await;

    let response = app.request("GET", "/api/orphanages", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let listed = response
        .data()
        .as_array()
        .expect("Expected an array of orphanages")
        .iter()
        .any(|o| o.get("id").and_then(|v| v.as_str()) == Some(id.to_string().as_str()));
    assert!(listed, "Created orphanage missing from directory");
}

#[tokio::test]
async fn test_orphanage_detail_by_id() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("orphanage");
    let token = app.register_and_login(&email, "orphanage").await;
    let id = app.create_orphanage_profile(&token, &email).await;

    let response = app
        .request("GET", &format!("/api/orphanages/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("city").unwrap().as_str().unwrap(),
        "Pune"
    );

    let missing = uuid::Uuid::new_v4();
    let response = app
        .request("GET", &format!("/api/orphanages/{missing}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_account_details() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    let token = app.register_and_login(&email, "donor").await;

    let response = app
        .request(
            "PUT",
            "/api/auth/me",
            Some(serde_json::json!({
                "first_name": "Asha",
                "last_name": "Patil",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("first_name").unwrap().as_str().unwrap(),
        "Asha"
    );
}
