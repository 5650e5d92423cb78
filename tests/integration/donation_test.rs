//! Integration tests for the donation workflow and its notifications.

use http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::helpers::{TestApp, TestResponse};

/// A donor and an orphanage, each with a profile. The profile contact
/// emails are distinct from the login emails so mail assertions only see
/// workflow notifications, never verification codes.
struct Actors {
    donor_token: String,
    donor_contact: String,
    orphanage_token: String,
    orphanage_contact: String,
    orphanage_id: Uuid,
}

async fn setup_actors(app: &TestApp) -> Actors {
    let donor_login = TestApp::unique_email("donor");
    let donor_token = app.register_and_login(&donor_login, "donor").await;
    let donor_contact = TestApp::unique_email("donor-contact");
    app.create_donor_profile(&donor_token, &donor_contact).await;

    let orphanage_login = TestApp::unique_email("orphanage");
    let orphanage_token = app.register_and_login(&orphanage_login, "orphanage").await;
    let orphanage_contact = TestApp::unique_email("orphanage-contact");
    let orphanage_id = app
        .create_orphanage_profile(&orphanage_token, &orphanage_contact)
        .await;

    Actors {
        donor_token,
        donor_contact,
        orphanage_token,
        orphanage_contact,
        orphanage_id,
    }
}

async fn pledge(app: &TestApp, actors: &Actors, item: &str) -> TestResponse {
    app.request(
        "POST",
        "/api/donations",
        Some(serde_json::json!({
            "orphanage_id": actors.orphanage_id,
            "item_name": item,
            "quantity": 3,
        })),
        Some(&actors.donor_token),
    )
    .await
}

async fn set_status(
    app: &TestApp,
    actors: &Actors,
    donation_id: Uuid,
    status: &str,
) -> TestResponse {
    app.request(
        "PUT",
        &format!("/api/donations/{donation_id}/status"),
        Some(serde_json::json!({ "status": status })),
        Some(&actors.orphanage_token),
    )
    .await
}

#[tokio::test]
async fn test_pledge_starts_pending_and_notifies_orphanage() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let response = pledge(&app, &actors, "Rice bags").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("status").unwrap().as_str().unwrap(),
        "pending"
    );

    let sent = app.mailer.sent_to(&actors.orphanage_contact);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("Rice bags"));
}

#[tokio::test]
async fn test_requirement_reference_copies_item_name() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = app
        .request(
            "POST",
            "/api/requirements",
            Some(serde_json::json!({
                "item_name": "Woolen sweaters",
                "category": "clothing",
                "quantity_needed": 30,
            })),
            Some(&actors.orphanage_token),
        )
        .await;
    let requirement_id = TestApp::id_of(&created);

    let response = app
        .request(
            "POST",
            "/api/donations",
            Some(serde_json::json!({
                "orphanage_id": actors.orphanage_id,
                "requirement_id": requirement_id,
                "item_name": "Ignored name",
                "quantity": 10,
            })),
            Some(&actors.donor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("item_name").unwrap().as_str().unwrap(),
        "Woolen sweaters"
    );
}

#[tokio::test]
async fn test_pledge_needs_requirement_or_item_name() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let response = app
        .request(
            "POST",
            "/api/donations",
            Some(serde_json::json!({
                "orphanage_id": actors.orphanage_id,
                "quantity": 1,
            })),
            Some(&actors.donor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_pledge_requires_donor_profile() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let email = TestApp::unique_email("donor");
    let token = app.register_and_login(&email, "donor").await;

    let response = app
        .request(
            "POST",
            "/api/donations",
            Some(serde_json::json!({
                "orphanage_id": actors.orphanage_id,
                "item_name": "Toys",
                "quantity": 1,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_acceptance_notifies_donor_exactly_once() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "School shoes").await;
    let donation_id = TestApp::id_of(&created);

    let response = set_status(&app, &actors, donation_id, "accepted").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("status").unwrap().as_str().unwrap(),
        "accepted"
    );
    assert_eq!(app.mailer.sent_to(&actors.donor_contact).len(), 1);

    // Re-accepting is not an edge into accepted, so no second email.
    let response = set_status(&app, &actors, donation_id, "accepted").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.mailer.sent_to(&actors.donor_contact).len(), 1);
}

#[tokio::test]
async fn test_racing_accepts_notify_donor_at_most_once() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "Grain sacks").await;
    let donation_id = TestApp::id_of(&created);

    // Two concurrent accepts: only the one that actually moved the row off
    // pending fires the email, because the repository reports the previous
    // status atomically with the update.
    let (first, second) = tokio::join!(
        set_status(&app, &actors, donation_id, "accepted"),
        set_status(&app, &actors, donation_id, "accepted"),
    );
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(app.mailer.sent_to(&actors.donor_contact).len(), 1);
}

#[tokio::test]
async fn test_other_transitions_do_not_notify_donor() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "Blankets").await;
    let donation_id = TestApp::id_of(&created);

    let response = set_status(&app, &actors, donation_id, "cancelled").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.mailer.sent_to(&actors.donor_contact).is_empty());

    // Cancelled back to accepted is an edge, and fires.
    set_status(&app, &actors, donation_id, "accepted").await;
    assert_eq!(app.mailer.sent_to(&actors.donor_contact).len(), 1);

    let response = set_status(&app, &actors, donation_id, "completed").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.mailer.sent_to(&actors.donor_contact).len(), 1);
}

#[tokio::test]
async fn test_completed_records_proof_image() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "Medicines").await;
    let donation_id = TestApp::id_of(&created);

    let response = app
        .request(
            "PUT",
            &format!("/api/donations/{donation_id}/status"),
            Some(serde_json::json!({
                "status": "completed",
                "proof_image": "uploads/proof/receipt.jpg",
            })),
            Some(&actors.orphanage_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("proof_image").unwrap().as_str().unwrap(),
        "uploads/proof/receipt.jpg"
    );
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "Notebooks").await;
    let donation_id = TestApp::id_of(&created);

    let response = set_status(&app, &actors, donation_id, "teleported").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_receiving_orphanage_may_transition() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "Water cans").await;
    let donation_id = TestApp::id_of(&created);

    let other_login = TestApp::unique_email("orphanage");
    let other_token = app.register_and_login(&other_login, "orphanage").await;
    let other_contact = TestApp::unique_email("orphanage-contact");
    app.create_orphanage_profile(&other_token, &other_contact).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/donations/{donation_id}/status"),
            Some(serde_json::json!({ "status": "accepted" })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_failing_mailer_never_fails_the_workflow() {
    let app = TestApp::with_failing_mailer().await;
    let actors = setup_actors(&app).await;

    let created = pledge(&app, &actors, "Stationery").await;
    assert_eq!(created.status, StatusCode::OK);
    let donation_id = TestApp::id_of(&created);

    let response = set_status(&app, &actors, donation_id, "accepted").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_donation_listings_are_newest_first() {
    let app = TestApp::new().await;
    let actors = setup_actors(&app).await;

    let first = TestApp::id_of(&pledge(&app, &actors, "First item").await);
    let second = TestApp::id_of(&pledge(&app, &actors, "Second item").await);

    let response = app
        .request("GET", "/api/donations/mine", None, Some(&actors.donor_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d.get("id").and_then(Value::as_str))
        .collect();
    let first_pos = ids.iter().position(|id| *id == first.to_string()).unwrap();
    let second_pos = ids.iter().position(|id| *id == second.to_string()).unwrap();
    assert!(second_pos < first_pos);

    let response = app
        .request(
            "GET",
            "/api/donations/received",
            None,
            Some(&actors.orphanage_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().as_array().unwrap().len(),
        2,
        "Orphanage should see both pledges"
    );
}
