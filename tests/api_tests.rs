//! API integration tests
//!
//! These run against a live server with a seeded database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to register a throwaway account and return its token
async fn get_auth_token(client: &Client) -> String {
    let suffix = std::process::id();
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "email": format!("traveler{}@example.com", suffix),
            "username": format!("traveler{}", suffix),
            "first_name": "Test",
            "last_name": "Traveler",
            "password": "wanderlust",
            "password_confirm": "wanderlust"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    if response.status().is_success() {
        let body: Value = response.json().await.expect("Failed to parse register response");
        return body["access"].as_str().expect("No token in response").to_string();
    }

    // Account already exists from a previous run; log in instead
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": format!("traveler{}@example.com", suffix),
            "password": "wanderlust"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["access"].as_str().expect("No token in response").to_string()
}

/// First destination ID in the catalog
async fn any_destination_id(client: &Client) -> i64 {
    let response = client
        .get(format!("{}/destinations", BASE_URL))
        .send()
        .await
        .expect("Failed to list destinations");

    let body: Value = response.json().await.expect("Failed to parse destinations");
    body.as_array()
        .and_then(|list| list.first())
        .and_then(|d| d["id"].as_i64())
        .expect("No destinations seeded")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_destinations() {
    let client = Client::new();

    let response = client
        .get(format!("{}/destinations", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_search_destinations_is_capped() {
    let client = Client::new();

    let response = client
        .get(format!("{}/destinations/search?q=a", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let results = body["results"].as_array().expect("No results array");
    assert!(results.len() <= 10);
}

#[tokio::test]
#[ignore]
async fn test_search_destinations_empty_query() {
    let client = Client::new();

    let response = client
        .get(format!("{}/destinations/search", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["results"].as_array().map(|r| r.len()), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_bookings_require_auth() {
    let client = Client::new();

    let response = client
        .get(format!("{}/bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_create_and_cancel_booking() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let destination_id = any_destination_id(&client).await;

    // Create a booking with two travelers
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "destination_id": destination_id,
            "start_date": "2027-06-01",
            "end_date": "2027-06-08",
            "number_of_travelers": 2,
            "primary_contact_name": "Test Traveler",
            "primary_contact_phone": "+1 555 0100",
            "travelers": [
                {
                    "first_name": "Test",
                    "last_name": "Traveler",
                    "date_of_birth": "1990-01-01",
                    "nationality": "American"
                },
                {
                    "first_name": "Second",
                    "last_name": "Traveler",
                    "date_of_birth": "1992-02-02",
                    "nationality": "American"
                }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    let booking = &body["booking"];
    let booking_id = booking["id"].as_i64().expect("No booking ID");
    let code = booking["booking_code"].as_str().expect("No booking code");
    assert!(code.starts_with("TT"));
    assert_eq!(code.len(), 10);
    assert_eq!(booking["travelers"].as_array().map(|t| t.len()), Some(2));

    // Cancel it
    let response = client
        .post(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["booking"]["status"], "cancelled");

    // Second cancel is rejected
    let response = client
        .post(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_traveler_mismatch() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let destination_id = any_destination_id(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "destination_id": destination_id,
            "start_date": "2027-06-01",
            "end_date": "2027-06-08",
            "number_of_travelers": 3,
            "primary_contact_name": "Test Traveler",
            "primary_contact_phone": "+1 555 0100",
            "travelers": [
                {
                    "first_name": "Only",
                    "last_name": "One",
                    "date_of_birth": "1990-01-01",
                    "nationality": "American"
                }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_inverted_dates() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let destination_id = any_destination_id(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "destination_id": destination_id,
            "start_date": "2027-06-08",
            "end_date": "2027-06-01",
            "number_of_travelers": 1,
            "primary_contact_name": "Test Traveler",
            "primary_contact_phone": "+1 555 0100",
            "travelers": [
                {
                    "first_name": "Test",
                    "last_name": "Traveler",
                    "date_of_birth": "1990-01-01",
                    "nationality": "American"
                }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_favorite_toggle_round_trip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let destination_id = any_destination_id(&client).await;

    let toggle = |client: Client, token: String| async move {
        let response = client
            .post(format!("{}/favorites/toggle", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "destination_id": destination_id }))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse response");
        body["is_favorited"].as_bool().expect("No is_favorited flag")
    };

    let first = toggle(client.clone(), token.clone()).await;
    let second = toggle(client.clone(), token.clone()).await;

    // Two toggles land back where we started
    assert_ne!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_favorites_status_rejects_unknown_ids() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/favorites/status", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "destination_ids": [999999] }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_summary() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/bookings/summary", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_bookings"].is_number());
    assert!(body["cancelled_bookings"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_submit_contact_form() {
    let client = Client::new();

    let response = client
        .post(format!("{}/contacts/submit", BASE_URL))
        .json(&json!({
            "name": "Curious Visitor",
            "email": "visitor@example.com",
            "subject": "Trip question",
            "category": "destinations",
            "message": "Do you run tours in winter?"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["contact_id"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_submit_contact_form_rejects_bad_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/contacts/submit", BASE_URL))
        .json(&json!({
            "name": "Curious Visitor",
            "email": "not-an-email",
            "subject": "Trip question",
            "message": "Hello"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
