mod helpers;

use awc::http::StatusCode;
use chrono::{Duration, Utc};
use helpers::setup::spawn_app;
use parlo_api_structs::{AssignmentResponse, UserResponse};

const ALL_WEEK: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

async fn create_user(client: &awc::Client, address: &str) -> UserResponse {
    let mut res = client
        .post(format!("{}/user", address))
        .send_json(&serde_json::json!({
            "name": "Ada",
            "surname": "Lovelace"
        }))
        .await
        .expect("Expected to create user");
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.expect("Expected a user response")
}

async fn get_reminders(client: &awc::Client, address: &str, user_id: &str) -> Vec<String> {
    let mut res = client
        .get(format!("{}/user/{}/reminders", address, user_id))
        .send()
        .await
        .expect("Expected to query reminders");
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.expect("Expected a reminder list")
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let res = client
        .get(format!("{}/", address))
        .send()
        .await
        .expect("Expected status response");
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::main]
#[test]
async fn test_create_and_get_user() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();

    let created = create_user(&client, &address).await;
    assert_eq!(created.user.name, "Ada");

    let mut res = client
        .get(format!("{}/user/{}", address, created.user.id))
        .send()
        .await
        .expect("Expected to get user");
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: UserResponse = res.json().await.expect("Expected a user response");
    assert_eq!(fetched.user.id, created.user.id);
}

#[actix_web::main]
#[test]
async fn test_unknown_user_is_not_found() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();

    let missing = "b5e4f0c2-46a1-4b51-b9c5-1f0e0e1e3a7d";
    let res = client
        .get(format!("{}/user/{}", address, missing))
        .send()
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/user/{}/reminders", address, missing))
        .send()
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_empty_schedule_never_reminds() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let res = client
        .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({ "title": "Vowel drills" }))
        .await
        .expect("Expected to create assignment");
    assert_eq!(res.status(), StatusCode::CREATED);

    let reminders = get_reminders(&client, &address, &user.id.to_string()).await;
    assert!(reminders.is_empty());
}

#[actix_web::main]
#[test]
async fn test_full_week_schedule_reminds_once() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let mut res = client
        .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({
            "title": "Vowel drills",
            "schedule": ALL_WEEK
        }))
        .await
        .expect("Expected to create assignment");
    assert_eq!(res.status(), StatusCode::CREATED);
    let assignment: AssignmentResponse = res.json().await.expect("Expected an assignment");
    assert_eq!(assignment.assignment.schedule.len(), 7);

    // Whatever weekday it is, at least one scheduled day has elapsed and no
    // completion covers it, so the bundle is due exactly once
    let reminders = get_reminders(&client, &address, &user.id.to_string()).await;
    assert_eq!(reminders, vec!["Vowel drills".to_string()]);
}

#[actix_web::main]
#[test]
async fn test_unassigning_clears_reminders() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let res = client
        .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({
            "title": "Vowel drills",
            "schedule": ALL_WEEK
        }))
        .await
        .expect("Expected to create assignment");
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send()
        .await
        .expect("Expected to remove assignment");
    assert_eq!(res.status(), StatusCode::OK);

    let reminders = get_reminders(&client, &address, &user.id.to_string()).await;
    assert!(reminders.is_empty());

    // Removing it again is a 404
    let res = client
        .delete(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send()
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_duplicate_assignment_is_a_conflict() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let res = client
            .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
            .send_json(&serde_json::json!({ "title": "Vowel drills" }))
            .await
            .expect("Expected a response");
        assert_eq!(res.status(), expected);
    }
}

#[actix_web::main]
#[test]
async fn test_schedule_update_clears_reminders() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let res = client
        .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({
            "title": "Vowel drills",
            "schedule": ALL_WEEK
        }))
        .await
        .expect("Expected to create assignment");
    assert_eq!(res.status(), StatusCode::CREATED);

    let mut res = client
        .put(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({ "schedule": [] }))
        .await
        .expect("Expected to update assignment");
    assert_eq!(res.status(), StatusCode::OK);
    let updated: AssignmentResponse = res.json().await.expect("Expected an assignment");
    assert!(updated.assignment.schedule.is_empty());

    let reminders = get_reminders(&client, &address, &user.id.to_string()).await;
    assert!(reminders.is_empty());
}

#[actix_web::main]
#[test]
async fn test_unknown_weekday_codes_are_rejected() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let res = client
        .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({
            "title": "Vowel drills",
            "schedule": ["monday"]
        }))
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_recording_completions() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let res = client
        .post(format!(
            "{}/user/{}/bundle/{}/completion",
            address, user.id, bundle_id
        ))
        .send_json(&serde_json::json!({
            "state": "ENDED",
            "stepReached": 4,
            "timestamp": (Utc::now() - Duration::minutes(5)).to_rfc3339()
        }))
        .await
        .expect("Expected to record completion");
    assert_eq!(res.status(), StatusCode::CREATED);

    // Clock skew guard
    let res = client
        .post(format!(
            "{}/user/{}/bundle/{}/completion",
            address, user.id, bundle_id
        ))
        .send_json(&serde_json::json!({
            "state": "ENDED",
            "stepReached": 4,
            "timestamp": (Utc::now() + Duration::hours(3)).to_rfc3339()
        }))
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_deleting_a_user_removes_their_data() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    let bundle_id = "0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1";
    let res = client
        .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
        .send_json(&serde_json::json!({
            "title": "Vowel drills",
            "schedule": ALL_WEEK
        }))
        .await
        .expect("Expected to create assignment");
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/user/{}", address, user.id))
        .send()
        .await
        .expect("Expected to delete user");
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/user/{}/reminders", address, user.id))
        .send()
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_listing_assignments() {
    let (_, address) = spawn_app().await;
    let client = awc::Client::new();
    let user = create_user(&client, &address).await.user;

    for (bundle_id, title) in [
        ("0d2c7e61-34c1-44a5-9f45-d8f0ddb1f1b1", "Vowel drills"),
        ("7aa1f1fc-3c5c-4a0e-89a8-60e21d0a52c3", "Breathing"),
    ] {
        let res = client
            .post(format!("{}/user/{}/bundle/{}", address, user.id, bundle_id))
            .send_json(&serde_json::json!({ "title": title }))
            .await
            .expect("Expected to create assignment");
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let mut res = client
        .get(format!("{}/user/{}/assignments", address, user.id))
        .send()
        .await
        .expect("Expected to list assignments");
    assert_eq!(res.status(), StatusCode::OK);
    let body: parlo_api_structs::get_user_assignments::APIResponse =
        res.json().await.expect("Expected an assignment list");
    assert_eq!(body.assignments.len(), 2);
}
