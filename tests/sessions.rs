mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete, get, post, put, test_app};

#[tokio::test]
async fn add_session_then_fetch_by_id() {
    let (app, _pool) = test_app().await;

    post(&app, "/members", json!({"name": "Alice", "age": 30})).await;

    let (status, body) = post(
        &app,
        "/workout-sessions",
        json!({
            "member_id": 1,
            "session_date": "2024-01-01",
            "session_time": "10:00",
            "activity": "Run"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "New workout session successfully added!");

    let (status, body) = get(&app, "/workout-sessions").await;
    assert_eq!(status, StatusCode::OK);
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    let session_id = sessions[0]["session_id"].as_i64().unwrap();
    assert!(session_id > 0);

    let (status, body) = get(&app, &format!("/workout-session/{}", session_id)).await;
    assert_eq!(status, StatusCode::OK);
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["member_id"], 1);
    assert_eq!(sessions[0]["session_date"], "2024-01-01");
    assert_eq!(sessions[0]["session_time"], "10:00");
    assert_eq!(sessions[0]["activity"], "Run");

    // Unknown id is an empty list, not a 404
    let (status, body) = get(&app, "/workout-session/999").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn add_session_rejects_bad_payload() {
    let (app, _pool) = test_app().await;

    let (status, body) = post(&app, "/workout-sessions", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["member_id", "session_date", "session_time", "activity"] {
        assert_eq!(body[field][0], "Missing data for required field.");
    }

    let (status, body) = post(
        &app,
        "/workout-sessions",
        json!({
            "member_id": 1,
            "session_date": "January 1st",
            "session_time": "10:00",
            "activity": "Run"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["session_date"][0], "Not a valid date.");

    let (status, body) = post(
        &app,
        "/workout-sessions",
        json!({
            "session_id": 5,
            "member_id": 1,
            "session_date": "2024-01-01",
            "session_time": "10:00",
            "activity": "Run"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["session_id"][0], "Unknown field.");

    let (_, body) = get(&app, "/workout-sessions").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_session_overwrites_all_fields() {
    let (app, _pool) = test_app().await;

    post(
        &app,
        "/workout-sessions",
        json!({
            "member_id": 1,
            "session_date": "2024-01-01",
            "session_time": "10:00",
            "activity": "Run"
        }),
    )
    .await;

    let (status, body) = put(
        &app,
        "/workout-session/1",
        json!({
            "member_id": 2,
            "session_date": "2024-02-02",
            "session_time": "18:30",
            "activity": "Yoga"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Workout session updated successfully!");

    let (_, body) = get(&app, "/workout-session/1").await;
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions[0]["member_id"], 2);
    assert_eq!(sessions[0]["session_date"], "2024-02-02");
    assert_eq!(sessions[0]["session_time"], "18:30");
    assert_eq!(sessions[0]["activity"], "Yoga");
}

#[tokio::test]
async fn malformed_session_id_stays_json() {
    let (app, _pool) = test_app().await;

    let (status, body) = get(&app, "/workout-session/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["id"][0], "Not a valid integer.");

    let (status, body) = get(&app, "/workout-sessions?offset=later").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["_schema"][0].is_string());
}

#[tokio::test]
async fn update_missing_session_is_a_no_op() {
    let (app, _pool) = test_app().await;

    let (status, _body) = put(
        &app,
        "/workout-session/999",
        json!({
            "member_id": 1,
            "session_date": "2024-01-01",
            "session_time": "10:00",
            "activity": "Run"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/workout-sessions").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_session_by_id() {
    let (app, _pool) = test_app().await;

    post(
        &app,
        "/workout-sessions",
        json!({
            "member_id": 1,
            "session_date": "2024-01-01",
            "session_time": "10:00",
            "activity": "Run"
        }),
    )
    .await;

    let (status, body) = delete(&app, "/workout-session/1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Workout session was successfully deleted!");

    let (_, body) = get(&app, "/workout-sessions").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn sessions_by_member_name() {
    let (app, _pool) = test_app().await;

    post(&app, "/members", json!({"name": "Alice", "age": 30})).await;
    post(&app, "/members", json!({"name": "Bob", "age": 41})).await;
    for (member_id, activity) in [(1, "Run"), (1, "Swim"), (2, "Yoga")] {
        post(
            &app,
            "/workout-sessions",
            json!({
                "member_id": member_id,
                "session_date": "2024-01-01",
                "session_time": "10:00",
                "activity": activity
            }),
        )
        .await;
    }

    let (status, body) = post(&app, "/workout-session-by-member", json!({"member": "Alice"})).await;
    assert_eq!(status, StatusCode::OK);
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    for session in sessions {
        // Session columns only; no member fields leak through the join
        let object = session.as_object().unwrap();
        assert!(object.contains_key("session_id"));
        assert!(object.contains_key("session_date"));
        assert!(object.contains_key("session_time"));
        assert!(object.contains_key("activity"));
        assert!(!object.contains_key("member_id"));
        assert!(!object.contains_key("name"));
    }

    // Exact match only
    let (status, body) = post(&app, "/workout-session-by-member", json!({"member": "Ali"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = post(&app, "/workout-session-by-member", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["member"][0], "Missing data for required field.");

    let (status, body) = post(&app, "/workout-session-by-member", json!({"member": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["member"][0], "Not a valid string.");
}
