use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::extractors::{Path, Query};
use crate::models::{MemberSessionRow, NewWorkoutSession, WorkoutSession};

// Query parameters for listing sessions
#[derive(Deserialize)]
pub struct ListSessionsQuery {
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    offset: Option<i64>,
}

// POST /workout-sessions - Add a new workout session
pub async fn add_workout_session(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session = NewWorkoutSession::decode(&body)?;

    db::insert_session(&pool, &session).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "New workout session successfully added!" })),
    ))
}

// PUT /workout-session/{id} - Overwrite a session's fields
pub async fn update_workout_session(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session = NewWorkoutSession::decode(&body)?;

    db::update_session(&pool, id, &session).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Workout session updated successfully!" })),
    ))
}

// DELETE /workout-session/{id} - Delete a session by id
pub async fn delete_workout_session(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    db::delete_session(&pool, id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Workout session was successfully deleted!" })),
    ))
}

// GET /workout-session/{id} - Fetch a session by id (list, possibly empty)
pub async fn get_workout_session(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = db::get_session_by_id(&pool, id).await?;

    Ok(Json(sessions))
}

// GET /workout-sessions - List all workout sessions
pub async fn get_workout_sessions(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListSessionsQuery>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = db::get_all_sessions(&pool).await?;

    // Apply pagination if provided
    let start = params.offset.unwrap_or(0).max(0) as usize;
    let paginated: Vec<WorkoutSession> = match params.limit {
        Some(limit) => sessions
            .into_iter()
            .skip(start)
            .take(limit.max(0) as usize)
            .collect(),
        None => sessions.into_iter().skip(start).collect(),
    };

    Ok(Json(paginated))
}

// POST /workout-session-by-member - Sessions for an exact member name
pub async fn workout_sessions_by_member(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<MemberSessionRow>>, ApiError> {
    let member = match body.get("member") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(ApiError::field("member", "Not a valid string.")),
        None => {
            return Err(ApiError::field(
                "member",
                "Missing data for required field.",
            ));
        }
    };

    let sessions = db::get_sessions_by_member_name(&pool, &member).await?;

    Ok(Json(sessions))
}
