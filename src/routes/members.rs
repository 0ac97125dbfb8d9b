use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::extractors::{Path, Query};
use crate::models::{Member, NewMember};

// Query parameters for listing members
#[derive(Deserialize)]
pub struct ListMembersQuery {
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    offset: Option<i64>,
}

// Query parameters for searching members
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    name: Option<String>,
}

// POST /members - Add a new member
pub async fn add_member(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member = NewMember::decode(&body)?;

    db::insert_member(&pool, &member).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "New member successfully added!" })),
    ))
}

// PUT /member/{id} - Overwrite a member's fields
pub async fn update_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member = NewMember::decode(&body)?;

    db::update_member(&pool, id, &member).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Member updated successfully!" })),
    ))
}

// DELETE /member/{id} - Delete a member and all of their sessions
pub async fn delete_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    db::delete_member(&pool, id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Member was successfully deleted!" })),
    ))
}

// GET /search_members?name=Ali - Substring search on member name
pub async fn search_members(
    State(pool): State<SqlitePool>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::field("name", "Missing data for required field."))?;

    let members = db::search_members(&pool, &name).await?;

    Ok(Json(members))
}

// GET /members - List all members
pub async fn get_members(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListMembersQuery>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let members = db::get_all_members(&pool).await?;

    // Apply pagination if provided
    let start = params.offset.unwrap_or(0).max(0) as usize;
    let paginated: Vec<Member> = match params.limit {
        Some(limit) => members
            .into_iter()
            .skip(start)
            .take(limit.max(0) as usize)
            .collect(),
        None => members.into_iter().skip(start).collect(),
    };

    Ok(Json(paginated))
}
