use sqlx::sqlite::SqlitePool;

use crate::models::{Member, MemberSessionRow, NewMember, NewWorkoutSession, WorkoutSession};

// Member queries
pub async fn insert_member(pool: &SqlitePool, member: &NewMember) -> Result<(), sqlx::Error> {
    sqlx::query(r#"INSERT INTO Members (name, age) VALUES (?, ?)"#)
        .bind(&member.name)
        .bind(member.age)
        .execute(pool)
        .await?;
    Ok(())
}

/// Full overwrite by id. Updating a missing id affects zero rows and is not
/// an error.
pub async fn update_member(
    pool: &SqlitePool,
    id: i64,
    member: &NewMember,
) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE Members SET name = ?, age = ? WHERE id = ?"#)
        .bind(&member.name)
        .bind(member.age)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes a member and all of its workout sessions, sessions first, in one
/// transaction so a partial failure rolls back.
pub async fn delete_member(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(r#"DELETE FROM WorkoutSessions WHERE member_id = ?"#)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query(r#"DELETE FROM Members WHERE id = ?"#)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

pub async fn search_members(pool: &SqlitePool, name: &str) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as::<_, Member>(r#"SELECT * FROM Members WHERE name LIKE ?"#)
        .bind(format!("%{}%", name))
        .fetch_all(pool)
        .await
}

pub async fn get_all_members(pool: &SqlitePool) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as::<_, Member>(r#"SELECT * FROM Members"#)
        .fetch_all(pool)
        .await
}

// Workout session queries
pub async fn insert_session(
    pool: &SqlitePool,
    session: &NewWorkoutSession,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO WorkoutSessions (member_id, session_date, session_time, activity)
           VALUES (?, ?, ?, ?)"#,
    )
    .bind(session.member_id)
    .bind(session.session_date)
    .bind(&session.session_time)
    .bind(&session.activity)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update_session(
    pool: &SqlitePool,
    session_id: i64,
    session: &NewWorkoutSession,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"UPDATE WorkoutSessions
           SET member_id = ?, session_date = ?, session_time = ?, activity = ?
           WHERE session_id = ?"#,
    )
    .bind(session.member_id)
    .bind(session.session_date)
    .bind(&session.session_time)
    .bind(&session.activity)
    .bind(session_id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_session(pool: &SqlitePool, session_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM WorkoutSessions WHERE session_id = ?"#)
        .bind(session_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch by session id as a list (singleton or empty).
pub async fn get_session_by_id(
    pool: &SqlitePool,
    session_id: i64,
) -> Result<Vec<WorkoutSession>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutSession>(
        r#"SELECT * FROM WorkoutSessions WHERE session_id = ?"#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .await
}

pub async fn get_all_sessions(pool: &SqlitePool) -> Result<Vec<WorkoutSession>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutSession>(r#"SELECT * FROM WorkoutSessions"#)
        .fetch_all(pool)
        .await
}

/// Sessions for an exact member name match. Only session columns come back.
pub async fn get_sessions_by_member_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Vec<MemberSessionRow>, sqlx::Error> {
    sqlx::query_as::<_, MemberSessionRow>(
        r#"SELECT s.session_id, s.session_date, s.session_time, s.activity
           FROM WorkoutSessions s
           JOIN Members m ON s.member_id = m.id
           WHERE m.name = ?"#,
    )
    .bind(name)
    .fetch_all(pool)
    .await
}
