use axum::{
    Router,
    routing::{get, post, put},
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod models;
pub mod routes;

/// Builds the application router with every route and middleware attached.
/// Kept separate from `main` so tests can drive the router in-process.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Fitness Center API - v1.0" }))
        .route("/health", get(routes::health::health_check))
        // Member endpoints
        .route(
            "/members",
            post(routes::members::add_member).get(routes::members::get_members),
        )
        .route(
            "/member/{id}",
            put(routes::members::update_member).delete(routes::members::delete_member),
        )
        .route("/search_members", get(routes::members::search_members))
        // Workout session endpoints
        .route(
            "/workout-sessions",
            post(routes::sessions::add_workout_session).get(routes::sessions::get_workout_sessions),
        )
        .route(
            "/workout-session/{id}",
            get(routes::sessions::get_workout_session)
                .put(routes::sessions::update_workout_session)
                .delete(routes::sessions::delete_workout_session),
        )
        .route(
            "/workout-session-by-member",
            post(routes::sessions::workout_sessions_by_member),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
