use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{MediaResult, UserProfile},
    services::{discovery, library},
};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddLibraryEntryRequest {
    pub anime_id: i64,
    pub title: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend anime for a free-text genre description
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<Vec<MediaResult>>> {
    let results = discovery::recommend_by_text(
        &state.tagger,
        &state.lexicon,
        state.provider.as_ref(),
        &params.genre,
    )
    .await?;

    if results.is_empty() {
        return Err(AppError::NotFound("No recommendations found".to_string()));
    }

    Ok(Json(results))
}

/// Search anime by free text; the phrase is built from nouns only
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<MediaResult>>> {
    let results =
        discovery::search_by_text(&state.tagger, state.provider.as_ref(), &params.query).await?;

    if results.is_empty() {
        return Err(AppError::NotFound(
            "No anime found matching that query".to_string(),
        ));
    }

    Ok(Json(results))
}

/// Create a new user profile
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let profile = UserProfile::new(request.username, request.email, request.preferences);

    if !state.store.insert_user(&profile).await? {
        return Err(AppError::InvalidInput("Username already taken".to_string()));
    }

    Ok((StatusCode::CREATED, Json(json!({ "message": "User created" }))))
}

/// Fetch a stored user profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserProfile>> {
    state
        .store
        .find_user(&username)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Append an anime to a user's favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<AddLibraryEntryRequest>,
) -> AppResult<Json<Value>> {
    let added = library::add_favorite(
        state.store.as_ref(),
        &username,
        request.anime_id,
        request.title,
    )
    .await?;

    if !added {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(json!({ "message": "Anime added to favorites" })))
}

/// Liveness check against the user store
///
/// Failures are reported in the payload rather than propagated, so the
/// check stays best-effort even when the store is down.
pub async fn test_db(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "connected" }))),
        Err(error) => {
            tracing::error!(%error, "User store liveness check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "detail": error.to_string() })),
            )
        }
    }
}
