//! Profile library operations (favorites and watch history).
//!
//! Thin service layer over the user store, keeping HTTP routing separate
//! from persistence. Watch-history recording has no route of its own; it is
//! invoked directly by callers that track playback.

use crate::{db::UserStore, error::AppResult, models::LibraryEntry};

/// Appends an anime to a user's favorites.
///
/// Returns `false` when the user does not exist; the profile is never
/// created as a side effect.
pub async fn add_favorite(
    store: &dyn UserStore,
    username: &str,
    anime_id: i64,
    title: String,
) -> AppResult<bool> {
    let entry = LibraryEntry::new(anime_id, title);
    store.append_favorite(username, &entry).await
}

/// Appends an anime to a user's watch history, with the same absent-user
/// semantics as [`add_favorite`].
pub async fn record_watch(
    store: &dyn UserStore,
    username: &str,
    anime_id: i64,
    title: String,
) -> AppResult<bool> {
    let entry = LibraryEntry::new(anime_id, title);
    store.append_watch_history(username, &entry).await
}
