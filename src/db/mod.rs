//! User store abstraction and its Postgres implementation.

use crate::{
    error::AppResult,
    models::{LibraryEntry, UserProfile},
};

pub mod postgres;

pub use postgres::{create_pool, PgUserStore};

/// Document-style user store.
///
/// Records are addressed by unique username. Favorites and watch history are
/// append-only lists; each operation is independently atomic at the
/// single-document level. No cross-document transactions, no
/// optimistic-concurrency checks, no retries.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Point lookup by username.
    async fn find_user(&self, username: &str) -> AppResult<Option<UserProfile>>;

    /// Inserts a new profile. Returns `false` when the username is taken;
    /// the existing record is left untouched.
    async fn insert_user(&self, profile: &UserProfile) -> AppResult<bool>;

    /// Appends to the favorites list. Returns `false` when the user does
    /// not exist; the user is never created implicitly.
    async fn append_favorite(&self, username: &str, entry: &LibraryEntry) -> AppResult<bool>;

    /// Appends to the watch-history list, with the same absent-user
    /// semantics as [`append_favorite`](UserStore::append_favorite).
    async fn append_watch_history(&self, username: &str, entry: &LibraryEntry) -> AppResult<bool>;

    /// Store liveness check.
    async fn ping(&self) -> AppResult<()>;
}
