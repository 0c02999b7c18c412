use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Row};

use crate::{
    db::UserStore,
    error::AppResult,
    models::{LibraryEntry, UserProfile},
};

/// Creates a PostgreSQL connection pool and applies embedded migrations.
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Postgres-backed [`UserStore`].
///
/// One row per user, keyed by username. The list fields live in JSONB
/// columns so appends stay single-statement and atomic (`jsonb || jsonb`
/// pushes the entry onto the array).
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends one entry to a JSONB list column for an existing user.
    ///
    /// `rows_affected == 0` means the user is absent; the update never
    /// creates a row. The column name comes from a fixed internal set,
    /// never from request data.
    async fn append_to_list(
        &self,
        column: &str,
        username: &str,
        entry: &LibraryEntry,
    ) -> AppResult<bool> {
        let sql = format!(
            "UPDATE users SET {column} = {column} || $2 WHERE username = $1"
        );
        let result = sqlx::query(&sql)
            .bind(username)
            .bind(Json(entry))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    async fn find_user(&self, username: &str) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query(
            "SELECT username, email, preferences, favorites, watch_history \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let preferences: Json<Vec<String>> = row.try_get("preferences")?;
        let favorites: Json<Vec<LibraryEntry>> = row.try_get("favorites")?;
        let watch_history: Json<Vec<LibraryEntry>> = row.try_get("watch_history")?;

        Ok(Some(UserProfile {
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            preferences: preferences.0,
            favorites: favorites.0,
            watch_history: watch_history.0,
        }))
    }

    async fn insert_user(&self, profile: &UserProfile) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, preferences, favorites, watch_history) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (username) DO NOTHING",
        )
        .bind(&profile.username)
        .bind(&profile.email)
        .bind(Json(&profile.preferences))
        .bind(Json(&profile.favorites))
        .bind(Json(&profile.watch_history))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn append_favorite(&self, username: &str, entry: &LibraryEntry) -> AppResult<bool> {
        self.append_to_list("favorites", username, entry).await
    }

    async fn append_watch_history(&self, username: &str, entry: &LibraryEntry) -> AppResult<bool> {
        self.append_to_list("watch_history", username, entry).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
