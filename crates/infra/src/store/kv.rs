//! Generic key-value store over SQLite.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

/// SQLite-backed key-value store.
///
/// Values are opaque text (JSON, by convention) written wholesale per key.
/// The pool is capped at a single connection: the application is
/// single-threaded, and a lone connection keeps `sqlite::memory:` stores
/// coherent in tests.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    /// Open the default on-disk store (see [`store_db_path`]).
    pub async fn open_default() -> anyhow::Result<Self> {
        let db_path = store_db_path()?;
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);

        Self::with_options(options)
            .await
            .with_context(|| format!("failed to open key-value store at {db_path:?}"))
    }

    /// Connect to an explicit SQLite URL (tests use `sqlite::memory:`).
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid sqlite url: {url}"))?
            .create_if_missing(true);

        Self::with_options(options)
            .await
            .with_context(|| format!("failed to open key-value store at {url}"))
    }

    async fn with_options(options: SqliteConnectOptions) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("failed to create SQLite pool")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key        TEXT PRIMARY KEY,
                data       TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to create kv_store table")?;

        Ok(Self { pool })
    }

    /// Fetch the value stored under `key`.
    pub async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query("SELECT data FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to read key {key:?}"))?;

        row.map(|row| {
            row.try_get::<String, _>("data")
                .with_context(|| format!("malformed row for key {key:?}"))
        })
        .transpose()
    }

    /// Store `data` under `key`, replacing any previous value.
    pub async fn put(&self, key: &str, data: &str) -> anyhow::Result<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, data, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(data)
        .bind(&now)
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to write key {key:?}"))?;

        Ok(())
    }

    /// Remove `key` if present.
    pub async fn delete(&self, key: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete key {key:?}"))?;

        Ok(())
    }
}

/// Resolve the path to the SQLite store database:
/// `{app data dir}/coletor/store.db`.
///
/// `COLETOR_DATA_DIR` overrides the directory entirely; otherwise the OS
/// data directory is used, with `~/.local/share` as a fallback. The
/// directory is created if missing.
pub fn store_db_path() -> anyhow::Result<PathBuf> {
    let dir = match std::env::var_os("COLETOR_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context(
                "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share",
            )?
            .join("coletor"),
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory at {dir:?}"))?;

    Ok(dir.join("store.db"))
}
