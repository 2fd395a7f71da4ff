use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::debug;
use domain::{AddThread, AddedThread, Error, Result, ThreadRecord, ThreadRepository, THREAD_NOT_FOUND};

use crate::{models::SqlThread, Db};

#[async_trait]
impl ThreadRepository for Db {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread> {
        let id = format!("thread-{}", (self.next_id)());

        let (id, title, owner) = sqlx::query_as::<_, (String, String, String)>(
            r#"
            INSERT INTO threads (id, title, body, owner, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("insert thread")?;

        AddedThread::new(&json!({ "id": id, "title": title, "owner": owner }))
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRecord> {
        debug!(thread_id, "select thread");
        let row = sqlx::query_as::<_, SqlThread>(
            r#"
            SELECT t.id, t.title, t.body, t.created_at, u.username
            FROM threads t
            INNER JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .context("select thread")?;

        row.map(Into::into)
            .ok_or_else(|| Error::not_found(THREAD_NOT_FOUND))
    }

    async fn verify_available_thread(&self, thread_id: &str) -> Result<()> {
        let found = sqlx::query_scalar::<_, i32>("SELECT 1 FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .context("check thread")?;

        match found {
            Some(_) => Ok(()),
            None => Err(Error::not_found(THREAD_NOT_FOUND)),
        }
    }
}
