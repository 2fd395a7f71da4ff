use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::debug;
use domain::{
    AddComment, AddedComment, CommentRecord, CommentRepository, Error, Result, COMMENT_NOT_FOUND,
    NOT_COMMENT_OWNER,
};

use crate::{models::SqlComment, Db};

#[async_trait]
impl CommentRepository for Db {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment> {
        let id = format!("comment-{}", (self.next_id)());

        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            r#"
            INSERT INTO comments (id, content, thread_id, owner, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&comment.content)
        .bind(&comment.thread_id)
        .bind(&comment.owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("insert comment")?;

        AddedComment::new(&json!({ "id": id, "content": content, "owner": owner }))
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>> {
        let rows = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT
                c.id,
                c.thread_id,
                c.owner,
                c.content,
                c.created_at,
                c.is_deleted,
                u.username
            FROM comments c
            INNER JOIN users u ON u.id = c.owner
            WHERE c.thread_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .context("select comments")?;

        debug!(thread_id, count = rows.len(), "select comments");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn check_availability_comment_in_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<()> {
        let found =
            sqlx::query_scalar::<_, i32>("SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2")
                .bind(comment_id)
                .bind(thread_id)
                .fetch_optional(&self.pool)
                .await
                .context("check comment")?;

        match found {
            Some(_) => Ok(()),
            None => Err(Error::not_found(COMMENT_NOT_FOUND)),
        }
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let found =
            sqlx::query_scalar::<_, i32>("SELECT 1 FROM comments WHERE id = $1 AND owner = $2")
                .bind(comment_id)
                .bind(owner)
                .fetch_optional(&self.pool)
                .await
                .context("check comment owner")?;

        match found {
            Some(_) => Ok(()),
            None => Err(Error::authorization(NOT_COMMENT_OWNER)),
        }
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        // 软删除：保留内容与时间戳，读取时再屏蔽
        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .context("soft delete comment")?;
        Ok(())
    }
}
