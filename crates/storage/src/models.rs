use chrono::{DateTime, Utc};
use domain::{CommentRecord, ThreadRecord};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,

    // Join 字段 (来自 users 表)
    pub username: String,
}

impl From<SqlThread> for ThreadRecord {
    fn from(sql: SqlThread) -> Self {
        ThreadRecord {
            id: sql.id,
            title: sql.title,
            body: sql.body,
            date: sql.created_at,
            username: sql.username,
        }
    }
}

#[derive(FromRow)]
pub struct SqlComment {
    pub id: String,
    pub thread_id: String,
    pub owner: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,

    pub username: String,
}

impl From<SqlComment> for CommentRecord {
    fn from(sql: SqlComment) -> Self {
        CommentRecord {
            id: sql.id,
            thread_id: sql.thread_id,
            owner: sql.owner,
            username: sql.username,
            content: sql.content,
            created_at: sql.created_at,
            is_deleted: sql.is_deleted,
        }
    }
}
