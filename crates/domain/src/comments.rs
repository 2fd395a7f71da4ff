use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::payload;

// 已删除评论的替换文本
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**comment has been deleted**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl AddComment {
    const ENTITY: &'static str = "ADD_COMMENT";

    pub fn new(payload: &Value) -> Result<Self> {
        let map = payload::require(payload, Self::ENTITY, &["content", "threadId", "owner"])?;
        Ok(Self {
            content: payload::text(map, Self::ENTITY, "content")?,
            thread_id: payload::text(map, Self::ENTITY, "threadId")?,
            owner: payload::text(map, Self::ENTITY, "owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    const ENTITY: &'static str = "ADDED_COMMENT";

    pub fn new(payload: &Value) -> Result<Self> {
        let map = payload::require(payload, Self::ENTITY, &["id", "content", "owner"])?;
        Ok(Self {
            id: payload::text(map, Self::ENTITY, "id")?,
            content: payload::text(map, Self::ENTITY, "content")?,
            owner: payload::text(map, Self::ENTITY, "owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub comment_id: String,
    pub thread_id: String,
    pub owner: String,
}

// Join 字段 username 来自 users 表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub thread_id: String,
    pub owner: String,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}
