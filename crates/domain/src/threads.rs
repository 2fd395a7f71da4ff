use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::comments::CommentDetail;
use crate::error::Result;
use crate::payload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    const ENTITY: &'static str = "ADD_THREAD";

    pub fn new(payload: &Value) -> Result<Self> {
        let map = payload::require(payload, Self::ENTITY, &["title", "body", "owner"])?;
        Ok(Self {
            title: payload::text(map, Self::ENTITY, "title")?,
            body: payload::text(map, Self::ENTITY, "body")?,
            owner: payload::text(map, Self::ENTITY, "owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    const ENTITY: &'static str = "ADDED_THREAD";

    pub fn new(payload: &Value) -> Result<Self> {
        let map = payload::require(payload, Self::ENTITY, &["id", "title", "owner"])?;
        Ok(Self {
            id: payload::text(map, Self::ENTITY, "id")?,
            title: payload::text(map, Self::ENTITY, "title")?,
            owner: payload::text(map, Self::ENTITY, "owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// `GET /threads/{threadId}` 的返回模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

impl DetailThread {
    pub fn new(thread: ThreadRecord, comments: Vec<CommentDetail>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}
