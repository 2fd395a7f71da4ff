use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    AddComment, AddThread, AddedComment, AddedThread, CommentRecord, CommentRepository, Error,
    Result, ThreadRecord, ThreadRepository, COMMENT_NOT_FOUND, NOT_COMMENT_OWNER, THREAD_NOT_FOUND,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ids::{default_generator, IdGenerator};

/// 进程内存储，行为与 [`Db`](crate::Db) 一致；未登记用户名的 owner 以 id 显示
#[derive(Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    next_id: IdGenerator,
}

#[derive(Default)]
struct Tables {
    users: HashMap<String, String>,
    threads: Vec<StoredThread>,
    comments: Vec<StoredComment>,
}

struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
    created_at: DateTime<Utc>,
}

struct StoredComment {
    id: String,
    content: String,
    thread_id: String,
    owner: String,
    created_at: DateTime<Utc>,
    is_deleted: bool,
}

impl Tables {
    fn username(&self, owner: &str) -> String {
        self.users
            .get(owner)
            .cloned()
            .unwrap_or_else(|| owner.to_string())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::default(),
            next_id: default_generator(),
        }
    }

    pub fn with_id_generator(mut self, next_id: IdGenerator) -> Self {
        self.next_id = next_id;
        self
    }

    pub async fn add_user(&self, id: impl Into<String>, username: impl Into<String>) {
        self.tables
            .write()
            .await
            .users
            .insert(id.into(), username.into());
    }
}

#[async_trait]
impl ThreadRepository for MemoryStore {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread> {
        let id = format!("thread-{}", (self.next_id)());
        let added = AddedThread::new(&json!({
            "id": &id,
            "title": &thread.title,
            "owner": &thread.owner,
        }))?;

        self.tables.write().await.threads.push(StoredThread {
            id,
            title: thread.title,
            body: thread.body,
            owner: thread.owner,
            created_at: Utc::now(),
        });
        Ok(added)
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRecord> {
        let tables = self.tables.read().await;
        tables
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .map(|t| ThreadRecord {
                id: t.id.clone(),
                title: t.title.clone(),
                body: t.body.clone(),
                date: t.created_at,
                username: tables.username(&t.owner),
            })
            .ok_or_else(|| Error::not_found(THREAD_NOT_FOUND))
    }

    async fn verify_available_thread(&self, thread_id: &str) -> Result<()> {
        let tables = self.tables.read().await;
        if tables.threads.iter().any(|t| t.id == thread_id) {
            Ok(())
        } else {
            Err(Error::not_found(THREAD_NOT_FOUND))
        }
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment> {
        let id = format!("comment-{}", (self.next_id)());
        let added = AddedComment::new(&json!({
            "id": &id,
            "content": &comment.content,
            "owner": &comment.owner,
        }))?;

        self.tables.write().await.comments.push(StoredComment {
            id,
            content: comment.content,
            thread_id: comment.thread_id,
            owner: comment.owner,
            created_at: Utc::now(),
            is_deleted: false,
        });
        Ok(added)
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<CommentRecord> = tables
            .comments
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .map(|c| CommentRecord {
                id: c.id.clone(),
                thread_id: c.thread_id.clone(),
                owner: c.owner.clone(),
                username: tables.username(&c.owner),
                content: c.content.clone(),
                created_at: c.created_at,
                is_deleted: c.is_deleted,
            })
            .collect();
        // 稳定排序：时间相同则保持插入顺序
        rows.sort_by_key(|c| c.created_at);
        Ok(rows)
    }

    async fn check_availability_comment_in_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<()> {
        let tables = self.tables.read().await;
        if tables
            .comments
            .iter()
            .any(|c| c.id == comment_id && c.thread_id == thread_id)
        {
            Ok(())
        } else {
            Err(Error::not_found(COMMENT_NOT_FOUND))
        }
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let tables = self.tables.read().await;
        if tables
            .comments
            .iter()
            .any(|c| c.id == comment_id && c.owner == owner)
        {
            Ok(())
        } else {
            Err(Error::authorization(NOT_COMMENT_OWNER))
        }
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        if let Some(c) = tables.comments.iter_mut().find(|c| c.id == comment_id) {
            c.is_deleted = true;
        }
        Ok(())
    }
}
