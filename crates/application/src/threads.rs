use domain::{
    AddThread, AddedThread, CommentDetail, CommentRecord, CommentRepository, DetailThread, Result,
    ThreadRepository, DELETED_COMMENT_PLACEHOLDER,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct ThreadUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl ThreadUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    pub async fn add_thread(&self, payload: &Value) -> Result<AddedThread> {
        let thread = AddThread::new(payload)?;
        let added = self.threads.add_thread(thread).await?;
        info!("Thread {} created by {}", added.id, added.owner);
        Ok(added)
    }

    pub async fn get_thread(&self, thread_id: &str) -> Result<DetailThread> {
        let thread = self.threads.get_thread(thread_id).await?;
        let comments = self.comments.get_comments_by_thread_id(thread_id).await?;
        debug!("Thread {} has {} comment(s)", thread_id, comments.len());

        let comments = comments.into_iter().map(present_comment).collect();
        Ok(DetailThread::new(thread, comments))
    }
}

fn present_comment(comment: CommentRecord) -> CommentDetail {
    let content = if comment.is_deleted {
        DELETED_COMMENT_PLACEHOLDER.to_string()
    } else {
        comment.content
    };

    CommentDetail {
        id: comment.id,
        username: comment.username,
        date: comment.created_at,
        content,
    }
}
