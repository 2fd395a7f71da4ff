use domain::{
    AddComment, AddedComment, CommentRepository, DeleteComment, Result, ThreadRepository,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct CommentUseCase {
    comments: Arc<dyn CommentRepository>,
    threads: Arc<dyn ThreadRepository>,
}

impl CommentUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>, threads: Arc<dyn ThreadRepository>) -> Self {
        Self { comments, threads }
    }

    pub async fn add_comment(&self, payload: &Value) -> Result<AddedComment> {
        let comment = AddComment::new(payload)?;
        self.threads.verify_available_thread(&comment.thread_id).await?;

        let added = self.comments.add_comment(comment).await?;
        info!("Comment {} added by {}", added.id, added.owner);
        Ok(added)
    }

    // 先校验存在性再校验归属，不在该 thread 下的评论只会返回 404
    pub async fn delete_comment(&self, payload: DeleteComment) -> Result<()> {
        self.comments
            .check_availability_comment_in_thread(&payload.comment_id, &payload.thread_id)
            .await?;
        self.comments
            .verify_comment_owner(&payload.comment_id, &payload.owner)
            .await?;
        self.comments.delete_comment(&payload.comment_id).await?;

        info!("Comment {} deleted by {}", payload.comment_id, payload.owner);
        Ok(())
    }
}
