use async_trait::async_trait;

use crate::comments::{AddComment, AddedComment, CommentRecord};
use crate::error::Result;
use crate::threads::{AddThread, AddedThread, ThreadRecord};

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread>;

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRecord>;

    async fn verify_available_thread(&self, thread_id: &str) -> Result<()>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment>;

    // 按 created_at 升序
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>>;

    async fn check_availability_comment_in_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<()>;

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()>;

    // 软删除：只打标记
    async fn delete_comment(&self, comment_id: &str) -> Result<()>;
}
