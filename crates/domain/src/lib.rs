mod comments;
mod error;
mod payload;
mod repository;
mod threads;

pub use comments::{
    AddComment, AddedComment, CommentDetail, CommentRecord, DeleteComment,
    DELETED_COMMENT_PLACEHOLDER,
};
pub use error::{Error, Result};
pub use repository::{CommentRepository, ThreadRepository};
pub use threads::{AddThread, AddedThread, DetailThread, ThreadRecord};

pub const THREAD_NOT_FOUND: &str = "thread not found";
pub const COMMENT_NOT_FOUND: &str = "comment not found in this thread";
pub const NOT_COMMENT_OWNER: &str = "you are not allowed to access this resource";
