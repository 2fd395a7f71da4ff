mod comments;
mod threads;

pub use comments::CommentUseCase;
pub use threads::ThreadUseCase;
