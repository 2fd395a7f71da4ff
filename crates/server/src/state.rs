use application::{CommentUseCase, ThreadUseCase};
use axum::extract::FromRef;
use domain::{CommentRepository, ThreadRepository};
use std::sync::Arc;

use crate::auth::AccessTokens;

#[derive(Clone)]
pub struct AppState {
    pub threads: ThreadUseCase,
    pub comments: CommentUseCase,
    pub tokens: AccessTokens,
}

impl AppState {
    pub fn new<R>(repo: R, tokens: AccessTokens) -> Self
    where
        R: ThreadRepository + CommentRepository + Clone + 'static,
    {
        let threads: Arc<dyn ThreadRepository> = Arc::new(repo.clone());
        let comments: Arc<dyn CommentRepository> = Arc::new(repo);
        Self {
            threads: ThreadUseCase::new(threads.clone(), comments.clone()),
            comments: CommentUseCase::new(comments, threads),
            tokens,
        }
    }
}

impl FromRef<AppState> for AccessTokens {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
