use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::DeleteComment;
use serde_json::{json, Value};

use super::{pick, success};
use crate::{auth::AuthUser, http::error::ApiError, state::AppState};

pub async fn post_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    AuthUser(owner): AuthUser,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut payload = pick(body, &["content"]);
    payload.insert("threadId".into(), thread_id.into());
    payload.insert("owner".into(), owner.into());

    let added_comment = state.comments.add_comment(&Value::Object(payload)).await?;

    Ok((
        StatusCode::CREATED,
        success(json!({ "addedComment": added_comment })),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(owner): AuthUser,
) -> Result<Json<Value>, ApiError> {
    state
        .comments
        .delete_comment(DeleteComment {
            comment_id,
            thread_id,
            owner,
        })
        .await?;

    Ok(Json(json!({ "status": "success" })))
}
