use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{pick, success};
use crate::{auth::AuthUser, http::error::ApiError, state::AppState};

pub async fn post_thread(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut payload = pick(body, &["title", "body"]);
    payload.insert("owner".into(), owner.into());

    let added_thread = state.threads.add_thread(&Value::Object(payload)).await?;

    Ok((
        StatusCode::CREATED,
        success(json!({ "addedThread": added_thread })),
    ))
}

pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let thread = state.threads.get_thread(&thread_id).await?;
    Ok(success(json!({ "thread": thread })))
}
