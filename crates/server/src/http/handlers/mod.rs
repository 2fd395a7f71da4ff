pub mod comments;
pub mod threads;

use axum::Json;
use serde_json::{json, Map, Value};

/// 只取出指定字段，其余丢弃
fn pick(body: Option<Json<Value>>, fields: &[&str]) -> Map<String, Value> {
    let mut payload = Map::new();
    if let Some(Json(Value::Object(mut body))) = body {
        for field in fields {
            if let Some(v) = body.remove(*field) {
                payload.insert((*field).to_string(), v);
            }
        }
    }
    payload
}

fn success(data: Value) -> Json<Value> {
    Json(json!({ "status": "success", "data": data }))
}
