// 对运行中的服务做冒烟测试
// 需要 FORUM_ACCESS_TOKEN (身份服务签发)，FORUM_BASE_URL 默认 http://127.0.0.1:5000

use anyhow::{bail, Context};
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var("FORUM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let token = std::env::var("FORUM_ACCESS_TOKEN").context("FORUM_ACCESS_TOKEN must be set")?;
    let client = reqwest::Client::new();
    println!("Starting forum test client against {}...", base_url);

    println!("\n[1/4] Creating thread...");
    let resp = client
        .post(format!("{}/threads", base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": "Hello", "body": "Posted by the test client" }))
        .send()
        .await?;
    let body = expect_status(resp, 201).await?;
    let thread_id = body["data"]["addedThread"]["id"]
        .as_str()
        .context("Missing thread id")?
        .to_string();
    println!("   -> {}", thread_id);

    println!("\n[2/4] Adding comment...");
    let resp = client
        .post(format!("{}/threads/{}/comments", base_url, thread_id))
        .bearer_auth(&token)
        .json(&json!({ "content": "First!" }))
        .send()
        .await?;
    let body = expect_status(resp, 201).await?;
    let comment_id = body["data"]["addedComment"]["id"]
        .as_str()
        .context("Missing comment id")?
        .to_string();
    println!("   -> {}", comment_id);

    println!("\n[3/4] Deleting comment...");
    let resp = client
        .delete(format!(
            "{}/threads/{}/comments/{}",
            base_url, thread_id, comment_id
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    expect_status(resp, 200).await?;

    println!("\n[4/4] Fetching thread...");
    let resp = client
        .get(format!("{}/threads/{}", base_url, thread_id))
        .send()
        .await?;
    let body = expect_status(resp, 200).await?;
    let empty = Vec::new();
    let comments = body["data"]["thread"]["comments"]
        .as_array()
        .unwrap_or(&empty);
    println!("   -> Retrieved {} comment(s):", comments.len());
    for c in comments {
        println!("      - [{}] {}: {}", c["date"], c["username"], c["content"]);
    }

    Ok(())
}

async fn expect_status(resp: reqwest::Response, expected: u16) -> anyhow::Result<Value> {
    let status = resp.status();
    let body: Value = resp.json().await.unwrap_or(Value::Null);
    if status.as_u16() != expected {
        bail!("Expected {} but got {}: {}", expected, status, body);
    }
    Ok(body)
}
