use crate::types::mail::SendEmail;
use reqwest::{Client, ClientBuilder};
use std::time::Instant;
use tracing::debug;
use crate::config::config;

pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let mail = &config().mail;

    let payload = serde_json::to_string(&email)
        .map_err(|e| format!("serialize email failed: {e}"))?;

    let client: Client = ClientBuilder::new()
        .user_agent("modulehub/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    // Body may carry one-time codes, log size only
    debug!("mail -> POST {} ({} bytes)", mail.endpoint, payload.len());

    let t0 = Instant::now();
    let res = client
        .post(&mail.endpoint)
        .bearer_auth(&mail.api_key) // do NOT log full key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res.text().await.map_err(|e| format!("read body failed: {e}"))?;

    debug!("mail <- status: {status} in {} ms", dt.as_millis());

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("mail API error: HTTP {status}: {body}"))
    }
}
