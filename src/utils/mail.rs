use crate::config::MailConfig;
use crate::types::mail::SendEmail;
use reqwest::{Client, ClientBuilder};
use std::time::Instant;

pub async fn send_email(mail: &MailConfig, email: SendEmail) -> Result<String, String> {
    let payload = serde_json::to_string(&email)
        .map_err(|e| format!("serialize email failed: {e}"))?;

    println!("[mail] -> POST {}", mail.endpoint);

    let client: Client = ClientBuilder::new()
        .user_agent("orgnest/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(&mail.endpoint)
        .bearer_auth(&mail.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res.text().await.map_err(|e| format!("read body failed: {e}"))?;

    println!("[mail] <- status: {status} in {} ms", dt.as_millis());

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("mail API error: HTTP {status}: {body}"))
    }
}
