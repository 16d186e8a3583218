use reqwest::Client;
use serde_json::Value;

/// Send a prompt through the server's language-model proxy and print the
/// provider's JSON response.
pub async fn run(url: &str, token: &str, prompt: &str) -> anyhow::Result<()> {
    let body = serde_json::json!({
        "messages": [
            { "role": "user", "content": prompt }
        ]
    });

    let response = Client::new()
        .post(format!("{url}/generate"))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("generate failed with {status}: {body}");
    }

    let result: Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
