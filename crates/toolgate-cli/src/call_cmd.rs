use reqwest::Client;
use serde_json::Value;

/// List the server's tools and print them.
pub async fn list(url: &str, token: &str) -> anyhow::Result<()> {
    let response = rpc(url, token, "tools/list", None).await?;
    print_response(&response)
}

/// Call a tool with JSON arguments and print the result.
pub async fn call(url: &str, token: &str, tool: &str, args: &str) -> anyhow::Result<()> {
    let arguments: Value = serde_json::from_str(args)
        .map_err(|e| anyhow::anyhow!("--args must be a JSON object: {e}"))?;
    if !arguments.is_object() {
        anyhow::bail!("--args must be a JSON object");
    }

    let params = serde_json::json!({ "name": tool, "arguments": arguments });
    let response = rpc(url, token, "tools/call", Some(params)).await?;
    print_response(&response)
}

async fn rpc(url: &str, token: &str, method: &str, params: Option<Value>) -> anyhow::Result<Value> {
    let mut body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": uuid::Uuid::new_v4().to_string(),
        "method": method,
    });
    if let Some(params) = params {
        body["params"] = params;
    }

    let response = Client::new()
        .post(format!("{url}/mcp"))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("server returned {status}: {body}");
    }

    Ok(response.json().await?)
}

fn print_response(response: &Value) -> anyhow::Result<()> {
    if let Some(result) = response.get("result") {
        println!("{}", serde_json::to_string_pretty(result)?);
        Ok(())
    } else if let Some(error) = response.get("error") {
        anyhow::bail!("rpc error: {}", serde_json::to_string_pretty(error)?)
    } else {
        anyhow::bail!("malformed response: {response}")
    }
}
