use std::time::Duration;

use decksmith_core::AiSettings;
use serde::Serialize;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: Parameters,
}

#[derive(Serialize)]
struct Parameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// Send a prompt to the hosted text-generation endpoint and return the raw
/// generated text. The endpoint answers with `{"generated_text": ...}`,
/// sometimes wrapped in a one-element array; both shapes are accepted.
pub async fn generate(
    settings: &AiSettings,
    prompt: &str,
    max_new_tokens: u32,
) -> Result<String, String> {
    let url = format!(
        "{}/{}",
        settings.endpoint.trim_end_matches('/'),
        settings.model
    );

    // The timeout covers the whole request; without it an endpoint that
    // accepts the connection but never answers would hang the caller.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .map_err(|e| format!("client: {e}"))?;
    let mut request = client.post(&url).json(&GenerateRequest {
        inputs: prompt,
        parameters: Parameters {
            max_new_tokens,
            temperature: 0.7,
            return_full_text: false,
        },
    });
    if !settings.api_key.is_empty() {
        request = request.bearer_auth(&settings.api_key);
    }

    let response = request.send().await.map_err(|e| format!("request: {e}"))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("endpoint returned {status}"));
    }

    let body: serde_json::Value = response.json().await.map_err(|e| format!("decode: {e}"))?;
    let text = body
        .pointer("/0/generated_text")
        .or_else(|| body.pointer("/generated_text"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| "response carried no generated_text".to_string())?;

    if text.trim().is_empty() {
        return Err("model returned empty text".to_string());
    }
    Ok(text.to_string())
}
