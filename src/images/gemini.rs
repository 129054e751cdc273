//! Production backend speaking the Gemini `generateContent` REST protocol.
//!
//! One POST per generate call; the response's first candidate supplies the
//! content parts handed back to the resolver. Only transport and decode
//! concerns live here; lifecycle and fallback policy belong to the caller.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::images::{ContentPart, ImageBackend, InlineData, ResolverConfig};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<ResponseInlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    mime_type: String,
    data: String,
}

/// Blocking HTTP backend for the Gemini image model.
pub struct GeminiBackend {
    client: Client,
    generate_url: Url,
}

impl GeminiBackend {
    /// Build a backend from the resolver configuration. Fails on an
    /// unparseable endpoint or an HTTP client that cannot be constructed.
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::Config(format!("Invalid endpoint URL: {}", e)))?;
        let generate_url = endpoint
            .join(&format!(
                "v1beta/models/{}:generateContent",
                config.model
            ))
            .map_err(|e| Error::Config(format!("Invalid model path: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            generate_url,
        })
    }
}

impl ImageBackend for GeminiBackend {
    fn generate(&self, prompt: &str, credential: &str) -> Result<Vec<ContentPart>> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let body = serde_json::to_string(&body)
            .map_err(|e| Error::Backend(format!("Failed to encode request: {}", e)))?;

        let response = self
            .client
            .post(self.generate_url.clone())
            .header("x-goog-api-key", credential)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| Error::Backend(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::Backend(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Backend(format!("HTTP error {}: {}", status, text)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Decode(format!("Invalid JSON response: {}", e)))?;

        let parts = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        Ok(parts
            .into_iter()
            .map(|p| ContentPart {
                text: p.text,
                inline_data: p.inline_data.map(|d| InlineData {
                    mime_type: d.mime_type,
                    data: d.data,
                }),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_builds_generate_url_from_endpoint_and_model() {
        let config = ResolverConfig {
            endpoint: "https://example.test".into(),
            model: "paint-o-matic".into(),
            ..ResolverConfig::default()
        };
        let backend = GeminiBackend::new(&config).unwrap();
        assert_eq!(
            backend.generate_url.as_str(),
            "https://example.test/v1beta/models/paint-o-matic:generateContent"
        );
    }

    #[test]
    fn backend_rejects_invalid_endpoint() {
        let config = ResolverConfig {
            endpoint: "not a url".into(),
            ..ResolverConfig::default()
        };
        assert!(GeminiBackend::new(&config).is_err());
    }

    #[test]
    fn response_parts_deserialize_inline_data() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "caption"},
                        {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                    ]
                }
            }]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let parts = &parsed.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("caption"));
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "QUJD");
    }
}
