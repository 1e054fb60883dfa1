//! Gemini `generateContent` client for logo generation.

use crate::credentials::CredentialHost;
use crate::error::{Error, Result};
use crate::types::{GeneratedLogo, LogoModel};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Instructional framing added around every user prompt before it is sent
/// upstream. The stored [`GeneratedLogo`] keeps the original prompt.
fn augment_prompt(prompt: &str) -> String {
    format!(
        "Design a professional, high-quality logo. {prompt}. \
         Ensure the design is clean, memorable, and suitable for branding."
    )
}

/// Builder for [`LogoClient`].
#[derive(Default)]
pub struct LogoClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    credential_host: Option<Box<dyn CredentialHost>>,
}

impl LogoClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to the `GEMINI_API_KEY` env var.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the API endpoint. Defaults to the public Gemini endpoint;
    /// tests point this at a local mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Attaches the host's credential-selection capability. Consulted only
    /// for the premium tier; without a host the pre-flight is skipped.
    pub fn credential_host(mut self, host: impl CredentialHost + 'static) -> Self {
        self.credential_host = Some(Box::new(host));
        self
    }

    /// Builds the client, resolving the API key.
    pub fn build(self) -> Result<LogoClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| Error::Auth("GEMINI_API_KEY not set and no API key provided".into()))?;

        Ok(LogoClient {
            http: reqwest::Client::new(),
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            credential_host: self.credential_host,
        })
    }
}

/// Client for generating logos through the Gemini image models.
pub struct LogoClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    credential_host: Option<Box<dyn CredentialHost>>,
}

impl LogoClient {
    /// Creates a new [`LogoClientBuilder`].
    pub fn builder() -> LogoClientBuilder {
        LogoClientBuilder::new()
    }

    /// Generates a logo for the given prompt.
    ///
    /// Sends one awaited request; there is no retry and no cancellation.
    /// On success the returned [`GeneratedLogo`] carries the original
    /// prompt and a `data:` URI built from the first inline-data part of
    /// the response.
    pub async fn generate(&self, prompt: &str, model: LogoModel) -> Result<GeneratedLogo> {
        self.ensure_credential(model).await;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            model.as_str()
        );
        let body = GeminiRequest::new(&augment_prompt(prompt));

        tracing::debug!(model = model.as_str(), "requesting logo generation");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "generation request failed");
            return Err(match status.as_u16() {
                401 | 403 => Error::Auth(message),
                s => Error::Api { status: s, message },
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let image = extract_inline_image(&parsed).ok_or(Error::NoImageData)?;

        Ok(GeneratedLogo {
            id: Uuid::new_v4().to_string(),
            image_url: image.to_data_uri(),
            prompt: prompt.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            model: model.as_str().to_string(),
        })
    }

    /// Pre-flight for the premium tier: when the host exposes credential
    /// selection and none is selected, open the dialog and proceed
    /// optimistically afterward.
    async fn ensure_credential(&self, model: LogoModel) {
        if !model.is_premium() {
            return;
        }
        let Some(host) = &self.credential_host else {
            return;
        };
        if !host.has_credential().await {
            tracing::debug!("no credential selected, opening selection dialog");
            host.request_credential().await;
        }
    }
}

// Request/Response wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: &'static str,
}

impl GeminiRequest {
    fn new(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE"],
                // Logos are always requested square.
                image_config: ImageConfig { aspect_ratio: "1:1" },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

impl InlineData {
    fn to_data_uri(&self) -> String {
        let mime = match self.mime_type.as_deref() {
            Some(mime) if !mime.is_empty() => mime,
            _ => "image/png",
        };
        format!("data:{};base64,{}", mime, self.data)
    }
}

/// Scans the first candidate's parts in order and returns the first one
/// carrying a non-empty inline image payload. Later image parts are ignored.
fn extract_inline_image(response: &GeminiResponse) -> Option<&InlineData> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| {
            part.inline_data
                .as_ref()
                .filter(|inline| !inline.data.is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GeminiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_augment_prompt_wraps_original() {
        let augmented = augment_prompt("A fox head");
        assert!(augmented.starts_with("Design a professional, high-quality logo. "));
        assert!(augmented.contains("A fox head"));
        assert!(augmented.ends_with("suitable for branding."));
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = GeminiRequest::new("A fox head");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "A fox head");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
        assert_eq!(json["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        // camelCase on the wire, never snake_case
        assert!(json.get("generation_config").is_none());
    }

    #[test]
    fn test_extract_first_inline_part_wins() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "Here is your logo"},
                            {"inlineData": {"mimeType": "image/png", "data": "Rk9P"}},
                            {"inlineData": {"mimeType": "image/jpeg", "data": "QkFS"}}
                        ]
                    }
                }]
            }"#,
        );
        let image = extract_inline_image(&response).unwrap();
        assert_eq!(image.data, "Rk9P");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,Rk9P");
    }

    #[test]
    fn test_extract_defaults_missing_mime_to_png() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"data": "QUFBQQ=="}}]}}]}"#,
        );
        let image = extract_inline_image(&response).unwrap();
        assert_eq!(image.to_data_uri(), "data:image/png;base64,QUFBQQ==");
    }

    #[test]
    fn test_extract_treats_empty_mime_as_png() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "", "data": "QQ=="}}]}}]}"#,
        );
        let image = extract_inline_image(&response).unwrap();
        assert_eq!(image.to_data_uri(), "data:image/png;base64,QQ==");
    }

    #[test]
    fn test_extract_none_when_no_inline_parts() {
        let response = parse(r#"{"candidates": [{"content": {"parts": [{"text": "sorry"}]}}]}"#);
        assert!(extract_inline_image(&response).is_none());
    }

    #[test]
    fn test_extract_none_when_no_candidates() {
        assert!(extract_inline_image(&parse(r#"{}"#)).is_none());
        assert!(extract_inline_image(&parse(r#"{"candidates": []}"#)).is_none());
    }

    #[test]
    fn test_extract_skips_empty_payload() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"inlineData": {"mimeType": "image/png", "data": ""}},
                            {"inlineData": {"mimeType": "image/webp", "data": "V0VCUA=="}}
                        ]
                    }
                }]
            }"#,
        );
        // An inline part with an empty payload never produces a logo.
        let image = extract_inline_image(&response).unwrap();
        assert_eq!(image.to_data_uri(), "data:image/webp;base64,V0VCUA==");
    }

    #[test]
    fn test_builder_with_explicit_key() {
        let client = LogoClient::builder().api_key("test-key").build();
        assert!(client.is_ok());
    }
}
