/// Thin client for the Google Gemini REST API
///
/// Every operation is a single request/response call: build a JSON body,
/// POST it, pull the result out of the response. Callers must treat each
/// call as slow (seconds) and fallible; errors carry a human-readable
/// message that is surfaced inline, with no retry policy.
///
/// Response extraction is split into pure functions over
/// `serde_json::Value` so it can be tested against canned payloads.

use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const TEXT_MODEL: &str = "gemini-2.5-flash";
const IMAGE_MODEL: &str = "imagen-3.0-generate-002";
const IMAGE_EDIT_MODEL: &str = "gemini-2.5-flash-image-preview";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No API key configured. Set GEMINI_API_KEY to enable AI features.")]
    MissingApiKey,
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI service returned an error: {0}")]
    Api(String),
    #[error("AI response was not in the expected format: {0}")]
    Malformed(String),
}

/// A drafted blog post, editable before saving
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DraftPost {
    pub title: String,
    pub content: String,
}

/// A suggested blog topic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostIdea {
    pub title: String,
    pub summary: String,
}

/// AI analysis of an uploaded product photo
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDetails {
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct GenerationGateway {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl GenerationGateway {
    /// Build a gateway from the environment. A missing key does not fail
    /// startup; every call reports it instead.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok();

        if api_key.is_none() {
            eprintln!("⚠️  No GEMINI_API_KEY set; AI features will be unavailable");
        }

        GenerationGateway {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Draft a complete blog post about the given topic.
    pub async fn draft_blog_post(&self, topic: &str) -> Result<DraftPost, GatewayError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": format!(
                "You are the content writer for ANSONSPORTS, a custom sportswear \
                 manufacturer. Write an engaging, well-structured blog post in \
                 markdown about: {topic}. Aim for 400-600 words."
            ) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": { "type": "STRING" }
                    },
                    "required": ["title", "content"]
                }
            }
        });

        let response = self.generate(TEXT_MODEL, body).await?;
        parse_structured_text(&response)
    }

    /// Suggest a blog topic with a short summary.
    pub async fn draft_blog_idea(&self) -> Result<PostIdea, GatewayError> {
        let body = json!({
            "contents": [{ "parts": [{ "text":
                "Suggest one fresh blog post idea for a custom sportswear \
                 manufacturer's resources page. Keep the summary to two sentences."
            }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "summary": { "type": "STRING" }
                    },
                    "required": ["title", "summary"]
                }
            }
        });

        let response = self.generate(TEXT_MODEL, body).await?;
        parse_structured_text(&response)
    }

    /// Generate an image from a text prompt. Returns a ready-to-display
    /// data URI.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": { "sampleCount": 1, "aspectRatio": "1:1" }
        });

        let response = self.call(IMAGE_MODEL, "predict", body).await?;
        predicted_image(&response)
    }

    /// Place an uploaded design onto apparel per the instructions.
    /// Returns a data URI of the edited image.
    pub async fn generate_mockup_from_upload(
        &self,
        base64: &str,
        mime_type: &str,
        instructions: &str,
    ) -> Result<String, GatewayError> {
        let body = json!({
            "contents": [{ "parts": [
                { "inlineData": { "mimeType": mime_type, "data": base64 } },
                { "text": format!(
                    "Create a photorealistic apparel mockup using the attached \
                     design. {instructions}"
                ) }
            ] }]
        });

        let response = self.generate(IMAGE_EDIT_MODEL, body).await?;
        inline_image(&response)
    }

    /// Analyze an uploaded product photo into portfolio details.
    pub async fn describe_product_image(
        &self,
        base64: &str,
        mime_type: &str,
    ) -> Result<ProductDetails, GatewayError> {
        let body = json!({
            "contents": [{ "parts": [
                { "inlineData": { "mimeType": mime_type, "data": base64 } },
                { "text":
                    "This is a product photo from a custom sportswear manufacturer. \
                     Suggest a short product title, the best-fitting category (one of: \
                     Team Uniforms, Sublimation, Gym & Training, Martial Arts, Other), \
                     and a two-sentence marketing description." }
            ] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "category": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["title", "category", "description"]
                }
            }
        });

        let response = self.generate(TEXT_MODEL, body).await?;
        parse_structured_text(&response)
    }

    async fn generate(&self, model: &str, body: Value) -> Result<Value, GatewayError> {
        self.call(model, "generateContent", body).await
    }

    async fn call(&self, model: &str, method: &str, body: Value) -> Result<Value, GatewayError> {
        let api_key = self.api_key.as_ref().ok_or(GatewayError::MissingApiKey)?;
        let url = format!("{API_BASE}/{model}:{method}?key={api_key}");

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api(format!(
                "{status}: {}",
                detail.chars().take(200).collect::<String>()
            )));
        }

        Ok(response.json().await?)
    }
}

/// Pull the first text part out of a generateContent response and parse
/// it as the requested JSON shape.
fn parse_structured_text<T: serde::de::DeserializeOwned>(
    response: &Value,
) -> Result<T, GatewayError> {
    let text = first_parts(response)?
        .iter()
        .find_map(|part| part.get("text").and_then(Value::as_str))
        .ok_or_else(|| GatewayError::Malformed("no text part in response".into()))?;

    serde_json::from_str(text).map_err(|err| GatewayError::Malformed(err.to_string()))
}

/// Pull an inline image out of a generateContent response as a data URI.
fn inline_image(response: &Value) -> Result<String, GatewayError> {
    first_parts(response)?
        .iter()
        .find_map(|part| {
            let inline = part.get("inlineData")?;
            let mime = inline.get("mimeType").and_then(Value::as_str)?;
            let data = inline.get("data").and_then(Value::as_str)?;
            Some(format!("data:{mime};base64,{data}"))
        })
        .ok_or_else(|| GatewayError::Malformed("no image part in response".into()))
}

/// Pull the generated image out of a predict response as a data URI.
fn predicted_image(response: &Value) -> Result<String, GatewayError> {
    let prediction = response
        .get("predictions")
        .and_then(Value::as_array)
        .and_then(|p| p.first())
        .ok_or_else(|| GatewayError::Malformed("no predictions in response".into()))?;

    let data = prediction
        .get("bytesBase64Encoded")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::Malformed("prediction carried no image data".into()))?;
    let mime = prediction
        .get("mimeType")
        .and_then(Value::as_str)
        .unwrap_or("image/jpeg");

    Ok(format!("data:{mime};base64,{data}"))
}

fn first_parts(response: &Value) -> Result<&Vec<Value>, GatewayError> {
    response
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|c| c.pointer("/content/parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| GatewayError::Malformed("response carried no candidates".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_response(text: &str) -> Value {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
    }

    #[test]
    fn test_parses_structured_draft() {
        let response =
            text_response(r##"{"title": "Why Sublimation Lasts", "content": "# Intro"}"##);
        let draft: DraftPost = parse_structured_text(&response).unwrap();
        assert_eq!(draft.title, "Why Sublimation Lasts");
        assert_eq!(draft.content, "# Intro");
    }

    #[test]
    fn test_parses_product_details() {
        let response = text_response(
            r#"{"title": "Falcons Away Kit", "category": "Team Uniforms", "description": "Bold."}"#,
        );
        let details: ProductDetails = parse_structured_text(&response).unwrap();
        assert_eq!(details.category, "Team Uniforms");
    }

    #[test]
    fn test_non_json_text_is_a_malformed_error() {
        let response = text_response("sorry, I can't do that");
        let result: Result<PostIdea, _> = parse_structured_text(&response);
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn test_missing_candidates_is_a_malformed_error() {
        let result: Result<DraftPost, _> = parse_structured_text(&json!({ "candidates": [] }));
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn test_inline_image_becomes_a_data_uri() {
        let response = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "here is your mockup" },
                { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
            ] } }]
        });
        assert_eq!(
            inline_image(&response).unwrap(),
            "data:image/png;base64,QUJD"
        );
    }

    #[test]
    fn test_predicted_image_defaults_to_jpeg() {
        let response = json!({
            "predictions": [{ "bytesBase64Encoded": "QUJD" }]
        });
        assert_eq!(
            predicted_image(&response).unwrap(),
            "data:image/jpeg;base64,QUJD"
        );
    }
}
