//! AI-assist payloads
//!
//! Prompt construction and the request/response shapes of the text-generation
//! endpoint (`generateContent`). The HTTP call itself lives in the client.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::t_args;

/// Role attached to the single user turn
const USER_ROLE: &str = "user";

/// Error from an AI-assist call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    /// Endpoint answered with a non-success status
    Status(String),
    /// Endpoint answered but produced no text
    NoContent,
    /// Request could not be sent or the response could not be read
    Transport(String),
    /// Response body was not valid JSON for the expected shape
    Decode(String),
}

impl fmt::Display for AssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "API error: {status}"),
            Self::NoContent => f.write_str("No content received from API."),
            Self::Transport(msg) | Self::Decode(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AssistError {}

/// One part of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A message turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn chat payload carrying one user prompt
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some(USER_ROLE.to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

/// One generated candidate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response body; every field is optional on the wire
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::NoContent`] when there is no candidate, no part
    /// or only empty text.
    pub fn into_text(self) -> Result<String, AssistError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(AssistError::NoContent)
    }
}

/// Decode a successful response body into generated text
///
/// # Errors
///
/// Returns [`AssistError::Decode`] for malformed JSON and
/// [`AssistError::NoContent`] when the body carries no text.
pub fn parse_response(body: &str) -> Result<String, AssistError> {
    serde_json::from_str::<GenerateContentResponse>(body)
        .map_err(|e| AssistError::Decode(e.to_string()))?
        .into_text()
}

/// Prompt asking for a job description for `title`
pub fn vacancy_description_prompt(title: &str) -> String {
    t_args("assist-vacancy-prompt", &[("title", title.trim())])
}

/// Prepare generated text for a plain text field
///
/// Markdown emphasis markers become bullets.
pub fn format_generated_text(text: &str) -> String {
    text.replace('*', "•")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_turn_payload() {
        let request = GenerateContentRequest::single_turn("Hola");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Hola" }] }]
            })
        );
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Descripción" }] } }
            ]
        }"#;
        assert_eq!(parse_response(body), Ok("Descripción".to_string()));
    }

    #[test]
    fn test_parse_without_candidates() {
        assert_eq!(parse_response("{}"), Err(AssistError::NoContent));
        assert_eq!(
            parse_response(r#"{"candidates": []}"#),
            Err(AssistError::NoContent)
        );
    }

    #[test]
    fn test_parse_candidate_without_parts() {
        let body = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        assert_eq!(parse_response(body), Err(AssistError::NoContent));
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert_eq!(parse_response(body), Err(AssistError::NoContent));
        let body = r#"{"candidates": [{"content": {"parts": [{"text": ""}]}}]}"#;
        assert_eq!(parse_response(body), Err(AssistError::NoContent));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            parse_response("<html>"),
            Err(AssistError::Decode(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AssistError::Status("Bad Request".to_string()).to_string(),
            "API error: Bad Request"
        );
        assert_eq!(
            AssistError::NoContent.to_string(),
            "No content received from API."
        );
    }

    #[test]
    fn test_prompt_mentions_title() {
        let prompt = vacancy_description_prompt("  Analista de Nómina ");
        assert!(prompt.contains("\"Analista de Nómina\""));
        assert!(prompt.starts_with("Actúa como un experto en RRHH."));
    }

    #[test]
    fn test_format_generated_text() {
        assert_eq!(
            format_generated_text("**Requisitos**\n* Inglés"),
            "••Requisitos••\n• Inglés"
        );
    }
}
