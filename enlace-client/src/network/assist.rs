//! Text-generation client
//!
//! Sends a single-turn prompt to the `generateContent` endpoint and returns
//! the first candidate's text. Every failure (transport, status, decoding,
//! missing content) is folded into [`AssistError`].

use std::time::Duration;

use async_trait::async_trait;

use enlace_common::assist::{AssistError, GenerateContentRequest, parse_response};

use crate::config::settings::AssistSettings;

/// Something that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String, AssistError>;
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from the assist settings
    pub fn from_settings(settings: &AssistSettings) -> Self {
        Self {
            http: build_http_client(settings.request_timeout()),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Endpoint URL without the key query parameter
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.url())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: String) -> Result<String, AssistError> {
        let request = GenerateContentRequest::single_turn(prompt);

        let response = self
            .http
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(AssistError::Status(reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AssistError::Transport(e.to_string()))?;
        parse_response(&body)
    }
}

fn build_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default HTTP client");
        reqwest::Client::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response on a local port
    ///
    /// Returns the endpoint to point the client at and a handle resolving to
    /// the request head that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write");
            stream.shutdown().await.ok();

            let text = String::from_utf8_lossy(&request).to_string();
            text.split("\r\n\r\n").next().unwrap_or_default().to_string()
        });

        (format!("http://{addr}"), handle)
    }

    /// Headers received and the body matches the declared length
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= length
    }

    fn client_for(endpoint: String) -> GeminiClient {
        GeminiClient::from_settings(&AssistSettings {
            endpoint,
            api_key: "test-key".to_string(),
            request_timeout_secs: Some(5),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_error_status_maps_to_reason() {
        let (endpoint, server) = serve_once("503 Service Unavailable", "{}").await;
        let result = client_for(endpoint).generate("Hola".to_string()).await;

        let err = result.expect_err("status error");
        assert_eq!(err, AssistError::Status("Service Unavailable".to_string()));
        assert_eq!(err.to_string(), "API error: Service Unavailable");

        let head = server.await.expect("server task");
        assert!(head.starts_with("POST /models/"));
        assert!(head.contains(":generateContent?key=test-key"));
    }

    #[tokio::test]
    async fn test_success_without_candidates_is_no_content() {
        let (endpoint, server) = serve_once("200 OK", "{}").await;
        let result = client_for(endpoint).generate("Hola".to_string()).await;

        let err = result.expect_err("no content");
        assert_eq!(err, AssistError::NoContent);
        assert_eq!(err.to_string(), "No content received from API.");
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn test_success_returns_candidate_text() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Analista"}]}}]}"#,
        )
        .await;
        let result = client_for(endpoint).generate("Hola".to_string()).await;

        assert_eq!(result, Ok("Analista".to_string()));
        server.await.expect("server task");
    }

    #[test]
    fn test_url_from_settings() {
        let settings = AssistSettings {
            endpoint: "https://example.test/v1beta/".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: "abc".to_string(),
            request_timeout_secs: Some(10),
        };
        let client = GeminiClient::from_settings(&settings);
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let settings = AssistSettings {
            api_key: "very-secret".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", GeminiClient::from_settings(&settings));
        assert!(!debug.contains("very-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let settings = AssistSettings {
            endpoint: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: Some(2),
            ..Default::default()
        };
        let client = GeminiClient::from_settings(&settings);
        let result = client.generate("Hola".to_string()).await;
        assert!(matches!(result, Err(AssistError::Transport(_))));
    }
}
