/// HTTP plumbing for the reply backend

use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{ApiConfig, Endpoint};
use crate::models::{
    ErrorBody, FetchRequest, ReplyRequest, ReplyResult, SearchRequest, SearchResult, ThreadResult,
};

/// Failures of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("invalid endpoint URL: {0}")]
    Config(#[from] url::ParseError),
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Parse(String),
    /// Message reported by the backend itself, shown verbatim
    #[error("{0}")]
    Backend(String),
}

/// The three calls the view controller needs from the server
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn search_keyword(&self, request: &SearchRequest) -> Result<SearchResult, ClientError>;
    async fn fetch_by_url(&self, request: &FetchRequest) -> Result<ThreadResult, ClientError>;
    async fn generate_reply(&self, request: &ReplyRequest) -> Result<ReplyResult, ClientError>;
}

/// Decode a response body, turning non-2xx statuses into `ClientError::Backend`
pub fn decode_response<T: DeserializeOwned>(
    ok: bool,
    body: &str,
    fallback: &str,
) -> Result<T, ClientError> {
    if ok {
        return serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    Err(ClientError::Backend(message))
}

/// `Backend` over `fetch`, talking JSON to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        HttpBackend { config }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let url = self.config.endpoint(endpoint)?;
        log::debug!("POST {}", url);

        let response = Request::post(url.as_str())
            .json(body)
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.ok() {
            log::warn!("{} answered {}", url, response.status());
        }

        decode_response(response.ok(), &text, fallback)
    }
}

impl Backend for HttpBackend {
    async fn search_keyword(&self, request: &SearchRequest) -> Result<SearchResult, ClientError> {
        self.post_json(Endpoint::SearchKeyword, request, "Failed to search Reddit")
            .await
    }

    async fn fetch_by_url(&self, request: &FetchRequest) -> Result<ThreadResult, ClientError> {
        self.post_json(Endpoint::FetchByUrl, request, "Failed to fetch Reddit post")
            .await
    }

    async fn generate_reply(&self, request: &ReplyRequest) -> Result<ReplyResult, ClientError> {
        self.post_json(Endpoint::GenerateReply, request, "Failed to generate reply")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let result: ThreadResult = decode_response(
            true,
            r#"{"success": true, "post": {"title": "Hello", "score": 3}}"#,
            "fallback",
        )
        .unwrap();

        assert_eq!(result.post.title, "Hello");
        assert_eq!(result.post.score, 3);
    }

    #[test]
    fn test_decode_backend_error_is_verbatim() {
        let err = decode_response::<SearchResult>(
            false,
            r#"{"error": "No posts found for keyword: zzz"}"#,
            "Failed to search Reddit",
        )
        .unwrap_err();

        assert_eq!(err, ClientError::Backend("No posts found for keyword: zzz".to_string()));
        assert_eq!(err.to_string(), "No posts found for keyword: zzz");
    }

    #[test]
    fn test_decode_error_without_message_uses_fallback() {
        for body in ["{}", r#"{"error": null}"#, r#"{"error": ""}"#, "<html>502</html>", ""] {
            let err = decode_response::<SearchResult>(false, body, "Failed to search Reddit")
                .unwrap_err();
            assert_eq!(err, ClientError::Backend("Failed to search Reddit".to_string()));
        }
    }

    #[test]
    fn test_decode_reply_with_null_analysis() {
        let result: ReplyResult = decode_response(
            true,
            r#"{"reply": "Hi", "sentiment": null, "emotion": null}"#,
            "fallback",
        )
        .unwrap();

        assert_eq!(result.reply, "Hi");
        assert_eq!(result.sentiment.score, 0.0);

        let thread: ThreadResult =
            decode_response(true, r#"{"post": {"title": "x", "comments": null}}"#, "fallback")
                .unwrap();
        assert!(thread.post.comments.is_empty());
    }

    #[test]
    fn test_decode_malformed_success_is_parse_error() {
        let err = decode_response::<ReplyResult>(true, "not json", "fallback").unwrap_err();

        assert!(matches!(err, ClientError::Parse(_)));
        assert!(err.to_string().starts_with("unexpected response: "));
    }
}
