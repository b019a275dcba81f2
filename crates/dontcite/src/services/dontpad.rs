//! Dontpad page store client
//!
//! Talks to the two endpoints the Dontpad web editor uses:
//! `GET <path>.body.json?lastModified=0` to read and a form `POST <path>`
//! to replace the body.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{CiteError, PagePath, RemotePage, WriteAck};
use crate::ports::{Clock, PageStore, SystemClock};

pub const DEFAULT_BASE_URL: &str = "http://api.dontpad.com";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// reqwest-backed [`PageStore`] for Dontpad
#[derive(Clone)]
pub struct DontpadClient {
    client: Client,
    base_url: String,
    clock: Arc<dyn Clock>,
}

impl DontpadClient {
    /// Client for the public Dontpad API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for another Dontpad-compatible host
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Overrides the clock that stamps `lastModified` on writes.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn read_url(&self, path: &PagePath) -> String {
        format!("{}/{}.body.json", self.base_url, path.url_path())
    }

    fn write_url(&self, path: &PagePath) -> String {
        format!("{}/{}", self.base_url, path.url_path())
    }
}

impl Default for DontpadClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageStore for DontpadClient {
    async fn fetch_page(&self, path: &PagePath) -> Result<RemotePage, CiteError> {
        let url = self.read_url(path);
        debug!(path = %path, url = %url, "Fetching Dontpad page");

        let response = self
            .client
            .get(&url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .query(&[("lastModified", "0")])
            .send()
            .await
            .map_err(|err| CiteError::Transport(err.to_string()))?;

        check_status(response.status(), path, "fetch")?;

        let envelope: PageEnvelope = response
            .json()
            .await
            .map_err(|err| CiteError::InvalidResponse(err.to_string()))?;

        let page = RemotePage {
            path: path.clone(),
            body: envelope.body.unwrap_or_default(),
            last_modified: envelope.last_modified.as_ref().and_then(Value::as_i64),
        };

        debug!(
            path = %path,
            body_len = page.body.len(),
            last_modified = ?page.last_modified,
            "Fetched Dontpad page"
        );

        Ok(page)
    }

    async fn write_body(&self, path: &PagePath, text: &str) -> Result<WriteAck, CiteError> {
        let url = self.write_url(path);
        let last_modified = self.clock.now_millis().to_string();
        debug!(path = %path, url = %url, text_len = text.len(), "Writing Dontpad page");

        let response = self
            .client
            .post(&url)
            .form(&[
                ("text", text),
                ("lastModified", last_modified.as_str()),
                ("force", "false"),
            ])
            .send()
            .await
            .map_err(|err| CiteError::Transport(err.to_string()))?;

        check_status(response.status(), path, "write")?;

        let body = response
            .text()
            .await
            .map_err(|err| CiteError::InvalidResponse(err.to_string()))?;

        let raw = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)
                .map_err(|err| CiteError::InvalidResponse(err.to_string()))?
        };

        let ack = WriteAck::from_response(raw);
        debug!(path = %path, last_modified = ?ack.last_modified, "Dontpad write acknowledged");

        Ok(ack)
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    body: Option<String>,
    #[serde(rename = "lastModified", default)]
    last_modified: Option<Value>,
}

// ============================================
// Helper Functions
// ============================================

fn check_status(status: StatusCode, path: &PagePath, op: &str) -> Result<(), CiteError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        warn!(path = %path, op = op, "Dontpad rate limit hit");
        return Err(CiteError::RateLimited);
    }

    if !status.is_success() {
        warn!(path = %path, op = op, status = status.as_u16(), "Dontpad returned an error");
        return Err(CiteError::remote(status.as_u16()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::NaiveDate;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> DontpadClient {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), 1234);
        DontpadClient::with_base_url(&server.url()).with_clock(Arc::new(clock))
    }

    fn path(raw: &str) -> PagePath {
        PagePath::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/myPage.body.json")
            .match_query(Matcher::UrlEncoded("lastModified".into(), "0".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"body": "old", "lastModified": 99}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client.fetch_page(&path("myPage")).await.unwrap();

        assert_eq!(page.body, "old");
        assert_eq!(page.last_modified, Some(99));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_new_page_has_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/fresh.body.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"body": null}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.fetch_body(&path("fresh")).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_fetch_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/myPage.body.json")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.fetch_body(&path("myPage")).await.unwrap_err();
        assert_eq!(err, CiteError::RateLimited);
    }

    #[tokio::test]
    async fn test_fetch_remote_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/myPage.body.json")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.fetch_body(&path("myPage")).await.unwrap_err();
        assert_eq!(err, CiteError::remote(503));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/myPage.body.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.fetch_body(&path("myPage")).await.unwrap_err();
        assert!(matches!(err, CiteError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_encodes_nested_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                Matcher::Regex(r"^/notas/leitura(%20| )semanal\.body\.json$".to_string()),
            )
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"body": "x"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .fetch_body(&path("/notas/leitura semanal/"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_write_sends_form_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/myPage")
            .match_header("content-type", FORM_CONTENT_TYPE)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("text".into(), "old\n\n-\"new\".".into()),
                Matcher::UrlEncoded("lastModified".into(), "1234".into()),
                Matcher::UrlEncoded("force".into(), "false".into()),
            ]))
            .with_status(200)
            .with_body("1234")
            .create_async()
            .await;

        let client = client_for(&server);
        let ack = client
            .write_body(&path("myPage"), "old\n\n-\"new\".")
            .await
            .unwrap();

        assert_eq!(ack.last_modified, Some(1234));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_write_empty_response_is_ok() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/myPage")
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server);
        let ack = client.write_body(&path("myPage"), "text").await.unwrap();
        assert_eq!(ack.last_modified, None);
        assert_eq!(ack.raw, Value::Null);
    }

    #[tokio::test]
    async fn test_write_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/myPage")
            .with_status(429)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.write_body(&path("myPage"), "text").await.unwrap_err();
        assert_eq!(err, CiteError::RateLimited);
    }

    #[tokio::test]
    async fn test_write_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/myPage")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.write_body(&path("myPage"), "text").await.unwrap_err();
        assert_eq!(err, CiteError::remote(500));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = DontpadClient::with_base_url("http://127.0.0.1:1");
        let err = client.fetch_body(&path("myPage")).await.unwrap_err();
        assert!(matches!(err, CiteError::Transport(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DontpadClient::with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.read_url(&path("a/b")),
            "http://localhost:8080/a/b.body.json"
        );
        assert_eq!(client.write_url(&path("a/b")), "http://localhost:8080/a/b");
    }
}
