use crate::error::{AppResult, Error};
use super::models::{CalendarEvent, ParseRequest, ParseResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Something that turns free text into calendar events
#[async_trait]
pub trait ParseClient: Send + Sync + 'static {
    /// Send `text` to the parser and return the events it found
    async fn parse_events(&self, text: &str) -> AppResult<Vec<CalendarEvent>>;
}

/// Parse client backed by the external parsing service over HTTP
#[derive(Debug, Clone)]
pub struct HttpParseClient {
    client: Client,
    endpoint: Url,
}

impl HttpParseClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// The endpoint requests are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ParseClient for HttpParseClient {
    async fn parse_events(&self, text: &str) -> AppResult<Vec<CalendarEvent>> {
        debug!("Posting {} characters to {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ParseRequest { text: text.to_string() })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(Error::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;

        Ok(ParseResponse::from_json(&body).events)
    }
}
