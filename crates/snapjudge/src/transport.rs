//! Transport boundary: deliver an [`AnalysisRequest`] and hand back the raw reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use snapjudge_observability::transport_span;
use tokio::time::timeout;
use tracing::{debug, warn, Instrument, Span};

use crate::config::AnalyzerConfig;
use crate::credential::{redact, ApiCredential};
use crate::envelope::RawReplyEnvelope;
use crate::error::{AnalysisError, Result};
use crate::request::AnalysisRequest;

/// Logged error bodies are cut to this many characters.
const MAX_LOGGED_BODY: usize = 2_000;

#[async_trait]
pub trait ReplyTransport: Send + Sync {
    /// Send one request. Non-2xx replies must map to `AnalysisError::InvalidResponse`.
    async fn send(&self, request: &AnalysisRequest) -> Result<RawReplyEnvelope>;
}

/// HTTPS transport to the Responses API. Bearer-authenticated JSON POST.
pub struct HttpTransport {
    url: String,
    api_key: ApiCredential,
    timeout_secs: u64,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            url: config.responses_url(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, request: &AnalysisRequest) -> Result<RawReplyEnvelope> {
        let exchange = async {
            let res = self
                .client
                .post(&self.url)
                .bearer_auth(self.api_key.expose())
                .json(request)
                .send()
                .await?;
            let status = res.status();
            let body = res.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = timeout(Duration::from_secs(self.timeout_secs), exchange)
            .await
            .map_err(|_| AnalysisError::Timeout(self.timeout_secs))??;

        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            let excerpt: String = text.chars().take(MAX_LOGGED_BODY).collect();
            warn!(
                status = status.as_u16(),
                body = %redact(&excerpt),
                "Model endpoint returned an error"
            );
            return Err(AnalysisError::status(status));
        }

        debug!(bytes = body.len(), "Received reply");
        RawReplyEnvelope::from_slice(&body)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[async_trait]
impl ReplyTransport for HttpTransport {
    async fn send(&self, request: &AnalysisRequest) -> Result<RawReplyEnvelope> {
        let span = transport_span!("POST", self.url.as_str());
        self.post(request).instrument(span).await
    }
}
