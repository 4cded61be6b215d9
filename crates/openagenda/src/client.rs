//! Async client for the OpenAgenda v2 API.
//!
//! One `reqwest::Client` per [`OpenAgendaClient`], and exactly one outbound
//! request per call. No retries, no caching; retry policy belongs to callers.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::query::{build_url, QueryPairs};
use crate::types::{AgendaPage, AgendaQuery, EventQuery};

/// Public OpenAgenda endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openagenda.com/v2";

/// Request timeout applied to every call.
const TIMEOUT_MS: u64 = 30_000;

/// Client for agenda search and event retrieval.
#[derive(Clone)]
pub struct OpenAgendaClient {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl OpenAgendaClient {
    /// Create a client against the public endpoint.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_base_url(key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_base_url(key: impl Into<String>, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(TIMEOUT_MS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.into(),
        }
    }

    /// Search agendas matching `query`.
    pub async fn agendas(&self, query: &AgendaQuery) -> FetchResult<AgendaPage> {
        let mut params = self.keyed_params();
        query.append_to(&mut params);

        let url = build_url(&self.base_url, Some("agendas"), &params)?;
        let value = self.fetch_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// List events belonging to one agenda. The payload is returned opaque.
    pub async fn events(&self, agenda_uid: u64, query: &EventQuery) -> FetchResult<Value> {
        let mut params = self.keyed_params();
        query.append_to(&mut params);

        let suffix = format!("agendas/{agenda_uid}/events");
        let url = build_url(&self.base_url, Some(&suffix), &params)?;
        self.fetch_json(url).await
    }

    /// Perform a single GET against `url` and parse the body as JSON.
    ///
    /// 2xx with a valid JSON body succeeds; anything else maps onto the
    /// [`FetchError`] taxonomy. Exactly one request goes out per call.
    pub async fn fetch_json(&self, url: Url) -> FetchResult<Value> {
        debug!("GET {}", url.path());

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            // The query string carries the API key; keep it out of errors.
            let mut clean = url;
            clean.set_query(None);
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: clean.into(),
            });
        }

        let body = resp.text().await.map_err(FetchError::Transport)?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }

    fn keyed_params(&self) -> QueryPairs {
        let mut params = QueryPairs::new();
        params.push("key", self.key.as_str());
        params
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
