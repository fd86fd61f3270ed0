use std::time::Duration;

use deals_core::{DealRecord, PageRequest};
use deals_logging::{deals_debug, deals_info};
use futures_util::StreamExt;
use url::Url;

use crate::payload::decode_deals;
use crate::{DealsConfig, EngineEvent, FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Receives engine events; implementations must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Retrieves one page of deals from somewhere.
#[async_trait::async_trait]
pub trait DealSource: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<DealRecord>, FetchError>;
}

/// Reads pages from `GET {base_url}/deals?page=..&size=..`.
#[derive(Debug, Clone)]
pub struct ReqwestDealSource {
    config: DealsConfig,
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestDealSource {
    pub fn new(config: DealsConfig, settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            config,
            settings,
            client,
        })
    }

    pub fn page_url(&self, request: PageRequest) -> Result<Url, FetchError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "backend url cannot be a base"))?
            .pop_if_empty()
            .push("deals");
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &request.page().to_string())
            .append_pair("size", &request.size().to_string());
        Ok(url)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl DealSource for ReqwestDealSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<DealRecord>, FetchError> {
        let url = self.page_url(request)?;
        deals_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let deals = decode_deals(&bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))?;
        deals_info!(
            "Loaded {} deals (page {}, size {})",
            deals.len(),
            request.page(),
            request.size()
        );
        Ok(deals)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
