use analysis_core::{AnalysisRequest, AnalysisResponse, ErrorBody};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, GENERIC_FAILURE_MESSAGE};

/// Remote side of the bridge: turns one request into one outcome
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, BridgeError>;
}

/// `POST /analyze` over HTTP with a JSON body
pub struct HttpAnalysisService {
    client: Client,
    url: String,
}

impl HttpAnalysisService {
    pub fn new(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| BridgeError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let url = config.analyze_url();
        tracing::info!("Analysis service endpoint: {}", url);

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, BridgeError> {
        tracing::debug!(
            "POST {} symbol={} market={} trade={} time={} {}",
            self.url,
            request.symbol,
            request.market_type,
            request.trade_type,
            request.time_value,
            request.time_unit
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

            tracing::warn!("Analysis request failed with HTTP {}: {}", status.as_u16(), message);
            return Err(BridgeError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnalysisResponse =
            serde_json::from_str(&body).map_err(|e| BridgeError::Decode(e.to_string()))?;

        tracing::debug!(
            "Analysis response received: {} chars of console output, structured_data={}",
            parsed.console_output.len(),
            parsed.structured_data.is_some()
        );

        Ok(parsed)
    }
}
