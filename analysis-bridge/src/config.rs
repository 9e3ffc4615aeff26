use analysis_core::ChartSettings;
use std::time::Duration;

/// Bridge configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Origin of the analysis service, without trailing path
    pub service_url: String,
    /// Optional cap on a single request; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    pub use_system_proxy: bool,
    pub chart: ChartSettings,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:5000".to_string(),
            request_timeout: None,
            use_system_proxy: true,
            chart: ChartSettings::default(),
        }
    }
}

impl BridgeConfig {
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.service_url.trim_end_matches('/'))
    }
}
