//! Chart widget configuration.
//!
//! The widget itself is external; this builds the option object it is
//! constructed with, in the shape the TradingView embed expects.

use serde::{Deserialize, Serialize};

use crate::types::{chart_interval, MarketType};

/// Static settings shared by every chart the client opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub exchange: String,
    pub futures_suffix: String,
    pub container_id: String,
    pub theme: String,
    pub timezone: String,
    pub locale: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            exchange: "BINANCE".to_string(),
            futures_suffix: ".P".to_string(),
            container_id: "tradingview_chart".to_string(),
            theme: "light".to_string(),
            timezone: "Etc/UTC".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl ChartSettings {
    /// `EXCHANGE:SYMBOL`, with the perpetual suffix for futures.
    pub fn chart_symbol(&self, symbol: &str, market_type: MarketType) -> String {
        let suffix = match market_type {
            MarketType::Futures => self.futures_suffix.as_str(),
            MarketType::Spot => "",
        };
        format!("{}:{}{}", self.exchange, symbol, suffix)
    }
}

/// Options passed to the chart widget constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub autosize: bool,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub container_id: String,
    pub height: String,
    pub width: String,
}

impl ChartConfig {
    pub fn new(
        settings: &ChartSettings,
        symbol: &str,
        market_type: MarketType,
        timeframe: &str,
    ) -> Self {
        Self {
            autosize: true,
            symbol: settings.chart_symbol(symbol, market_type),
            interval: chart_interval(timeframe).to_string(),
            timezone: settings.timezone.clone(),
            theme: settings.theme.clone(),
            style: "1".to_string(),
            locale: settings.locale.clone(),
            container_id: settings.container_id.clone(),
            height: "100%".to_string(),
            width: "100%".to_string(),
        }
    }
}
