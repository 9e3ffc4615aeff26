use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::timeframe::{split_timeframe, TimeUnit, Timeframe};

/// Market the pair trades on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Spot,
    Futures,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Spot => "spot",
            MarketType::Futures => "futures",
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spot" => Ok(MarketType::Spot),
            "futures" => Ok(MarketType::Futures),
            other => Err(CoreError::UnknownMarketType(other.to_string())),
        }
    }
}

/// Position direction being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Long,
    Short,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Long => "long",
            TradeType::Short => "short",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(TradeType::Long),
            "short" => Ok(TradeType::Short),
            other => Err(CoreError::UnknownTradeType(other.to_string())),
        }
    }
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub market_type: MarketType,
    pub symbol: String,
    pub trade_type: TradeType,
    pub time_unit: TimeUnit,
    pub time_value: String,
}

impl AnalysisRequest {
    pub fn new(
        market_type: MarketType,
        symbol: impl Into<String>,
        trade_type: TradeType,
        timeframe: Timeframe,
    ) -> Self {
        Self::from_token(market_type, symbol, trade_type, timeframe.as_str())
    }

    /// Build a request from a raw timeframe token without checking it
    /// against the known set.
    pub fn from_token(
        market_type: MarketType,
        symbol: impl Into<String>,
        trade_type: TradeType,
        timeframe: &str,
    ) -> Self {
        let (time_value, time_unit) = split_timeframe(timeframe);
        Self {
            market_type,
            symbol: symbol.into(),
            trade_type,
            time_unit,
            time_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let req = AnalysisRequest::new(
            MarketType::Futures,
            "BTCUSDT",
            TradeType::Long,
            Timeframe::Min15,
        );
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "market_type": "futures",
                "symbol": "BTCUSDT",
                "trade_type": "long",
                "time_unit": "minutes",
                "time_value": "15"
            })
        );
    }

    #[test]
    fn test_request_from_raw_token() {
        let req = AnalysisRequest::from_token(MarketType::Spot, "ETHUSDT", TradeType::Short, "4h");
        assert_eq!(req.time_value, "4");
        assert_eq!(req.time_unit, TimeUnit::Hours);
    }

    #[test]
    fn test_market_and_trade_parsing() {
        assert_eq!("Futures".parse::<MarketType>().unwrap(), MarketType::Futures);
        assert_eq!(" spot ".parse::<MarketType>().unwrap(), MarketType::Spot);
        assert!("margin".parse::<MarketType>().is_err());
        assert_eq!("SHORT".parse::<TradeType>().unwrap(), TradeType::Short);
        assert!("hedge".parse::<TradeType>().is_err());
    }
}
