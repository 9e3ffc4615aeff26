use analysis_core::{AnalysisRequest, MarketType, Timeframe, TradeType};

use crate::error::BridgeError;

/// Raw values as entered in the analysis form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisForm {
    pub coin_pair: String,
    pub market_type: MarketType,
    pub position_type: TradeType,
    pub timeframe: String,
}

/// A validated form, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    pub symbol: String,
    pub market_type: MarketType,
    pub timeframe: Timeframe,
    pub request: AnalysisRequest,
}

impl AnalysisForm {
    pub fn new(
        coin_pair: impl Into<String>,
        market_type: MarketType,
        position_type: TradeType,
        timeframe: impl Into<String>,
    ) -> Self {
        Self {
            coin_pair: coin_pair.into(),
            market_type,
            position_type,
            timeframe: timeframe.into(),
        }
    }

    /// Normalize and validate the form without touching the network.
    pub fn prepare(&self) -> Result<PreparedSubmission, BridgeError> {
        let symbol = self.coin_pair.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(BridgeError::MissingSymbol);
        }

        let timeframe: Timeframe = self
            .timeframe
            .trim()
            .parse()
            .map_err(|_| BridgeError::UnsupportedTimeframe(self.timeframe.clone()))?;

        let request = AnalysisRequest::new(
            self.market_type,
            symbol.clone(),
            self.position_type,
            timeframe,
        );

        Ok(PreparedSubmission {
            symbol,
            market_type: self.market_type,
            timeframe,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::TimeUnit;

    #[test]
    fn test_prepare_uppercases_symbol() {
        let form = AnalysisForm::new(" btcusdt ", MarketType::Futures, TradeType::Long, "4h");
        let prepared = form.prepare().unwrap();
        assert_eq!(prepared.symbol, "BTCUSDT");
        assert_eq!(prepared.request.symbol, "BTCUSDT");
        assert_eq!(prepared.request.time_value, "4");
        assert_eq!(prepared.request.time_unit, TimeUnit::Hours);
        assert_eq!(prepared.timeframe, Timeframe::Hour4);
    }

    #[test]
    fn test_prepare_rejects_empty_symbol() {
        for pair in ["", "   "] {
            let form = AnalysisForm::new(pair, MarketType::Spot, TradeType::Long, "1h");
            assert_eq!(form.prepare().unwrap_err(), BridgeError::MissingSymbol);
        }
    }

    #[test]
    fn test_prepare_rejects_unknown_timeframe() {
        let form = AnalysisForm::new("ETHUSDT", MarketType::Spot, TradeType::Short, "90m");
        assert_eq!(
            form.prepare().unwrap_err(),
            BridgeError::UnsupportedTimeframe("90m".to_string())
        );
    }
}
