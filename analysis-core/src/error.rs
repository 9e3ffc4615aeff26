use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),

    #[error("Unknown market type: {0} (expected spot or futures)")]
    UnknownMarketType(String),

    #[error("Unknown trade type: {0} (expected long or short)")]
    UnknownTradeType(String),
}
