pub mod request;
pub mod response;
pub mod timeframe;

// Re-export common types
pub use request::{AnalysisRequest, MarketType, TradeType};
pub use response::{AnalysisResponse, ErrorBody, PriceTargets, StructuredData};
pub use timeframe::{
    chart_interval, split_timeframe, TimeUnit, Timeframe, TimeframeCategory,
    DEFAULT_CHART_INTERVAL,
};
