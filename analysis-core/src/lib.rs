pub mod chart;
pub mod cheatsheet;
pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used items
pub use chart::{ChartConfig, ChartSettings};
pub use error::CoreError;
pub use format::format_price;
pub use types::{
    chart_interval, split_timeframe, AnalysisRequest, AnalysisResponse, ErrorBody, MarketType,
    PriceTargets, StructuredData, TimeUnit, Timeframe, TimeframeCategory, TradeType,
    DEFAULT_CHART_INTERVAL,
};
