//! Reference card for reading the server's indicator verdicts.

/// What each side looks for in one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorRule {
    pub name: &'static str,
    pub long: &'static str,
    pub short: &'static str,
}

/// How many agreeing indicators translate into how much conviction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceLevel {
    pub agreeing: &'static str,
    pub label: &'static str,
}

pub const INDICATOR_RULES: &[IndicatorRule] = &[
    IndicatorRule {
        name: "ADX Trend Strength",
        long: "Trend is strong (ADX > 25) and +DI > -DI",
        short: "Trend is strong but -DI > +DI",
    },
    IndicatorRule {
        name: "EMA Cross",
        long: "Golden cross (EMA50 > EMA200)",
        short: "Death cross (EMA50 < EMA200)",
    },
    IndicatorRule {
        name: "Money Flow",
        long: "Negative flow (smart money leaving)",
        short: "Positive flow (money flooding in)",
    },
    IndicatorRule {
        name: "Market Mood",
        long: "Extreme fear (oversold)",
        short: "Extreme greed (overbought)",
    },
    IndicatorRule {
        name: "Miners' Move",
        long: "Miners holding",
        short: "Miners dumping",
    },
    IndicatorRule {
        name: "MACD",
        long: "MACD line crosses above signal",
        short: "MACD line crosses below signal",
    },
    IndicatorRule {
        name: "Volume Zones",
        long: "Near high volume support",
        short: "In weak resistance territory",
    },
    IndicatorRule {
        name: "RSI",
        long: "RSI < 30 (oversold)",
        short: "RSI > 70 (overbought)",
    },
    IndicatorRule {
        name: "Smart Money",
        long: "Big players buying",
        short: "Whales selling",
    },
    IndicatorRule {
        name: "Whale Watching",
        long: "Whale buys > 1.5x sells",
        short: "Whale sells > 1.5x buys",
    },
    IndicatorRule {
        name: "Stoch RSI",
        long: "StochRSI < 20",
        short: "StochRSI > 80",
    },
    IndicatorRule {
        name: "Support/Resistance",
        long: "Near support",
        short: "Near resistance",
    },
];

pub const CONFIDENCE_LEVELS: &[ConfidenceLevel] = &[
    ConfidenceLevel { agreeing: "9+", label: "Extreme confidence" },
    ConfidenceLevel { agreeing: "7-9", label: "High confidence" },
    ConfidenceLevel { agreeing: "6", label: "Solid" },
    ConfidenceLevel { agreeing: "4-6", label: "Caution" },
    ConfidenceLevel { agreeing: "below 4", label: "Confirm loss" },
];

/// Plain-text rendering of the whole card.
pub fn render_cheatsheet() -> String {
    let mut out = Vec::new();
    out.push("Trading Indicator Rules".to_string());
    out.push("=".repeat(23));
    for rule in INDICATOR_RULES {
        out.push(rule.name.to_string());
        out.push(format!("  LONG:  {}", rule.long));
        out.push(format!("  SHORT: {}", rule.short));
    }
    out.push(String::new());
    out.push("Confidence Levels".to_string());
    out.push("=".repeat(17));
    for level in CONFIDENCE_LEVELS {
        out.push(format!("  {:<8} indicators: {}", level.agreeing, level.label));
    }
    out.join("\n")
}
