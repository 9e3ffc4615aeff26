use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Chart interval used when a token is not in the table (one hour).
pub const DEFAULT_CHART_INTERVAL: &str = "60";

/// Map an application timeframe token to the charting widget's interval
/// vocabulary.
///
/// Total over all strings: anything outside the known token set maps to
/// [`DEFAULT_CHART_INTERVAL`].
pub fn chart_interval(token: &str) -> &'static str {
    match token {
        "1m" => "1",
        "3m" => "3",
        "5m" => "5",
        "15m" => "15",
        "30m" => "30",
        "1h" => "60",
        "2h" => "120",
        "4h" => "240",
        "6h" => "360",
        "8h" => "480",
        "12h" => "720",
        "1d" => "D",
        "3d" => "3D",
        "1w" => "W",
        "1M" => "M",
        _ => DEFAULT_CHART_INTERVAL,
    }
}

/// Unit word the analysis service expects next to `time_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a timeframe token into its numeric part and unit word.
///
/// The unit comes from the trailing character only: `m` is minutes, `h` is
/// hours and anything else is days. Matching is case-sensitive, so `1M`
/// (one month) and `1w` both come back as `("1", Days)`.
pub fn split_timeframe(token: &str) -> (String, TimeUnit) {
    let mut chars = token.chars();
    let unit = match chars.next_back() {
        Some('m') => TimeUnit::Minutes,
        Some('h') => TimeUnit::Hours,
        _ => TimeUnit::Days,
    };
    (chars.as_str().to_string(), unit)
}

/// How the analysis server groups its supported timeframes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeframeCategory {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

impl TimeframeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TimeframeCategory::Minutes => "minutes",
            TimeframeCategory::Hours => "hours",
            TimeframeCategory::Days => "days",
            TimeframeCategory::Weeks => "weeks",
            TimeframeCategory::Months => "months",
        }
    }
}

/// Candle interval selectable in the analysis form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Min1,
    Min3,
    Min5,
    Min15,
    Min30,
    Hour1,
    Hour2,
    Hour4,
    Hour6,
    Hour8,
    Hour12,
    Day1,
    Day3,
    Week1,
    Month1,
}

impl Timeframe {
    /// All timeframes, shortest first.
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Min1,
            Timeframe::Min3,
            Timeframe::Min5,
            Timeframe::Min15,
            Timeframe::Min30,
            Timeframe::Hour1,
            Timeframe::Hour2,
            Timeframe::Hour4,
            Timeframe::Hour6,
            Timeframe::Hour8,
            Timeframe::Hour12,
            Timeframe::Day1,
            Timeframe::Day3,
            Timeframe::Week1,
            Timeframe::Month1,
        ]
    }

    /// The application token, e.g. `"4h"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Min1 => "1m",
            Timeframe::Min3 => "3m",
            Timeframe::Min5 => "5m",
            Timeframe::Min15 => "15m",
            Timeframe::Min30 => "30m",
            Timeframe::Hour1 => "1h",
            Timeframe::Hour2 => "2h",
            Timeframe::Hour4 => "4h",
            Timeframe::Hour6 => "6h",
            Timeframe::Hour8 => "8h",
            Timeframe::Hour12 => "12h",
            Timeframe::Day1 => "1d",
            Timeframe::Day3 => "3d",
            Timeframe::Week1 => "1w",
            Timeframe::Month1 => "1M",
        }
    }

    pub fn chart_interval(&self) -> &'static str {
        chart_interval(self.as_str())
    }

    pub fn split(&self) -> (String, TimeUnit) {
        split_timeframe(self.as_str())
    }

    pub fn category(&self) -> TimeframeCategory {
        match self {
            Timeframe::Min1
            | Timeframe::Min3
            | Timeframe::Min5
            | Timeframe::Min15
            | Timeframe::Min30 => TimeframeCategory::Minutes,
            Timeframe::Hour1
            | Timeframe::Hour2
            | Timeframe::Hour4
            | Timeframe::Hour6
            | Timeframe::Hour8
            | Timeframe::Hour12 => TimeframeCategory::Hours,
            Timeframe::Day1 | Timeframe::Day3 => TimeframeCategory::Days,
            Timeframe::Week1 => TimeframeCategory::Weeks,
            Timeframe::Month1 => TimeframeCategory::Months,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::all()
            .iter()
            .copied()
            .find(|tf| tf.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTimeframe(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_interval_table() {
        let expected = [
            ("1m", "1"),
            ("3m", "3"),
            ("5m", "5"),
            ("15m", "15"),
            ("30m", "30"),
            ("1h", "60"),
            ("2h", "120"),
            ("4h", "240"),
            ("6h", "360"),
            ("8h", "480"),
            ("12h", "720"),
            ("1d", "D"),
            ("3d", "3D"),
            ("1w", "W"),
            ("1M", "M"),
        ];
        for (token, interval) in expected {
            assert_eq!(chart_interval(token), interval, "token {}", token);
        }
    }

    #[test]
    fn test_chart_interval_fallback() {
        for token in ["", "2m", "1H", "1mo", "45m", "weekly", " 1h"] {
            assert_eq!(chart_interval(token), DEFAULT_CHART_INTERVAL);
        }
    }

    #[test]
    fn test_split_timeframe() {
        assert_eq!(split_timeframe("15m"), ("15".to_string(), TimeUnit::Minutes));
        assert_eq!(split_timeframe("4h"), ("4".to_string(), TimeUnit::Hours));
        assert_eq!(split_timeframe("3d"), ("3".to_string(), TimeUnit::Days));
        assert_eq!(split_timeframe("12h"), ("12".to_string(), TimeUnit::Hours));
    }

    #[test]
    fn test_split_week_and_month_fall_into_days() {
        assert_eq!(split_timeframe("1w"), ("1".to_string(), TimeUnit::Days));
        assert_eq!(split_timeframe("1M"), ("1".to_string(), TimeUnit::Days));
    }

    #[test]
    fn test_split_empty_token() {
        assert_eq!(split_timeframe(""), (String::new(), TimeUnit::Days));
    }

    #[test]
    fn test_parse_round_trips_every_token() {
        for tf in Timeframe::all() {
            let parsed: Timeframe = tf.as_str().parse().unwrap();
            assert_eq!(parsed, *tf);
            assert_eq!(parsed.chart_interval(), chart_interval(tf.as_str()));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "2w".parse::<Timeframe>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownTimeframe(ref t) if t == "2w"));
        // case matters: 1m is a minute, 1M is a month
        assert_eq!("1M".parse::<Timeframe>().unwrap(), Timeframe::Month1);
        assert!("1H".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_categories() {
        assert_eq!(Timeframe::Min30.category(), TimeframeCategory::Minutes);
        assert_eq!(Timeframe::Hour12.category(), TimeframeCategory::Hours);
        assert_eq!(Timeframe::Day3.category(), TimeframeCategory::Days);
        assert_eq!(Timeframe::Week1.category(), TimeframeCategory::Weeks);
        assert_eq!(Timeframe::Month1.category(), TimeframeCategory::Months);
    }

    #[test]
    fn test_time_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TimeUnit::Hours).unwrap(), "\"hours\"");
    }
}
