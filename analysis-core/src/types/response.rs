use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful reply from `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Pre-formatted report, shown verbatim
    #[serde(default)]
    pub console_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

/// Machine-readable side of the analysis.
///
/// Only loosely typed: the server owns this shape, so every member is
/// optional and unknown members are carried through in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_verdict: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StructuredData {
    /// Typed view of `targets`, if it has the usual four-level shape.
    pub fn price_targets(&self) -> Option<PriceTargets> {
        let targets = self.targets.as_ref()?;
        serde_json::from_value(targets.clone()).ok()
    }
}

/// Target levels the server derives from ATR and support/resistance
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTargets {
    pub conservative: Option<f64>,
    pub moderate: Option<f64>,
    pub aggressive: Option<f64>,
    pub stop_loss: Option<f64>,
}

impl PriceTargets {
    pub fn is_empty(&self) -> bool {
        self.conservative.is_none()
            && self.moderate.is_none()
            && self.aggressive.is_none()
            && self.stop_loss.is_none()
    }
}

/// Failure body, `{"error": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_console_only() {
        let resp: AnalysisResponse = serde_json::from_str(r#"{"console_output": "OK"}"#).unwrap();
        assert_eq!(resp.console_output, "OK");
        assert!(resp.structured_data.is_none());
    }

    #[test]
    fn test_parse_structured_targets() {
        let resp: AnalysisResponse = serde_json::from_value(json!({
            "console_output": "report",
            "structured_data": {
                "price": 68500.5,
                "targets": {
                    "conservative": 69000.0,
                    "moderate": 69500.0,
                    "aggressive": 71000.0,
                    "stop_loss": 67000.0
                },
                "indicators": {"RSI": {"verdict": "yes", "explanation": "RSI: 28"}},
                "final_verdict": {"yes_count": 7},
                "schema": 2
            }
        }))
        .unwrap();

        let data = resp.structured_data.unwrap();
        assert_eq!(data.price, Some(68500.5));
        assert_eq!(data.extra.get("schema"), Some(&json!(2)));

        let targets = data.price_targets().unwrap();
        assert_eq!(targets.moderate, Some(69500.0));
        assert_eq!(targets.stop_loss, Some(67000.0));
    }

    #[test]
    fn test_unusual_targets_stay_raw() {
        let data: StructuredData = serde_json::from_value(json!({"targets": [1, 2, 3]})).unwrap();
        assert!(data.price_targets().is_none());
        assert_eq!(data.targets, Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("rate limited"));
        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }
}
