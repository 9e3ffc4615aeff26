use thiserror::Error;

/// Message shown instead of any backend error mentioning `out-of-bounds`
pub const INVALID_PAIR_MESSAGE: &str = "Invalid coin pair. Please check the symbol and try again.";

/// Fallback when the server rejects a request without saying why
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Please enter a coin pair (e.g., BTCUSDT)")]
    MissingSymbol,

    #[error("Unsupported timeframe: {0}")]
    UnsupportedTimeframe(String),

    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from analysis service: {0}")]
    Decode(String),
}

impl BridgeError {
    /// Rejected before any request went out
    pub fn is_validation(&self) -> bool {
        matches!(self, BridgeError::MissingSymbol | BridgeError::UnsupportedTimeframe(_))
    }

    /// Text to put in the error area.
    ///
    /// Remote failures are shown verbatim except that anything mentioning
    /// `out-of-bounds` (the server's symptom of an unknown pair) becomes
    /// [`INVALID_PAIR_MESSAGE`].
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if !self.is_validation() && message.contains("out-of-bounds") {
            return INVALID_PAIR_MESSAGE.to_string();
        }
        message
    }
}
