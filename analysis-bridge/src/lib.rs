pub mod bridge;
pub mod config;
pub mod error;

// Re-export commonly used items
pub use bridge::{
    AnalysisForm, AnalysisService, AnalysisSession, DisplaySurface, HttpAnalysisService, Panel,
    SubmissionOutcome, SubmitControl, UiState,
};
pub use config::BridgeConfig;
pub use error::{BridgeError, GENERIC_FAILURE_MESSAGE, INVALID_PAIR_MESSAGE};
