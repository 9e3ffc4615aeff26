pub mod display;
pub mod form;
pub mod service;
pub mod session;
pub mod state;

// Re-export commonly used items
pub use display::{render_all, render_changes, DisplaySurface};
pub use form::{AnalysisForm, PreparedSubmission};
pub use service::{AnalysisService, HttpAnalysisService};
pub use session::{AnalysisSession, SubmissionOutcome};
pub use state::{Panel, RequestTicket, SubmitControl, UiState};
