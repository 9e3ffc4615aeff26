//! Explicit UI state for the analysis screen.
//!
//! Every transition is a pure function from the current state to the next
//! one; nothing here touches a display. See `display` for the adapter that
//! pushes state changes to real widgets.

use analysis_core::{AnalysisResponse, ChartConfig, StructuredData};
use chrono::{DateTime, Utc};

use crate::error::BridgeError;

/// Which half of the screen is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    /// Form and cheat sheet
    #[default]
    Input,
    /// Console output and chart
    Results,
}

/// State of the submit button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitControl {
    #[default]
    Idle,
    Loading,
}

impl SubmitControl {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitControl::Idle => "Analyze",
            SubmitControl::Loading => "Loading...",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitControl::Idle)
    }
}

/// Handle for one accepted submission.
///
/// Only the ticket with the latest generation may apply its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub panel: Panel,
    pub submit: SubmitControl,
    pub console_output: String,
    pub error: Option<String>,
    pub chart: Option<ChartConfig>,
    /// Bumped on every chart (re)initialization, even with identical config
    pub chart_revision: u64,
    pub structured_data: Option<StructuredData>,
    /// Generation of the most recently accepted submission
    pub generation: u64,
    pending: Option<u64>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request is out and its outcome has not been applied yet
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.pending == Some(ticket.generation)
    }

    /// Accept a submission: clear the error, show loading, and issue a
    /// ticket that supersedes any request still in flight.
    pub fn begin_submission(&self, issued_at: DateTime<Utc>) -> (UiState, RequestTicket) {
        let generation = self.generation + 1;
        let next = UiState {
            submit: SubmitControl::Loading,
            error: None,
            generation,
            pending: Some(generation),
            ..self.clone()
        };
        (next, RequestTicket { generation, issued_at })
    }

    /// Refuse a submission locally and re-enable the button.
    ///
    /// Any request still in flight is superseded, so its outcome can no
    /// longer overwrite the validation message.
    pub fn reject_submission(&self, error: &BridgeError) -> UiState {
        UiState {
            error: Some(error.user_message()),
            submit: SubmitControl::Idle,
            pending: None,
            ..self.clone()
        }
    }

    /// Apply a successful response. Returns `None` for a superseded ticket.
    pub fn apply_success(
        &self,
        ticket: &RequestTicket,
        response: AnalysisResponse,
        chart: ChartConfig,
    ) -> Option<UiState> {
        if !self.is_current(ticket) {
            return None;
        }
        Some(UiState {
            panel: Panel::Results,
            submit: SubmitControl::Idle,
            console_output: response.console_output,
            error: None,
            chart: Some(chart),
            chart_revision: self.chart_revision + 1,
            structured_data: response.structured_data,
            generation: self.generation,
            pending: None,
        })
    }

    /// Apply a failed request. Returns `None` for a superseded ticket.
    pub fn apply_failure(&self, ticket: &RequestTicket, error: &BridgeError) -> Option<UiState> {
        if !self.is_current(ticket) {
            return None;
        }
        Some(UiState {
            submit: SubmitControl::Idle,
            error: Some(error.user_message()),
            pending: None,
            ..self.clone()
        })
    }

    /// Back to the form; results stay in memory.
    pub fn show_input(&self) -> UiState {
        UiState {
            panel: Panel::Input,
            ..self.clone()
        }
    }
}
