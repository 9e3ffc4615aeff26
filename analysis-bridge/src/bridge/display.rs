use analysis_core::ChartConfig;

use crate::bridge::state::{Panel, SubmitControl, UiState};

/// The widgets the analysis screen drives
pub trait DisplaySurface: Send {
    fn set_submit_control(&mut self, control: SubmitControl);

    /// Replace the console text area contents
    fn show_console(&mut self, text: &str);

    /// Show `Some(message)` in the error area, or hide it on `None`
    fn show_error(&mut self, message: Option<&str>);

    fn show_panel(&mut self, panel: Panel);

    /// Tear down any existing chart and construct a new one
    fn init_chart(&mut self, config: &ChartConfig);
}

/// Push the differences between two states to the surface.
///
/// Call order follows the screen's update order: error area, button,
/// console, panel, then chart. Every applied response pushes its console
/// text, even when it repeats the previous one.
pub fn render_changes<D: DisplaySurface + ?Sized>(
    prev: &UiState,
    next: &UiState,
    surface: &mut D,
) {
    let new_response = prev.chart_revision != next.chart_revision;

    if prev.error != next.error {
        surface.show_error(next.error.as_deref());
    }
    if prev.submit != next.submit {
        surface.set_submit_control(next.submit);
    }
    if new_response || prev.console_output != next.console_output {
        surface.show_console(&next.console_output);
    }
    if prev.panel != next.panel {
        surface.show_panel(next.panel);
    }
    if new_response {
        if let Some(chart) = &next.chart {
            surface.init_chart(chart);
        }
    }
}

/// Push the full state, e.g. when a surface is first attached.
pub fn render_all<D: DisplaySurface + ?Sized>(state: &UiState, surface: &mut D) {
    surface.show_error(state.error.as_deref());
    surface.set_submit_control(state.submit);
    surface.show_console(&state.console_output);
    surface.show_panel(state.panel);
    if let Some(chart) = &state.chart {
        surface.init_chart(chart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::{AnalysisResponse, ChartSettings, MarketType};
    use chrono::Utc;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl DisplaySurface for Recorder {
        fn set_submit_control(&mut self, control: SubmitControl) {
            self.events.push(format!("submit:{}", control.label()));
        }
        fn show_console(&mut self, text: &str) {
            self.events.push(format!("console:{}", text));
        }
        fn show_error(&mut self, message: Option<&str>) {
            self.events.push(format!("error:{}", message.unwrap_or("-")));
        }
        fn show_panel(&mut self, panel: Panel) {
            self.events.push(format!("panel:{:?}", panel));
        }
        fn init_chart(&mut self, config: &ChartConfig) {
            self.events.push(format!("chart:{}@{}", config.symbol, config.interval));
        }
    }

    fn chart() -> ChartConfig {
        ChartConfig::new(
            &ChartSettings::default(),
            "BTCUSDT",
            MarketType::Futures,
            "4h",
        )
    }

    fn ok(text: &str) -> AnalysisResponse {
        AnalysisResponse {
            console_output: text.to_string(),
            structured_data: None,
        }
    }

    #[test]
    fn test_render_only_changes() {
        let idle = UiState::new();
        let (loading, ticket) = idle.begin_submission(Utc::now());

        let mut rec = Recorder::default();
        render_changes(&idle, &loading, &mut rec);
        assert_eq!(rec.events, vec!["submit:Loading..."]);

        let done = loading.apply_success(&ticket, ok("OK"), chart()).unwrap();

        let mut rec = Recorder::default();
        render_changes(&loading, &done, &mut rec);
        assert_eq!(
            rec.events,
            vec![
                "submit:Analyze",
                "console:OK",
                "panel:Results",
                "chart:BINANCE:BTCUSDT.P@240"
            ]
        );
    }

    #[test]
    fn test_repeated_console_text_is_pushed_again() {
        let (loading, ticket) = UiState::new().begin_submission(Utc::now());
        let first = loading.apply_success(&ticket, ok("OK"), chart()).unwrap();
        let (loading, ticket) = first.begin_submission(Utc::now());
        let second = loading.apply_success(&ticket, ok("OK"), chart()).unwrap();

        let mut rec = Recorder::default();
        render_changes(&loading, &second, &mut rec);
        assert_eq!(
            rec.events,
            vec!["submit:Analyze", "console:OK", "chart:BINANCE:BTCUSDT.P@240"]
        );
    }

    #[test]
    fn test_render_all_without_chart() {
        let mut rec = Recorder::default();
        render_all(&UiState::new(), &mut rec);
        assert_eq!(
            rec.events,
            vec!["error:-", "submit:Analyze", "console:", "panel:Input"]
        );
    }
}
