use analysis_bridge::{DisplaySurface, Panel, SubmitControl};
use analysis_core::{format_price, ChartConfig, PriceTargets};
use std::io::Write;

/// Display surface backed by two text streams.
///
/// Console output and chart details go to `out`; progress and errors go
/// to `err`.
pub struct TerminalSurface<O, E> {
    out: O,
    err: E,
    chart_json: bool,
}

impl<O: Write + Send, E: Write + Send> TerminalSurface<O, E> {
    pub fn new(out: O, err: E, chart_json: bool) -> Self {
        Self { out, err, chart_json }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Print the four target levels relative to `price`.
    pub fn print_targets(&mut self, targets: &PriceTargets, price: Option<f64>) {
        let mut lines = Vec::new();
        lines.push("Price targets".to_string());
        if let Some(price) = price {
            lines.push(format!("  Current:      ${}", format_price(price)));
        }
        let levels = [
            ("Conservative", targets.conservative),
            ("Moderate", targets.moderate),
            ("Aggressive", targets.aggressive),
            ("Stop loss", targets.stop_loss),
        ];
        for (name, level) in levels {
            if let Some(level) = level {
                let delta = price
                    .map(|p| {
                        let sign = if level >= p { "+" } else { "-" };
                        format!(" ({}{})", sign, format_price((level - p).abs()))
                    })
                    .unwrap_or_default();
                let label = format!("{}:", name);
                lines.push(format!("  {:<13} ${}{}", label, format_price(level), delta));
            }
        }
        self.write_out(&lines.join("\n"));
    }

    fn write_out(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }

    fn write_err(&mut self, text: &str) {
        if let Err(e) = writeln!(self.err, "{}", text) {
            tracing::warn!("Failed to write error output: {}", e);
        }
    }
}

impl<O: Write + Send, E: Write + Send> DisplaySurface for TerminalSurface<O, E> {
    fn set_submit_control(&mut self, control: SubmitControl) {
        if control == SubmitControl::Loading {
            self.write_err("⏳ Analyzing...");
        }
    }

    fn show_console(&mut self, text: &str) {
        if !text.is_empty() {
            self.write_out(text);
        }
    }

    fn show_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.write_err(&format!("❌ {}", message));
        }
    }

    fn show_panel(&mut self, panel: Panel) {
        tracing::debug!("Panel: {:?}", panel);
    }

    fn init_chart(&mut self, config: &ChartConfig) {
        if self.chart_json {
            match serde_json::to_string_pretty(config) {
                Ok(json) => self.write_out(&json),
                Err(e) => tracing::warn!("Failed to serialize chart config: {}", e),
            }
        } else {
            self.write_out(&format!("📈 Chart: {} @ {}", config.symbol, config.interval));
        }
    }
}
