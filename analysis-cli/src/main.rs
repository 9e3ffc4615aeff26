mod terminal;

use analysis_bridge::{
    AnalysisForm, AnalysisSession, BridgeConfig, HttpAnalysisService, SubmissionOutcome,
};
use analysis_core::cheatsheet::render_cheatsheet;
use analysis_core::{chart_interval, MarketType, Timeframe, TradeType};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use terminal::TerminalSurface;

#[derive(Parser)]
#[command(name = "analysis-cli")]
#[command(about = "Client for the crypto technical-analysis service")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request an analysis and print the report
    Analyze {
        /// Trading pair, e.g. BTCUSDT (case-insensitive)
        #[arg(short, long)]
        symbol: String,

        /// Market type (spot or futures)
        #[arg(short, long, default_value = "spot")]
        market: MarketType,

        /// Position to evaluate (long or short)
        #[arg(short, long, default_value = "long")]
        position: TradeType,

        /// Timeframe token (1m, 3m, 5m, 15m, 30m, 1h, 2h, 4h, 6h, 8h, 12h, 1d, 3d, 1w, 1M)
        #[arg(short, long, default_value = "1h")]
        timeframe: String,

        /// Analysis service origin
        #[arg(long, default_value = "http://localhost:5000")]
        server_url: String,

        /// Give up after this many seconds (no limit by default)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Ignore HTTP(S)_PROXY settings from the environment
        #[arg(long)]
        no_proxy: bool,

        /// Print the full chart widget configuration as JSON
        #[arg(long)]
        chart_json: bool,

        /// Print price targets from the structured data, if any
        #[arg(long)]
        targets: bool,
    },

    /// Convert a timeframe token to the chart widget's interval
    Interval {
        token: String,
    },

    /// List supported timeframes by category
    Timeframes,

    /// Print the indicator cheat sheet
    Cheatsheet,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "analysis_cli={},analysis_bridge={},analysis_core={}",
                cli.log_level, cli.log_level, cli.log_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Analyze {
            symbol,
            market,
            position,
            timeframe,
            server_url,
            timeout_secs,
            no_proxy,
            chart_json,
            targets,
        } => {
            let config = BridgeConfig {
                service_url: server_url,
                request_timeout: timeout_secs.map(Duration::from_secs),
                use_system_proxy: !no_proxy,
                ..BridgeConfig::default()
            };

            tracing::info!("Configuration:");
            tracing::info!("  Service URL: {}", config.service_url);
            tracing::info!("  Timeout: {:?}", config.request_timeout);

            let service =
                HttpAnalysisService::new(&config).context("Failed to set up analysis client")?;
            let surface = TerminalSurface::new(std::io::stdout(), std::io::stderr(), chart_json);
            let session = AnalysisSession::new(service, config.chart.clone(), surface);

            let form = AnalysisForm::new(symbol, market, position, timeframe);
            let outcome = session.submit(form).await;
            let (_, mut surface) = session.into_parts();

            match outcome {
                SubmissionOutcome::Applied(response) => {
                    if targets {
                        let data = response.structured_data.as_ref();
                        match data.and_then(|d| d.price_targets()) {
                            Some(t) if !t.is_empty() => {
                                surface.print_targets(&t, data.and_then(|d| d.price))
                            }
                            _ => tracing::warn!("Response carried no price targets"),
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                SubmissionOutcome::Rejected(_) => Ok(ExitCode::from(2)),
                SubmissionOutcome::Failed(_) | SubmissionOutcome::Superseded => {
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Interval { token } => {
            if token.parse::<Timeframe>().is_err() {
                tracing::warn!("Unknown timeframe {:?}, using default interval", token);
            }
            println!("{}", chart_interval(&token));
            Ok(ExitCode::SUCCESS)
        }

        Command::Timeframes => {
            let mut current = None;
            for tf in Timeframe::all() {
                let category = tf.category();
                if current != Some(category) {
                    println!("{}:", category.label());
                    current = Some(category);
                }
                let (value, unit) = tf.split();
                println!(
                    "  {:<4} chart={:<4} request={} {}",
                    tf.as_str(),
                    tf.chart_interval(),
                    value,
                    unit
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Cheatsheet => {
            println!("{}", render_cheatsheet());
            Ok(ExitCode::SUCCESS)
        }
    }
}
