//! Command Line Interface for the simulation dashboard.
mod console;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use console::{ConsoleSurface, metrics_table};
use dotenv::dotenv;
use rust_decimal::Decimal;
use simdash_dashboard::{DEFAULT_TARGET, Dashboard, HtmlRenderer, Renderer, RunOutcome};
use simdash_dashboard::upload::UploadOutcome;
use simdash_data::{BackendConfig, HttpBackend};
use simdash_domain::entities::{FilePayload, SimulationResult};
use simdash_domain::enums::{ChartMode, Overlay};
use simdash_domain::value_objects::SimulationParameters;
use simdash_domain::view_state::{OverlayFlags, ViewState};
use simdash_presentation::{ChartComposer, ComposerOptions, MetricsPresenter, MissingCandlePolicy};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "simdash")]
#[command(about = "Trading Simulation Dashboard CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Line,
    Candle,
}

impl From<ModeArg> for ChartMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Line => ChartMode::Line,
            ModeArg::Candle => ChartMode::Candle,
        }
    }
}

/// Chart options shared by both commands.
#[derive(clap::Args, Debug)]
struct ChartArgs {
    /// Base chart representation
    #[arg(long, value_enum, default_value = "line")]
    mode: ModeArg,

    /// Hide the model prediction overlay
    #[arg(long)]
    no_prediction: bool,

    /// Hide the SMA overlay
    #[arg(long)]
    no_sma: bool,

    /// Hide the EMA overlay
    #[arg(long)]
    no_ema: bool,

    /// Period shown in the indicator legend names
    #[arg(long, default_value_t = 5)]
    indicator_period: u32,

    /// Draw a line when candle mode has no OHLC data
    #[arg(long)]
    fallback_to_line: bool,

    /// Output HTML file
    #[arg(short, long, default_value = "chart.html")]
    out: PathBuf,
}

impl ChartArgs {
    fn view(&self) -> ViewState {
        let mut overlays = OverlayFlags::all();
        overlays.set(Overlay::Prediction, !self.no_prediction);
        overlays.set(Overlay::Sma, !self.no_sma);
        overlays.set(Overlay::Ema, !self.no_ema);
        ViewState::with_defaults(self.mode.into(), overlays)
    }

    fn composer(&self) -> ChartComposer {
        let policy = if self.fallback_to_line {
            MissingCandlePolicy::FallbackToLine
        } else {
            MissingCandlePolicy::OmitWithWarning
        };
        ChartComposer::with_options(
            ComposerOptions::default()
                .with_indicator_period(self.indicator_period)
                .with_missing_candle(policy),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a dataset, run a simulation and render the chart
    Run {
        /// CSV dataset to upload
        #[arg(short, long)]
        file: PathBuf,

        /// Training epochs
        #[arg(short, long, default_value_t = 3)]
        epochs: u32,

        /// Window size
        #[arg(short, long, default_value_t = 10)]
        window: u32,

        /// Initial balance
        #[arg(short, long, default_value = "10000")]
        balance: Decimal,

        /// Service root; defaults to SIMDASH_BACKEND_URL
        #[arg(long)]
        backend: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Render a saved simulation result without contacting the service
    Render {
        /// JSON result file
        #[arg(short, long)]
        result: PathBuf,

        #[command(flatten)]
        chart: ChartArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            epochs,
            window,
            balance,
            backend,
            timeout,
            chart,
        } => {
            let base_url = backend
                .or_else(|| env::var("SIMDASH_BACKEND_URL").ok())
                .unwrap_or_else(|| BackendConfig::default().base_url);
            let mut config = BackendConfig::new(base_url);
            if let Some(secs) = timeout {
                config = config.with_timeout(Duration::from_secs(secs));
            }
            let parameters = SimulationParameters::new(epochs, window, balance)?;

            println!("📡 Connecting to {}...", config.base_url);
            let backend = Arc::new(HttpBackend::new(config)?);
            let renderer = HtmlRenderer::new(chart.out.clone());
            let mut dashboard = Dashboard::new(backend, renderer, ConsoleSurface::new())
                .with_view(chart.view())
                .with_composer(chart.composer());

            let payload = read_payload(&file).await?;
            if let UploadOutcome::Failed { message, .. } = dashboard.upload(payload).await {
                bail!("upload failed: {message}");
            }

            match dashboard.run_simulation(&parameters.to_form()).await {
                RunOutcome::Completed { run_id, points } => {
                    info!(run_id = %run_id, points, "Simulation completed");
                    if let Some(result) = dashboard.state().results.current() {
                        print_period(result);
                    }
                    println!("✅ Chart written to {}", chart.out.display());
                }
                RunOutcome::Failed { message, .. } => bail!("simulation failed: {message}"),
                RunOutcome::Rejected(err) => bail!("invalid parameters: {err}"),
                RunOutcome::Busy => bail!("a simulation is already running"),
            }
        }
        Commands::Render { result, chart } => {
            let raw = tokio::fs::read_to_string(&result)
                .await
                .with_context(|| format!("reading {}", result.display()))?;
            let result: SimulationResult = serde_json::from_str(&raw)?;
            result.validate()?;

            let composer = chart.composer();
            let view = chart.view();
            let Some(composed) = composer.compose(Some(&result), &view) else {
                bail!("nothing to render");
            };
            for notice in &composed.notices {
                println!("⚠️  {}", notice.message());
            }

            let mut renderer = HtmlRenderer::new(chart.out.clone());
            renderer.render(DEFAULT_TARGET, &composed)?;

            println!("\n📊 Simulation Results");
            metrics_table(&MetricsPresenter::present(&result.metrics)).printstd();
            print_period(&result);
            println!(
                "✅ {} traces written to {}",
                composed.traces.len(),
                renderer.path().display()
            );
        }
    }

    Ok(())
}

async fn read_payload(path: &Path) -> Result<FilePayload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset.csv".to_string());
    Ok(FilePayload::new(name, bytes))
}

fn print_period(result: &SimulationResult) {
    match result.period() {
        Some((start, end)) => println!("📅 {} data points from {start} to {end}", result.len()),
        None => println!("📅 {} data points", result.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["simdash", "run", "--file", "data.csv"]).unwrap();
        let Commands::Run {
            epochs,
            window,
            balance,
            chart,
            ..
        } = cli.command
        else {
            panic!("expected run");
        };
        assert_eq!(epochs, 3);
        assert_eq!(window, 10);
        assert_eq!(balance, Decimal::from(10000));
        assert_eq!(chart.out, PathBuf::from("chart.html"));
        assert_eq!(chart.view(), ViewState::default());
    }

    #[test]
    fn test_render_flags_shape_view() {
        let cli = Cli::try_parse_from([
            "simdash", "render", "--result", "r.json", "--mode", "candle", "--no-sma",
        ])
        .unwrap();
        let Commands::Render { chart, .. } = cli.command else {
            panic!("expected render");
        };
        let view = chart.view();
        assert_eq!(view.mode(), ChartMode::Candle);
        assert!(!view.is_enabled(Overlay::Sma));
        assert!(view.is_enabled(Overlay::Ema));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Cli::try_parse_from(["simdash", "run"]).is_err());
    }
}
