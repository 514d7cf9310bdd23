//! Chart composer.

use super::layout::{DisplayConfig, Layout, chart_layout, display_config};
use super::trace::{CandleSide, CandlestickTrace, LineStyle, ScatterTrace, Trace, TraceRole};
use serde::Serialize;
use simdash_domain::entities::SimulationResult;
use simdash_domain::enums::{ChartMode, Indicator, Overlay};
use simdash_domain::view_state::ViewState;
use tracing::{debug, warn};

const RISING: &str = "#00f2ff";
const FALLING: &str = "#ff0055";

/// What to draw when candle mode is selected but the result has no
/// OHLC data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingCandlePolicy {
    /// Draw no base trace and attach a notice.
    #[default]
    OmitWithWarning,
    /// Draw the actual-price line instead.
    FallbackToLine,
}

/// Composer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerOptions {
    /// Period shown in the indicator legend names.
    pub indicator_period: u32,
    /// Policy for candle mode without candle data.
    pub missing_candle: MissingCandlePolicy,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            indicator_period: 5,
            missing_candle: MissingCandlePolicy::default(),
        }
    }
}

impl ComposerOptions {
    #[must_use]
    pub fn with_indicator_period(mut self, period: u32) -> Self {
        self.indicator_period = period;
        self
    }

    #[must_use]
    pub fn with_missing_candle(mut self, policy: MissingCandlePolicy) -> Self {
        self.missing_candle = policy;
        self
    }
}

/// Something the user should be told about a composed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartNotice {
    /// Candle mode is active but the result carries no OHLC data.
    CandleDataUnavailable,
    /// Candle mode fell back to the price line.
    CandleFallbackToLine,
}

impl ChartNotice {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::CandleDataUnavailable => "Candlestick data is not available for this result",
            Self::CandleFallbackToLine => {
                "Candlestick data is not available, showing the price line instead"
            }
        }
    }
}

/// Everything the renderer needs for one draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedChart<'a> {
    /// Ordered traces: base, prediction, SMA, EMA.
    #[serde(rename = "data")]
    pub traces: Vec<Trace<'a>>,
    pub layout: Layout,
    pub config: DisplayConfig,
    #[serde(skip)]
    pub notices: Vec<ChartNotice>,
}

impl ComposedChart<'_> {
    /// Roles of the traces in draw order.
    #[must_use]
    pub fn roles(&self) -> Vec<TraceRole> {
        self.traces.iter().map(Trace::role).collect()
    }

    /// Whether a base trace was produced.
    #[must_use]
    pub fn has_base(&self) -> bool {
        self.traces.first().is_some_and(|t| t.role() == TraceRole::Base)
    }
}

/// Builds the chart from the current result and view state.
///
/// Composition is deterministic: the same inputs always yield the same
/// traces in the same order.
#[derive(Debug, Clone, Default)]
pub struct ChartComposer {
    options: ComposerOptions,
}

impl ChartComposer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ComposerOptions) -> Self {
        Self { options }
    }

    /// Composes the chart. Returns `None` when there is no result yet,
    /// in which case nothing should be rendered.
    #[must_use]
    pub fn compose<'a>(
        &self,
        result: Option<&'a SimulationResult>,
        view: &ViewState,
    ) -> Option<ComposedChart<'a>> {
        let result = result?;
        let mut traces = Vec::with_capacity(1 + Overlay::ALL.len());
        let mut notices = Vec::new();

        match view.mode() {
            ChartMode::Line => traces.push(price_line(result)),
            ChartMode::Candle => match candlestick(result) {
                Some(trace) => traces.push(trace),
                None => match self.options.missing_candle {
                    MissingCandlePolicy::OmitWithWarning => {
                        warn!("Candle mode selected but result has no OHLC data");
                        notices.push(ChartNotice::CandleDataUnavailable);
                    }
                    MissingCandlePolicy::FallbackToLine => {
                        warn!("Candle mode selected without OHLC data, falling back to line");
                        notices.push(ChartNotice::CandleFallbackToLine);
                        traces.push(price_line(result));
                    }
                },
            },
        }

        for overlay in Overlay::ALL {
            if !view.is_enabled(overlay) {
                continue;
            }
            match self.overlay(result, overlay) {
                Some(trace) => traces.push(trace),
                None => debug!(overlay = overlay.as_str(), "Overlay enabled but series absent"),
            }
        }

        Some(ComposedChart {
            traces,
            layout: chart_layout(),
            config: display_config(),
            notices,
        })
    }

    fn overlay<'a>(&self, result: &'a SimulationResult, overlay: Overlay) -> Option<Trace<'a>> {
        let dates = result.dates.as_slice();
        let period = self.options.indicator_period;

        let trace = match overlay {
            Overlay::Prediction => ScatterTrace::line(
                TraceRole::Prediction,
                dates,
                result.predicted_prices.as_deref()?,
                "Predicted",
                LineStyle::solid(RISING, 2.0),
            )
            .fill_to_zero("rgba(0, 242, 255, 0.05)"),
            Overlay::Sma => ScatterTrace::line(
                TraceRole::Sma,
                dates,
                result.indicator(Indicator::Sma)?,
                format!("SMA ({period})"),
                LineStyle::dotted("#ffaa00", 1.5),
            ),
            Overlay::Ema => ScatterTrace::line(
                TraceRole::Ema,
                dates,
                result.indicator(Indicator::Ema)?,
                format!("EMA ({period})"),
                LineStyle::solid(FALLING, 1.5),
            ),
        };
        Some(Trace::Scatter(trace))
    }
}

fn price_line(result: &SimulationResult) -> Trace<'_> {
    Trace::Scatter(ScatterTrace::line(
        TraceRole::Base,
        &result.dates,
        &result.actual_prices,
        "Actual Price",
        LineStyle::solid("rgba(255, 255, 255, 0.8)", 2.0),
    ))
}

fn candlestick(result: &SimulationResult) -> Option<Trace<'_>> {
    let ohlc = result.ohlc.as_ref()?;
    Some(Trace::Candlestick(CandlestickTrace {
        x: &result.dates,
        open: &ohlc.open,
        high: &ohlc.high,
        low: &ohlc.low,
        close: &ohlc.close,
        increasing: CandleSide {
            line: LineStyle::color_only(RISING),
        },
        decreasing: CandleSide {
            line: LineStyle::color_only(FALLING),
        },
        line: LineStyle::color_only("rgba(31,119,180,1)"),
        xaxis: "x",
        yaxis: "y",
        name: "OHLC".to_string(),
    }))
}
