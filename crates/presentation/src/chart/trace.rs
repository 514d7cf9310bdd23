//! Trace descriptors in the renderer's declarative shape.
//!
//! Traces borrow their data from the simulation result, so composing a
//! chart never copies the series.

use serde::Serialize;

/// Position of a trace in the composed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraceRole {
    /// Mandatory price trace.
    Base,
    /// Prediction overlay.
    Prediction,
    /// SMA overlay.
    Sma,
    /// EMA overlay.
    Ema,
}

/// Stroke of a line or candle body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

impl LineStyle {
    #[must_use]
    pub fn solid(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width: Some(width),
            dash: None,
        }
    }

    #[must_use]
    pub fn dotted(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width: Some(width),
            dash: Some("dot"),
        }
    }

    #[must_use]
    pub fn color_only(color: &'static str) -> Self {
        Self {
            color,
            width: None,
            dash: None,
        }
    }
}

/// A line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace<'a> {
    #[serde(skip)]
    pub role: TraceRole,
    pub x: &'a [String],
    pub y: &'a [f64],
    pub mode: &'static str,
    pub name: String,
    pub line: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<&'static str>,
}

impl<'a> ScatterTrace<'a> {
    /// Creates a plain line trace.
    pub fn line(
        role: TraceRole,
        x: &'a [String],
        y: &'a [f64],
        name: impl Into<String>,
        line: LineStyle,
    ) -> Self {
        Self {
            role,
            x,
            y,
            mode: "lines",
            name: name.into(),
            line,
            fill: None,
            fillcolor: None,
        }
    }

    /// Fills the area between the line and zero.
    #[must_use]
    pub fn fill_to_zero(mut self, color: &'static str) -> Self {
        self.fill = Some("tozeroy");
        self.fillcolor = Some(color);
        self
    }
}

/// Color of rising or falling candles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSide {
    pub line: LineStyle,
}

/// An OHLC candlestick series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickTrace<'a> {
    pub x: &'a [String],
    pub open: &'a [f64],
    pub high: &'a [f64],
    pub low: &'a [f64],
    pub close: &'a [f64],
    pub increasing: CandleSide,
    pub decreasing: CandleSide,
    pub line: LineStyle,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
    pub name: String,
}

/// One renderable series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace<'a> {
    Scatter(ScatterTrace<'a>),
    Candlestick(CandlestickTrace<'a>),
}

impl Trace<'_> {
    /// Where this trace sits in the chart.
    #[must_use]
    pub fn role(&self) -> TraceRole {
        match self {
            Self::Scatter(t) => t.role,
            Self::Candlestick(_) => TraceRole::Base,
        }
    }

    /// Legend name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scatter(t) => &t.name,
            Self::Candlestick(t) => &t.name,
        }
    }
}
